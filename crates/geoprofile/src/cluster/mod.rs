//! Cluster geometry: Canter (maximum-diameter) circle and convex hull.
//!
//! - `canter_circle`: midpoint of the two most distant points, O(n²) scan,
//!   first maximal pair in scan order wins ties.
//! - `convex_hull`: Andrew's monotone chain, counter-clockwise, strictly convex.
//! - `polygon_area`: shoelace area of a hull.

mod canter;
mod hull;

pub use canter::canter_circle;
pub use hull::{convex_hull, polygon_area};
