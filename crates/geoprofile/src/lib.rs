//! Spatial central tendency and dispersion for planar event locations.
//!
//! The engine works on points that were already projected into a metric plane
//! (meters). It never touches geographic coordinates, rendering, or storage.
//!
//! Layout
//! - `types`, `cfg`: points, centers, and the explicit configuration object.
//! - `primitives`: distances, bounding boxes, orientation.
//! - `center`: centroid, coordinate median, geometric median (Weiszfeld).
//! - `cluster`: Canter (maximum-diameter) circle and convex hull.
//! - `dispersion`: standard distance, MID, nearest-neighbor index.
//! - `cpr`: weighted probable-residence estimate.
//! - `profile`: runs everything once for a point set.
//! - `synth`: seeded synthetic point patterns for tests and benches.
//!
//! Every estimator is a deterministic function of `(points, cfg)` and is total:
//! empty, single-point, and degenerate inputs return defined values.

pub mod center;
pub mod cfg;
pub mod cluster;
pub mod cpr;
pub mod dispersion;
pub mod primitives;
pub mod profile;
pub mod synth;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{CfgError, ProfileCfg};
pub use nalgebra::Vector2 as Vec2;
pub use types::{Center, EventKind, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::center::{centroid, coordinate_median, fermat_point};
    pub use crate::cfg::{CfgError, ProfileCfg};
    pub use crate::cluster::{canter_circle, convex_hull, polygon_area};
    pub use crate::cpr::{cpr_radius, probable_residence};
    pub use crate::dispersion::{
        classify_nni, mean_interpoint_distance, nearest_neighbor_index, std_dev_distances,
        NniClass, NniResult,
    };
    pub use crate::primitives::{bounds, Bounds};
    pub use crate::profile::{profile, Profile};
    pub use crate::types::{Center, EventKind, Point};
    pub use nalgebra::Vector2 as Vec2;
}
