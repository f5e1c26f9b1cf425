//! Central tendency estimators.
//!
//! Purpose
//! - `centroid`: arithmetic mean, radius to the farthest point.
//! - `coordinate_median`: per-axis medians (may not be an input point).
//! - `fermat_point`: geometric median via a damped Weiszfeld iteration, with a
//!   bounding-box shortcut for collinear sets and a centroid fallback when the
//!   iteration turns non-finite.
//!
//! All three return the `{0, 0, 0}` sentinel for an empty set.
//!
//! Code cross-refs: `cpr::probable_residence` (shares `weiszfeld::damped_weiszfeld`)

mod simple;
pub(crate) mod weiszfeld;

pub use simple::{centroid, coordinate_median, median};
pub use weiszfeld::{fermat_point, is_collinear, DAMPING};
