//! Dispersion metrics: standard distance, mean interpoint distance, and the
//! nearest-neighbor index (NNI) with its qualitative classification.
//!
//! NNI conventions
//! - Points with a non-finite coordinate are ignored.
//! - Study area is the bounding box of the valid points, floored at
//!   `NNI_MIN_AREA` so near-collinear or coincident sets stay defined.
//! - Expected random-pattern distance is `0.5 * sqrt(area / n)`.
//!
//! The bounding-box area is translation invariant but only invariant under
//! rotations by multiples of 90°, so the index is too.

use std::fmt;

use nalgebra::Vector2;

use crate::primitives::bounds;
use crate::types::Point;

/// Smallest study area (square meters) used by the NNI.
pub const NNI_MIN_AREA: f64 = 100.0;

/// Population standard deviation of the distances from `at` to each point.
pub fn std_dev_distances(points: &[Point], at: Vector2<f64>) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    let dists: Vec<f64> = points.iter().map(|p| (p.pos() - at).norm()).collect();
    let mean = dists.iter().sum::<f64>() / n;
    let var = dists.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

/// Mean distance over all `n(n-1)/2` unordered pairs; 0 for fewer than 2 points.
pub fn mean_interpoint_distance(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n {
        let a = points[i].pos();
        for q in &points[i + 1..] {
            total += (q.pos() - a).norm();
        }
    }
    total / (n * (n - 1) / 2) as f64
}

/// Qualitative reading of a nearest-neighbor index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NniClass {
    StrongCluster,
    ModerateCluster,
    Random,
    ModerateDispersion,
    StrongDispersion,
}

impl NniClass {
    pub fn label(self) -> &'static str {
        match self {
            NniClass::StrongCluster => "strong cluster",
            NniClass::ModerateCluster => "moderate cluster",
            NniClass::Random => "random distribution",
            NniClass::ModerateDispersion => "moderate dispersion",
            NniClass::StrongDispersion => "strong dispersion",
        }
    }
}

impl fmt::Display for NniClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bands `[.., 0.5)`, `[0.5, 0.8)`, `[0.8, 1.2)`, `[1.2, 1.5)`, `[1.5, ..]`.
pub fn classify_nni(index: f64) -> NniClass {
    if index < 0.5 {
        NniClass::StrongCluster
    } else if index < 0.8 {
        NniClass::ModerateCluster
    } else if index < 1.2 {
        NniClass::Random
    } else if index < 1.5 {
        NniClass::ModerateDispersion
    } else {
        NniClass::StrongDispersion
    }
}

/// Nearest-neighbor index and its ingredients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NniResult {
    /// Observed over expected mean nearest-neighbor distance (0 if expected is 0).
    pub index: f64,
    pub mean_observed_distance: f64,
    pub mean_expected_distance: f64,
    /// Points per square meter of study area.
    pub density: f64,
    pub area: f64,
    pub count: usize,
    pub classification: NniClass,
}

/// Nearest-neighbor index over the finite points; `None` for fewer than 2.
pub fn nearest_neighbor_index(points: &[Point]) -> Option<NniResult> {
    let valid: Vec<Point> = points.iter().copied().filter(Point::is_finite).collect();
    let n = valid.len();
    if n < 2 {
        return None;
    }
    let area = bounds(&valid)?.area().max(NNI_MIN_AREA);

    let mut observed_sum = 0.0;
    for (i, p) in valid.iter().enumerate() {
        let nearest = valid
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, q)| (q.pos() - p.pos()).norm())
            .fold(f64::INFINITY, f64::min);
        observed_sum += nearest;
    }
    let count = n as f64;
    let mean_observed_distance = observed_sum / count;
    let mean_expected_distance = 0.5 * (area / count).sqrt();
    let index = if mean_expected_distance > 0.0 {
        mean_observed_distance / mean_expected_distance
    } else {
        0.0
    };
    Some(NniResult {
        index,
        mean_observed_distance,
        mean_expected_distance,
        density: count / area,
        area,
        count: n,
        classification: classify_nni(index),
    })
}
