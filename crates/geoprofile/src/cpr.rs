//! Probable residence center (CPR): weighted robust location estimate.
//!
//! Each event gets a combined weight
//! `w = pb * base + jw * journey + dt * decay` where
//! - `base` is the event's base weight (explicit or per `EventKind`),
//! - `journey = exp(-0.5 * (d / journey_radius)²)` with `d` the distance to the
//!   unweighted centroid,
//! - `decay = exp(-time_decay_rate * (max_year - year))`, undated events
//!   counting as the most recent.
//!
//! The location is then refined by the damped Weiszfeld loop of
//! `center::weiszfeld` with per-point weights `w / (d + sqrt_epsilon)`.
//! Component weights are used exactly as configured.
//!
//! Code cross-refs: `center::{centroid, fermat_point}`, `dispersion::std_dev_distances`

use nalgebra::Vector2;

use crate::center::centroid;
use crate::center::weiszfeld::damped_weiszfeld;
use crate::cfg::ProfileCfg;
use crate::dispersion::std_dev_distances;
use crate::types::Point;

/// Combined CPR weight of every point, in input order.
pub fn cpr_weights(points: &[Point], cfg: &ProfileCfg) -> Vec<f64> {
    let reference = centroid(points).at;
    let max_year = points.iter().filter_map(|p| p.year).max();
    points
        .iter()
        .map(|p| {
            let d = (p.pos() - reference).norm();
            let journey = (-0.5 * (d / cfg.journey_radius).powi(2)).exp();
            let delta_years = match (max_year, p.year) {
                (Some(max), Some(y)) => f64::from(max) - f64::from(y),
                _ => 0.0,
            };
            let decay = (-cfg.time_decay_rate * delta_years).exp();
            cfg.pb_component_weight * p.base_weight(cfg)
                + cfg.jw_component_weight * journey
                + cfg.dt_component_weight * decay
        })
        .collect()
}

/// Probable residence location; `(0, 0)` for an empty set.
///
/// Falls back to the unweighted centroid if the iteration turns non-finite
/// (e.g. every combined weight is zero). No radius is produced here; see
/// `cpr_radius`.
pub fn probable_residence(points: &[Point], cfg: &ProfileCfg) -> Vector2<f64> {
    if points.is_empty() {
        return Vector2::zeros();
    }
    let start = centroid(points).at;
    let weights = cpr_weights(points, cfg);
    let eps = cfg.sqrt_epsilon;
    damped_weiszfeld(points, start, cfg, |i, d2| weights[i] / (d2.sqrt() + eps))
        .unwrap_or(start)
}

/// Display radius for a CPR location: standard deviation of the distances
/// to `at`, capped at `cfg.cpr_radius_limit`.
pub fn cpr_radius(points: &[Point], at: Vector2<f64>, cfg: &ProfileCfg) -> f64 {
    std_dev_distances(points, at).min(cfg.cpr_radius_limit)
}
