//! Damped Weiszfeld iteration and the geometric median built on it.

use nalgebra::Vector2;
use tracing::debug;

use super::simple::centroid;
use crate::cfg::ProfileCfg;
use crate::primitives::{bounds, cross};
use crate::types::{Center, Point};

/// Fraction of the way each step moves toward the reweighted average.
pub const DAMPING: f64 = 0.67;

/// Damped, reweighted averaging starting at `start`.
///
/// `weight(i, d2)` returns the weight of point `i` given its squared distance
/// to the current estimate. Each step moves `DAMPING` of the way toward the
/// weighted average; the loop stops when the squared step is below
/// `cfg.position_tolerance` or after `cfg.max_iterations` steps.
///
/// Returns `None` as soon as an estimate is non-finite (e.g. all weights zero).
pub(crate) fn damped_weiszfeld<W>(
    points: &[Point],
    start: Vector2<f64>,
    cfg: &ProfileCfg,
    weight: W,
) -> Option<Vector2<f64>>
where
    W: Fn(usize, f64) -> f64,
{
    let mut cur = start;
    for iter in 0..cfg.max_iterations {
        let mut num: Vector2<f64> = Vector2::zeros();
        let mut den = 0.0;
        for (i, p) in points.iter().enumerate() {
            let q = p.pos();
            let w = weight(i, (q - cur).norm_squared());
            num += q * w;
            den += w;
        }
        let target = num / den;
        let next = cur + (target - cur) * DAMPING;
        if !(next.x.is_finite() && next.y.is_finite()) {
            debug!(iter, "weiszfeld estimate became non-finite");
            return None;
        }
        let step = (next - cur).norm_squared();
        cur = next;
        if step < cfg.position_tolerance {
            return Some(cur);
        }
    }
    debug!(
        max_iterations = cfg.max_iterations,
        "weiszfeld stopped at the iteration cap"
    );
    Some(cur)
}

/// True when every point after the first two spans (twice) a triangle area
/// below `threshold` with the first two points.
///
/// Needs at least 3 points to say anything; shorter slices count as collinear.
/// If the first two points coincide every area is 0, so the set is collinear.
pub fn is_collinear(points: &[Point], threshold: f64) -> bool {
    if points.len() < 3 {
        return true;
    }
    let a = points[0].pos();
    let b = points[1].pos();
    points[2..]
        .iter()
        .all(|p| cross(a, b, p.pos()).abs() < threshold)
}

/// Geometric median ("Fermat point") of the points.
///
/// - Empty set: `{0, 0, 0}`. Fewer than 3 points: the centroid.
/// - Collinear (see `is_collinear`): midpoint of the bounding box. This is a
///   cheap stand-in, not the 1-D median along the line.
/// - Otherwise a damped Weiszfeld run from the centroid with weights
///   `1 / sqrt(d² + sqrt_epsilon)`.
///
/// Never fails: a non-finite iterate yields the centroid instead.
pub fn fermat_point(points: &[Point], cfg: &ProfileCfg) -> Center {
    if points.is_empty() {
        return Center::origin();
    }
    let start = centroid(points);
    if points.len() < 3 {
        return start;
    }
    if is_collinear(points, cfg.collinearity_threshold) {
        return match bounds(points) {
            Some(b) => Center::enclosing(b.midpoint(), points),
            None => start,
        };
    }
    let eps = cfg.sqrt_epsilon;
    match damped_weiszfeld(points, start.at, cfg, |_, d2| 1.0 / (d2 + eps).sqrt()) {
        Some(at) => Center::enclosing(at, points),
        None => start,
    }
}
