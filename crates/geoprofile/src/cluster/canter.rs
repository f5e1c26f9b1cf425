use crate::types::{Center, Point};

/// Circle on the most distant pair of points.
///
/// Scans unordered pairs `(i, j)`, `i < j`, in index order and keeps a pair
/// only if it is strictly farther apart than the best so far, so the first
/// maximal pair wins ties. 0 or 1 points give a zero-radius circle on the
/// point (or the origin).
pub fn canter_circle(points: &[Point]) -> Center {
    match points {
        [] => return Center::origin(),
        [p] => {
            return Center {
                at: p.pos(),
                radius: 0.0,
            }
        }
        _ => {}
    }
    let mut best = (0usize, 1usize);
    let mut best_d = f64::NEG_INFINITY;
    for i in 0..points.len() {
        let a = points[i].pos();
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            let d = (q.pos() - a).norm();
            if d > best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    let (a, b) = (points[best.0].pos(), points[best.1].pos());
    Center {
        at: (a + b) * 0.5,
        radius: (b - a).norm() * 0.5,
    }
}
