use crate::primitives::cross;
use crate::types::Point;

/// Andrew's monotone chain convex hull.
///
/// Returns input points (attributes kept) in counter-clockwise order starting
/// at the lowest-x, lowest-y point, without repeating the first vertex.
/// Collinear and duplicate points on the boundary are dropped.
/// For fewer than 3 points the input is returned sorted by (x, y).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        push_ccw(&mut lower, *p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        push_ccw(&mut upper, *p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

// Pop until the last two chain points and `p` make a strict left turn.
#[inline]
fn push_ccw(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2
        && cross(
            chain[chain.len() - 2].pos(),
            chain[chain.len() - 1].pos(),
            p.pos(),
        ) <= 0.0
    {
        chain.pop();
    }
    chain.push(p);
}

/// Absolute shoelace area of a polygon; 0 for fewer than 3 vertices.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (k, p) in polygon.iter().enumerate() {
        let q = &polygon[(k + 1) % polygon.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    twice.abs() * 0.5
}
