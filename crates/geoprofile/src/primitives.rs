//! Small geometric helpers shared by the estimators.
//!
//! Code cross-refs: `cluster::hull` (orientation), `dispersion` (bounds, distances)

use nalgebra::Vector2;

use crate::types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.pos() - b.pos()).norm()
}

/// Largest distance from `at` to any point; 0 for an empty set.
pub fn max_distance(at: Vector2<f64>, points: &[Point]) -> f64 {
    points
        .iter()
        .map(|p| (p.pos() - at).norm())
        .fold(0.0, f64::max)
}

/// Cross product of `b - a` and `c - a`.
/// Positive for a counter-clockwise turn a→b→c, zero when collinear.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }
}

/// Bounding box of `points`, or `None` for an empty set.
pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?.pos();
    let mut b = Bounds {
        min: first,
        max: first,
    };
    for p in &points[1..] {
        b.min.x = b.min.x.min(p.x);
        b.min.y = b.min.y.min(p.y);
        b.max.x = b.max.x.max(p.x);
        b.max.y = b.max.y.max(p.y);
    }
    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn distance_and_radius() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!((max_distance(vector![0.0, 0.0], &[a, b]) - 5.0).abs() < 1e-12);
        assert_eq!(max_distance(vector![1.0, 2.0], &[]), 0.0);
    }

    #[test]
    fn cross_orientation() {
        let o = vector![0.0, 0.0];
        assert!(cross(o, vector![1.0, 0.0], vector![0.0, 1.0]) > 0.0);
        assert!(cross(o, vector![0.0, 1.0], vector![1.0, 0.0]) < 0.0);
        assert_eq!(cross(o, vector![1.0, 1.0], vector![2.0, 2.0]), 0.0);
    }

    #[test]
    fn bounds_box() {
        assert!(bounds(&[]).is_none());
        let pts = [
            Point::new(1.0, -2.0),
            Point::new(-3.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let b = bounds(&pts).unwrap();
        assert_eq!(b.min, vector![-3.0, -2.0]);
        assert_eq!(b.max, vector![1.0, 4.0]);
        assert_eq!(b.area(), 24.0);
        assert_eq!(b.midpoint(), vector![-1.0, 1.0]);
    }
}
