use nalgebra::Vector2;

use crate::types::{Center, Point};

/// Arithmetic mean of the points; radius is the distance to the farthest one.
pub fn centroid(points: &[Point]) -> Center {
    if points.is_empty() {
        return Center::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.pos());
    Center::enclosing(sum / points.len() as f64, points)
}

/// Median of `values` (mean of the two middle values for even counts); 0 when empty.
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) * 0.5
    } else {
        values[mid]
    }
}

/// Independent median of x and y; radius is the farthest distance from that point.
pub fn coordinate_median(points: &[Point]) -> Center {
    if points.is_empty() {
        return Center::origin();
    }
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let at = Vector2::new(median(&mut xs), median(&mut ys));
    Center::enclosing(at, points)
}
