//! One-shot report running every estimator over a point set.

use nalgebra::Vector2;

use crate::center::{centroid, coordinate_median, fermat_point};
use crate::cfg::ProfileCfg;
use crate::cluster::{canter_circle, convex_hull, polygon_area};
use crate::cpr::{cpr_radius, probable_residence};
use crate::dispersion::{
    mean_interpoint_distance, nearest_neighbor_index, std_dev_distances, NniResult,
};
use crate::types::{Center, Point};

/// Everything the presentation side draws for one point set.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub count: usize,
    pub centroid: Center,
    pub median: Center,
    pub fermat: Center,
    pub canter: Center,
    pub hull: Vec<Point>,
    pub hull_area: f64,
    pub mean_interpoint_distance: f64,
    /// Standard deviation of the distances to the centroid.
    pub std_distance: f64,
    pub nni: Option<NniResult>,
    pub cpr: Vector2<f64>,
    /// Standard deviation of the distances to `cpr`, capped at `cpr_radius_limit`.
    pub cpr_radius: f64,
}

pub fn profile(points: &[Point], cfg: &ProfileCfg) -> Profile {
    let centroid = centroid(points);
    let hull = convex_hull(points);
    let cpr = probable_residence(points, cfg);
    Profile {
        count: points.len(),
        median: coordinate_median(points),
        fermat: fermat_point(points, cfg),
        canter: canter_circle(points),
        hull_area: polygon_area(&hull),
        hull,
        mean_interpoint_distance: mean_interpoint_distance(points),
        std_distance: std_dev_distances(points, centroid.at),
        nni: nearest_neighbor_index(points),
        cpr_radius: cpr_radius(points, cpr, cfg),
        cpr,
        centroid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_is_all_sentinels() {
        let p = profile(&[], &ProfileCfg::default());
        assert_eq!(p.count, 0);
        for c in [p.centroid, p.median, p.fermat, p.canter] {
            assert_eq!(c, Center::origin());
        }
        assert!(p.hull.is_empty());
        assert_eq!(p.hull_area, 0.0);
        assert_eq!(p.mean_interpoint_distance, 0.0);
        assert!(p.nni.is_none());
        assert_eq!(p.cpr, Vector2::zeros());
        assert_eq!(p.cpr_radius, 0.0);
    }

    #[test]
    fn profile_matches_individual_estimators() {
        let cfg = ProfileCfg::default();
        let pts: Vec<Point> = [
            (0.0, 0.0),
            (3000.0, 500.0),
            (1200.0, 2500.0),
            (4000.0, 4200.0),
            (800.0, 900.0),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        let p = profile(&pts, &cfg);
        assert_eq!(p.count, 5);
        assert_eq!(p.fermat, fermat_point(&pts, &cfg));
        assert_eq!(p.canter, canter_circle(&pts));
        assert_eq!(p.hull, convex_hull(&pts));
        assert!(p.hull_area > 0.0);
        assert_eq!(p.cpr, probable_residence(&pts, &cfg));
        assert!(p.cpr_radius <= cfg.cpr_radius_limit);
        assert_eq!(p.nni.map(|n| n.count), Some(5));
        assert_eq!(profile(&pts, &cfg), p);
    }
}
