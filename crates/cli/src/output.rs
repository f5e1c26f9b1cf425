//! JSON rendering of a `Profile` for the presentation side.
//!
//! Units stay planar meters; no formatting or rounding happens here.

use geoprofile::prelude::*;
use serde_json::{json, Value};

fn center_json(c: &Center) -> Value {
    json!({ "x": c.x(), "y": c.y(), "radius": c.radius })
}

fn nni_json(n: &NniResult) -> Value {
    json!({
        "index": n.index,
        "mean_observed_distance": n.mean_observed_distance,
        "mean_expected_distance": n.mean_expected_distance,
        "density": n.density,
        "area": n.area,
        "count": n.count,
        "classification": n.classification.label(),
    })
}

pub fn profile_json(p: &Profile) -> Value {
    let hull: Vec<Value> = p.hull.iter().map(|q| json!([q.x, q.y])).collect();
    json!({
        "count": p.count,
        "centroid": center_json(&p.centroid),
        "median": center_json(&p.median),
        "fermat": center_json(&p.fermat),
        "canter": center_json(&p.canter),
        "hull": hull,
        "hull_area": p.hull_area,
        "mean_interpoint_distance": p.mean_interpoint_distance,
        "std_distance": p.std_distance,
        "nni": p.nni.as_ref().map(nni_json),
        "cpr": { "x": p.cpr.x, "y": p.cpr.y, "radius": p.cpr_radius },
    })
}
