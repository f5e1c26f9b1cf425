//! Estimator configuration from an optional JSON override file.
//!
//! Every field is optional and falls back to `ProfileCfg::default()`. Unknown
//! keys are rejected so typos do not silently run with defaults.

use std::path::Path;

use anyhow::{Context, Result};
use geoprofile::ProfileCfg;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CfgOverrides {
    pub sqrt_epsilon: Option<f64>,
    pub collinearity_threshold: Option<f64>,
    pub max_iterations: Option<usize>,
    pub position_tolerance: Option<f64>,
    pub journey_radius: Option<f64>,
    pub time_decay_rate: Option<f64>,
    pub pb_component_weight: Option<f64>,
    pub jw_component_weight: Option<f64>,
    pub dt_component_weight: Option<f64>,
    pub cpr_radius_limit: Option<f64>,
    pub base_weight: Option<f64>,
    pub collateral_weight: Option<f64>,
    pub poi_weight: Option<f64>,
}

impl CfgOverrides {
    pub fn apply(&self, base: ProfileCfg) -> ProfileCfg {
        ProfileCfg {
            sqrt_epsilon: self.sqrt_epsilon.unwrap_or(base.sqrt_epsilon),
            collinearity_threshold: self
                .collinearity_threshold
                .unwrap_or(base.collinearity_threshold),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            position_tolerance: self.position_tolerance.unwrap_or(base.position_tolerance),
            journey_radius: self.journey_radius.unwrap_or(base.journey_radius),
            time_decay_rate: self.time_decay_rate.unwrap_or(base.time_decay_rate),
            pb_component_weight: self.pb_component_weight.unwrap_or(base.pb_component_weight),
            jw_component_weight: self.jw_component_weight.unwrap_or(base.jw_component_weight),
            dt_component_weight: self.dt_component_weight.unwrap_or(base.dt_component_weight),
            cpr_radius_limit: self.cpr_radius_limit.unwrap_or(base.cpr_radius_limit),
            base_weight: self.base_weight.unwrap_or(base.base_weight),
            collateral_weight: self.collateral_weight.unwrap_or(base.collateral_weight),
            poi_weight: self.poi_weight.unwrap_or(base.poi_weight),
        }
    }
}

/// Defaults, overlaid with `path` if given, then validated.
pub fn load_cfg(path: Option<&Path>) -> Result<ProfileCfg> {
    let overrides = match path {
        Some(p) => {
            let raw = std::fs::read(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_slice::<CfgOverrides>(&raw)
                .with_context(|| format!("parsing {}", p.display()))?
        }
        None => CfgOverrides::default(),
    };
    let cfg = overrides.apply(ProfileCfg::default());
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

/// Effective configuration as JSON (same keys as the override file).
pub fn cfg_json(cfg: &ProfileCfg) -> Value {
    json!({
        "sqrt_epsilon": cfg.sqrt_epsilon,
        "collinearity_threshold": cfg.collinearity_threshold,
        "max_iterations": cfg.max_iterations,
        "position_tolerance": cfg.position_tolerance,
        "journey_radius": cfg.journey_radius,
        "time_decay_rate": cfg.time_decay_rate,
        "pb_component_weight": cfg.pb_component_weight,
        "jw_component_weight": cfg.jw_component_weight,
        "dt_component_weight": cfg.dt_component_weight,
        "cpr_radius_limit": cfg.cpr_radius_limit,
        "base_weight": cfg.base_weight,
        "collateral_weight": cfg.collateral_weight,
        "poi_weight": cfg.poi_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn no_file_gives_defaults() {
        assert_eq!(load_cfg(None).unwrap(), ProfileCfg::default());
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"journey_radius": 1200.0, "max_iterations": 10}"#).unwrap();
        let cfg = load_cfg(Some(&path)).unwrap();
        assert_eq!(cfg.journey_radius, 1200.0);
        assert_eq!(cfg.max_iterations, 10);
        assert_eq!(cfg.time_decay_rate, ProfileCfg::default().time_decay_rate);
    }

    #[test]
    fn rejects_unknown_keys_and_invalid_values() {
        let dir = tempdir().unwrap();
        let typo = dir.path().join("typo.json");
        fs::write(&typo, r#"{"journey_raduis": 1.0}"#).unwrap();
        assert!(load_cfg(Some(&typo)).is_err());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"journey_radius": -5.0}"#).unwrap();
        let err = load_cfg(Some(&bad)).unwrap_err();
        assert!(format!("{err:#}").contains("journey_radius"));
    }

    #[test]
    fn cfg_json_round_trips_through_overrides() {
        let cfg = ProfileCfg {
            poi_weight: 0.9,
            ..ProfileCfg::default()
        };
        let parsed: CfgOverrides = serde_json::from_value(cfg_json(&cfg)).unwrap();
        assert_eq!(parsed.apply(ProfileCfg::default()), cfg);
    }
}
