//! Estimator configuration (tolerances, iteration caps, CPR weighting).
//!
//! Policy
//! - One explicit value object, passed by reference into each estimator.
//!   Nothing in the engine reads process-wide state.
//! - Estimators never validate; `validate` is for callers at the boundary.
//! - Component weights are used as given (no normalization).

use std::fmt;

/// Tunables for the Weiszfeld-family iterations and CPR weighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileCfg {
    /// Regularizer added to distances before taking reciprocals.
    pub sqrt_epsilon: f64,
    /// Twice-triangle-area below which a point set counts as collinear.
    pub collinearity_threshold: f64,
    /// Iteration cap for every Weiszfeld-style loop.
    pub max_iterations: usize,
    /// Stop once the squared step length falls below this.
    pub position_tolerance: f64,
    /// Spatial decay scale of the journey weight (meters).
    pub journey_radius: f64,
    /// Exponential decay per year of event age.
    pub time_decay_rate: f64,
    pub pb_component_weight: f64,
    pub jw_component_weight: f64,
    pub dt_component_weight: f64,
    /// Cap for the displayed CPR radius (meters).
    pub cpr_radius_limit: f64,
    /// Base weight of an `Offence` without an explicit weight.
    pub base_weight: f64,
    /// Base weight of a `Collateral` event without an explicit weight.
    pub collateral_weight: f64,
    /// Base weight of a `PointOfInterest` without an explicit weight.
    pub poi_weight: f64,
}

impl Default for ProfileCfg {
    fn default() -> Self {
        Self {
            sqrt_epsilon: 1e-6,
            collinearity_threshold: 1e6,
            max_iterations: 64,
            position_tolerance: 1e-8,
            journey_radius: 5000.0,
            time_decay_rate: 0.25,
            pb_component_weight: 0.333,
            jw_component_weight: 0.333,
            dt_component_weight: 0.333,
            cpr_radius_limit: 50_000.0,
            base_weight: 1.0,
            collateral_weight: 0.3,
            poi_weight: 0.3,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// NaN or infinite value.
    NonFinite { field: &'static str },
    /// Value must be strictly positive.
    NonPositive { field: &'static str, value: f64 },
    /// Value must be zero or positive.
    Negative { field: &'static str, value: f64 },
    /// `max_iterations` must allow at least one step.
    ZeroIterations,
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::NonFinite { field } => write!(f, "{field} must be a finite number"),
            CfgError::NonPositive { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            CfgError::Negative { field, value } => {
                write!(f, "{field} must be >= 0 (got {value})")
            }
            CfgError::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl std::error::Error for CfgError {}

impl ProfileCfg {
    /// Check ranges; the first offending field is reported.
    pub fn validate(&self) -> Result<(), CfgError> {
        let all = [
            ("sqrt_epsilon", self.sqrt_epsilon),
            ("collinearity_threshold", self.collinearity_threshold),
            ("position_tolerance", self.position_tolerance),
            ("journey_radius", self.journey_radius),
            ("time_decay_rate", self.time_decay_rate),
            ("pb_component_weight", self.pb_component_weight),
            ("jw_component_weight", self.jw_component_weight),
            ("dt_component_weight", self.dt_component_weight),
            ("cpr_radius_limit", self.cpr_radius_limit),
            ("base_weight", self.base_weight),
            ("collateral_weight", self.collateral_weight),
            ("poi_weight", self.poi_weight),
        ];
        if let Some(&(field, _)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CfgError::NonFinite { field });
        }
        let positive = [
            ("sqrt_epsilon", self.sqrt_epsilon),
            ("position_tolerance", self.position_tolerance),
            ("journey_radius", self.journey_radius),
            ("cpr_radius_limit", self.cpr_radius_limit),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(CfgError::NonPositive { field, value });
        }
        if let Some(&(field, value)) = all.iter().find(|(_, v)| *v < 0.0) {
            return Err(CfgError::Negative { field, value });
        }
        if self.max_iterations == 0 {
            return Err(CfgError::ZeroIterations);
        }
        Ok(())
    }
}
