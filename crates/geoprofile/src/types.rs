//! Input points and center estimates.
//!
//! - `Point`: planar event location with optional year and base weight.
//! - `EventKind`: event category; selects the default CPR base weight.
//! - `Center`: a representative location plus a characteristic radius.
//!
//! Code cross-refs: `cfg::ProfileCfg` (category weights), `cpr::probable_residence`

use nalgebra::Vector2;

use crate::cfg::ProfileCfg;

/// Event category used by the probable-residence weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A primary event (the default).
    #[default]
    Offence,
    /// A secondary event tied to a primary one (e.g. a discarded item).
    Collateral,
    /// A known point of interest rather than an event.
    PointOfInterest,
}

impl EventKind {
    /// Stable lowercase label, also accepted by `parse`.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Offence => "offence",
            EventKind::Collateral => "collateral",
            EventKind::PointOfInterest => "poi",
        }
    }

    /// Case-insensitive parse of `label` output (plus a few aliases).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offence" | "offense" | "event" | "" => Some(EventKind::Offence),
            "collateral" => Some(EventKind::Collateral),
            "poi" | "point_of_interest" => Some(EventKind::PointOfInterest),
            _ => None,
        }
    }
}

/// Planar event location (meters) with optional attributes.
///
/// Defaults
/// - `year == None`: treated as the most recent year in the set.
/// - `weight == None`: the base weight of `kind` from the configuration
///   (1.0 for `Offence` under the default configuration).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub year: Option<i32>,
    pub weight: Option<f64>,
    pub kind: EventKind,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            year: None,
            weight: None,
            kind: EventKind::Offence,
        }
    }
    #[inline]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    #[inline]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
    #[inline]
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Explicit weight if present, else the configured weight for `kind`.
    pub fn base_weight(&self, cfg: &ProfileCfg) -> f64 {
        self.weight.unwrap_or(match self.kind {
            EventKind::Offence => cfg.base_weight,
            EventKind::Collateral => cfg.collateral_weight,
            EventKind::PointOfInterest => cfg.poi_weight,
        })
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Location estimate with a characteristic radius (`radius >= 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Center {
    pub at: Vector2<f64>,
    pub radius: f64,
}

impl Center {
    /// The `{0, 0, 0}` sentinel returned for empty inputs.
    #[inline]
    pub fn origin() -> Self {
        Self {
            at: Vector2::zeros(),
            radius: 0.0,
        }
    }

    /// Center at `at` whose radius is the largest distance to any of `points`.
    pub fn enclosing(at: Vector2<f64>, points: &[Point]) -> Self {
        Self {
            at,
            radius: crate::primitives::max_distance(at, points),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.at.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.at.y
    }
}
