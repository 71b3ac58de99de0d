use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Discrete viewport size classes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewportTier {
    Mobile,
    Small,
    Medium,
    Large,
}

impl ViewportTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportTier::Mobile => "mobile",
            ViewportTier::Small => "small",
            ViewportTier::Medium => "medium",
            ViewportTier::Large => "large",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportTier::Mobile)
    }
}

impl fmt::Display for ViewportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width bounds of the tier media queries, in CSS pixels.
///
/// Every bound is inclusive, matching `min-width` / `max-width` semantics.
/// The small and medium ranges overlap; [`Breakpoints::classify`] resolves
/// the overlap by checking small first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile_max: f32,
    pub small_min: f32,
    pub small_max: f32,
    pub medium_min: f32,
    pub medium_max: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 559.9,
            small_min: 560.0,
            small_max: 989.9,
            medium_min: 560.0,
            medium_max: 1200.0,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    ///
    /// Predicates are tried in order mobile, small, medium; the first match
    /// wins and large is the fallback. Widths that fall into a gap between
    /// predicates (e.g. `559.95` with the defaults) therefore land on large.
    pub fn classify(&self, width: f32) -> ViewportTier {
        if width <= self.mobile_max {
            ViewportTier::Mobile
        } else if width >= self.small_min && width <= self.small_max {
            ViewportTier::Small
        } else if width >= self.medium_min && width <= self.medium_max {
            ViewportTier::Medium
        } else {
            ViewportTier::Large
        }
    }

    /// Reject bounds that are not finite or not ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            ("mobile_max", self.mobile_max),
            ("small_min", self.small_min),
            ("small_max", self.small_max),
            ("medium_min", self.medium_min),
            ("medium_max", self.medium_max),
        ];
        for (name, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBreakpoints(format!(
                    "{name} must be a finite non-negative width, got {value}"
                )));
            }
        }

        if self.small_min > self.small_max {
            return Err(ConfigError::InvalidBreakpoints(format!(
                "small range is empty ({} > {})",
                self.small_min, self.small_max
            )));
        }
        if self.medium_min > self.medium_max {
            return Err(ConfigError::InvalidBreakpoints(format!(
                "medium range is empty ({} > {})",
                self.medium_min, self.medium_max
            )));
        }
        if self.mobile_max >= self.small_min
            || self.mobile_max >= self.medium_min
        {
            return Err(ConfigError::InvalidBreakpoints(String::from(
                "mobile range must end below the small and medium ranges",
            )));
        }

        Ok(())
    }
}

/// Classify a width against the default breakpoints.
pub fn classify(width: f32) -> ViewportTier {
    Breakpoints::default().classify(width)
}
