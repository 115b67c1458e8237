//! User-adjustable classification thresholds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_IMPACT_THRESHOLD: i32 = 7;
pub const DEFAULT_URGENCY_THRESHOLD: i32 = 5;

/// Highest possible impact total (4 dimensions x 3).
pub const MAX_IMPACT_TOTAL: i32 = 12;
/// Highest possible urgency total (3 dimensions x 3).
pub const MAX_URGENCY_TOTAL: i32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Impact threshold must be between 0 and 12 (got {0}).")]
    ImpactThreshold(i32),
    #[error("Urgency threshold must be between 0 and 9 (got {0}).")]
    UrgencyThreshold(i32),
}

/// Thresholds read by the classifier on every computation.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partially written settings blob still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_impact_threshold")]
    pub impact_threshold: i32,
    #[serde(default = "default_urgency_threshold")]
    pub urgency_threshold: i32,
}

fn default_impact_threshold() -> i32 {
    DEFAULT_IMPACT_THRESHOLD
}

fn default_urgency_threshold() -> i32 {
    DEFAULT_URGENCY_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            impact_threshold: DEFAULT_IMPACT_THRESHOLD,
            urgency_threshold: DEFAULT_URGENCY_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn new(impact_threshold: i32, urgency_threshold: i32) -> Result<Self, SettingsError> {
        let s = Self {
            impact_threshold,
            urgency_threshold,
        };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0..=MAX_IMPACT_TOTAL).contains(&self.impact_threshold) {
            return Err(SettingsError::ImpactThreshold(self.impact_threshold));
        }
        if !(0..=MAX_URGENCY_TOTAL).contains(&self.urgency_threshold) {
            return Err(SettingsError::UrgencyThreshold(self.urgency_threshold));
        }
        Ok(())
    }
}
