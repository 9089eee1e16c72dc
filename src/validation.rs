//! Boundary checks for operator input. The engine itself never rejects an
//! observation, so everything malformed has to be caught here.

use crate::risk::{Observation, RainfallLevel, RiverLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted by the rainfall field (mm)
pub const MAX_RAINFALL_MM: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("location is required")]
    MissingLocation,

    #[error("rainfall amount is required")]
    MissingRainfall,

    #[error("rainfall {0} mm is outside 0-500 mm")]
    RainfallOutOfRange(f64),

    #[error("unknown rainfall level `{0}`")]
    UnknownRainfallLevel(String),

    #[error("unknown river level `{0}`")]
    UnknownRiverLevel(String),
}

/// Raw form record as submitted by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationInput {
    pub location: String,
    pub rainfall: Option<f64>,
    pub rainfall_level: String,
    pub river_level: String,
}

/// Intensity and river level start preselected, as on the form
impl Default for ObservationInput {
    fn default() -> Self {
        Self {
            location: String::new(),
            rainfall: None,
            rainfall_level: RainfallLevel::Light.as_str().to_string(),
            river_level: RiverLevel::Normal.as_str().to_string(),
        }
    }
}

impl ObservationInput {
    pub fn validate(&self) -> Result<Observation, ValidationError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }

        let rainfall = self.rainfall.ok_or(ValidationError::MissingRainfall)?;
        if !rainfall.is_finite() || !(0.0..=MAX_RAINFALL_MM).contains(&rainfall) {
            return Err(ValidationError::RainfallOutOfRange(rainfall));
        }

        let rainfall_level = self
            .rainfall_level
            .parse::<RainfallLevel>()
            .map_err(|e| ValidationError::UnknownRainfallLevel(e.value))?;
        let river_level = self
            .river_level
            .parse::<RiverLevel>()
            .map_err(|e| ValidationError::UnknownRiverLevel(e.value))?;

        Ok(Observation {
            location: location.to_string(),
            rainfall,
            rainfall_level,
            river_level,
        })
    }
}
