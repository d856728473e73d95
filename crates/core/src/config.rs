//! Scenario files
//!
//! A scenario describes one site (latitude and a range of Julian days) and
//! the organs to budget there. Scenarios are JSON:
//!
//! ```json
//! {
//!   "site": { "latitude": 35.2, "day_start": 120, "day_end": 150 },
//!   "organs": [
//!     {
//!       "name": "leaf",
//!       "depth": 0.3,
//!       "attenuation": { "prop_reflect": 0.1, "k": 1.2 },
//!       "photo": {
//!         "pmax": 0.005, "pbiomass": 2.0, "glucose_req": 1.5,
//!         "light": { "kind": "limited", "half_saturation": 300.0 },
//!         "temperature": { "kind": "hill", "temp": 18.0 }
//!       },
//!       "respiration": {
//!         "km_prime": 0.0225, "temp": 18.0,
//!         "live_weight": 2.0, "total_weight": 2.4, "glucose_req": 1.5
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted limiting factors are non-limiting.

use crate::core_types::Degrees;
use crate::error::{within, DomainError};
use crate::growth::{evaluate_plant, OrganParams, SiteLight};
use crate::light::{PolarPolicy, SolarDay};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to load or validate a scenario
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario has no organs")]
    NoOrgans,

    #[error("day_start ({start}) is after day_end ({end})")]
    EmptyDayRange { start: u32, end: u32 },

    #[error("invalid scenario value: {0}")]
    Invalid(#[from] DomainError),
}

/// Where and when to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub latitude: Degrees,
    pub day_start: u32,
    pub day_end: u32,
    #[serde(default)]
    pub polar_policy: PolarPolicy,
}

impl SiteConfig {
    /// Every day in `day_start..=day_end`
    pub fn days(&self) -> Vec<SolarDay> {
        (self.day_start..=self.day_end)
            .map(|d| SolarDay::new(f64::from(d), self.latitude))
            .collect()
    }
}

/// A site plus the organs to budget there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub site: SiteConfig,
    pub organs: Vec<OrganParams>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from JSON text.
    ///
    /// # Errors
    /// Malformed JSON or any invalid value (see [`ScenarioConfig::validate`]).
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a scenario file.
    ///
    /// # Errors
    /// I/O failure, malformed JSON or any invalid value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the scenario with the same rules the operations apply.
    ///
    /// Runs the first day through the full pipeline, so any organ parameter
    /// that would fail later fails here instead.
    ///
    /// # Errors
    /// [`ConfigError::NoOrgans`], [`ConfigError::EmptyDayRange`] or the
    /// first [`DomainError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.organs.is_empty() {
            return Err(ConfigError::NoOrgans);
        }
        if self.site.day_start > self.site.day_end {
            return Err(ConfigError::EmptyDayRange {
                start: self.site.day_start,
                end: self.site.day_end,
            });
        }
        within("latitude", self.site.latitude.value(), -90.0, 90.0)?;
        let first = SolarDay::new(f64::from(self.site.day_start), self.site.latitude);
        let site = SiteLight::compute(first, self.site.polar_policy)?;
        evaluate_plant(&site.value, &self.organs)?;
        Ok(())
    }

    /// Serialize back to pretty JSON
    ///
    /// # Errors
    /// Only if a value cannot be represented in JSON (non-finite floats).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
