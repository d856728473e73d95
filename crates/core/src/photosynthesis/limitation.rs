//! Limiting-factor response curves
//!
//! Each environmental stressor scales the maximum assimilation rate by a
//! factor in [0, 1] (temperature may exceed 1, see
//! [`TemperatureResponse::Hill`]). A factor is either switched off
//! ([`Limitation::Unlimited`], contributing exactly 1) or follows a Monod
//! curve `x / (x + H)` with half-saturation constant `H`.

use crate::core_types::Celsius;
use crate::error::{finite, non_negative, ModelResult};
use serde::{Deserialize, Serialize};

/// Monod saturation `x / (x + h)`.
///
/// Returns 0 when both are zero.
#[inline]
pub fn monod(x: f64, h: f64) -> f64 {
    let denom = x + h;
    if denom == 0.0 {
        0.0
    } else {
        x / denom
    }
}

/// Whether a resource limits assimilation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Limitation {
    /// Factor is 1
    #[default]
    Unlimited,
    /// Monod response with the given half-saturation constant
    Limited { half_saturation: f64 },
}

impl Limitation {
    /// `Limited` when a constant is given, `Unlimited` otherwise
    pub fn from_half_saturation(h: Option<f64>) -> Self {
        h.map_or(Limitation::Unlimited, |half_saturation| Limitation::Limited {
            half_saturation,
        })
    }

    /// Half-saturation constant, if limited
    pub fn half_saturation(&self) -> Option<f64> {
        match *self {
            Limitation::Unlimited => None,
            Limitation::Limited { half_saturation } => Some(half_saturation),
        }
    }

    /// Multiplicative factor for resource level `x`
    #[inline]
    pub fn factor(&self, x: f64) -> f64 {
        match *self {
            Limitation::Unlimited => 1.0,
            Limitation::Limited { half_saturation } => monod(x, half_saturation),
        }
    }

    pub(crate) fn validate(&self, name: &'static str) -> ModelResult<()> {
        if let Limitation::Limited { half_saturation } = *self {
            non_negative(name, half_saturation)?;
        }
        Ok(())
    }
}

/// A covariate (depth, carbonate, nutrient) paired with its response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    /// Resource level (m for depth, mg/L for carbonate and nutrient)
    pub amount: f64,
    /// Response curve applied to `amount`
    pub limitation: Limitation,
}

impl ResourceLimit {
    /// Monod-limited resource at `amount` with half-saturation `half_saturation`
    pub fn monod(amount: f64, half_saturation: f64) -> Self {
        Self {
            amount,
            limitation: Limitation::Limited { half_saturation },
        }
    }

    /// Multiplicative factor at the current resource level
    #[inline]
    pub fn factor(&self) -> f64 {
        self.limitation.factor(self.amount)
    }

    pub(crate) fn validate(&self, amount_name: &'static str, h_name: &'static str) -> ModelResult<()> {
        non_negative(amount_name, self.amount)?;
        self.limitation.validate(h_name)
    }
}

/// Factor for an optional covariate; absent means non-limiting
#[inline]
pub fn optional_factor(limit: Option<&ResourceLimit>) -> f64 {
    limit.map_or(1.0, ResourceLimit::factor)
}

/// Hill exponent for the temperature response
pub const TEMPERATURE_HILL_ORDER: i32 = 3;

/// Temperature at which the Hill curve reaches half its asymptote (°C)
pub const TEMPERATURE_HALF_SATURATION: f64 = 14.0;

/// Asymptotic temperature multiplier
pub const TEMPERATURE_ASYMPTOTE: f64 = 1.35;

/// Temperature dependence of assimilation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TemperatureResponse {
    /// Factor is 1
    #[default]
    Unlimited,
    /// `1.35·T³ / (T³ + 14³)` at water temperature `temp`
    Hill { temp: Celsius },
}

impl TemperatureResponse {
    pub fn hill(temp: Celsius) -> Self {
        TemperatureResponse::Hill { temp }
    }

    /// Water temperature, if temperature-limited
    pub fn temperature(&self) -> Option<Celsius> {
        match *self {
            TemperatureResponse::Unlimited => None,
            TemperatureResponse::Hill { temp } => Some(temp),
        }
    }

    pub fn factor(&self) -> f64 {
        match *self {
            TemperatureResponse::Unlimited => 1.0,
            TemperatureResponse::Hill { temp } => {
                // The cubic changes sign below 0 °C; no assimilation there.
                let t3 = temp.value().max(0.0).powi(TEMPERATURE_HILL_ORDER);
                let h3 = TEMPERATURE_HALF_SATURATION.powi(TEMPERATURE_HILL_ORDER);
                TEMPERATURE_ASYMPTOTE * t3 / (t3 + h3)
            }
        }
    }

    pub(crate) fn validate(&self) -> ModelResult<()> {
        if let TemperatureResponse::Hill { temp } = *self {
            finite("temperature", temp.value())?;
        }
        Ok(())
    }
}
