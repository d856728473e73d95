//! Maintenance respiration
//!
//! Daily glucose spent maintaining live tissue, scaled from a 25 °C
//! reference coefficient with a Q10 of 2 and discounted by the live
//! fraction of total tissue weight:
//!
//! ```text
//! km   = km' · 2^((T - 25) / 10)
//! Rm   = km · W_live · (W_live / W_total)
//! loss = Rm / glucoseReq
//! ```
//!
//! # References
//! Penning de Vries, F.W.T. et al. (1989). "Simulation of Ecophysiological
//! Processes of Growth in Several Annual Crops". Pudoc, Wageningen.

use crate::core_types::{Celsius, Grams};
use crate::diagnostics::{Diagnostics, Evaluated};
use crate::error::{finite, non_negative, positive, DomainError, ModelResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Factor by which the maintenance coefficient rises per 10 °C
pub const Q10: f64 = 2.0;

/// Maintenance respiration inputs for one tissue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RespirationParams {
    /// Maintenance coefficient at 25 °C (g glucose per g tissue per day)
    pub km_prime: f64,
    /// Water temperature
    pub temp: Celsius,
    /// Live tissue weight
    pub live_weight: Grams,
    /// Live plus dead tissue weight
    pub total_weight: Grams,
    /// Glucose required to build one gram of tissue (g/g)
    pub glucose_req: f64,
}

impl RespirationParams {
    fn validate(&self) -> ModelResult<()> {
        non_negative("kmPrime", self.km_prime)?;
        finite("temperature", self.temp.value())?;
        let live = non_negative("liveWeight", self.live_weight.value())?;
        let total = non_negative("totalWeight", self.total_weight.value())?;
        if total < live {
            return Err(DomainError::LiveExceedsTotal { live, total });
        }
        positive("glucoseReq", self.glucose_req)?;
        Ok(())
    }

    /// Temperature-adjusted maintenance coefficient
    pub fn coefficient(&self) -> f64 {
        let exponent = (self.temp - Celsius::RESPIRATION_REFERENCE).value() / 10.0;
        self.km_prime * Q10.powf(exponent)
    }

    /// Live fraction of total weight; zero when there is no tissue at all
    pub fn live_fraction(&self) -> f64 {
        let total = self.total_weight.value();
        if total == 0.0 {
            0.0
        } else {
            self.live_weight.value() / total
        }
    }
}

/// Daily biomass lost to maintenance respiration.
///
/// # Errors
/// Negative `kmPrime` or weights, `totalWeight < liveWeight`, `glucoseReq`
/// not strictly positive, or a NaN temperature.
///
/// Warns when the temperature is outside the recorded range on Earth.
pub fn daily_respiration(params: &RespirationParams) -> ModelResult<Evaluated<Grams>> {
    params.validate()?;

    let mut diagnostics = Diagnostics::new();
    diagnostics.check_temperature(params.temp);

    let rm_prime = params.coefficient() * params.live_weight.value();
    let maintenance_glucose = rm_prime * params.live_fraction();
    let loss = Grams::new(maintenance_glucose / params.glucose_req);

    debug!(
        "maintenance respiration: km={:.6} glucose={maintenance_glucose:.6}g loss={:.6}g",
        params.coefficient(),
        loss.value()
    );

    Ok(Evaluated::new(loss, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(total: f64) -> RespirationParams {
        RespirationParams {
            km_prime: 0.0225,
            temp: Celsius::new(15.0),
            live_weight: Grams::new(2.0),
            total_weight: Grams::new(total),
            glucose_req: 1.5,
        }
    }

    #[test]
    fn all_live_tissue() {
        let loss = daily_respiration(&params(2.0)).unwrap().value;
        assert_relative_eq!(loss.value(), 0.015, epsilon = 1e-12);
    }

    #[test]
    fn dead_tissue_dilutes_respiration() {
        let loss = daily_respiration(&params(3.0)).unwrap().value;
        assert_relative_eq!(loss.value(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn q10_doubles_per_ten_degrees() {
        let cool = params(2.0);
        let warm = RespirationParams {
            temp: Celsius::new(25.0),
            ..cool
        };
        assert_relative_eq!(warm.coefficient(), 2.0 * cool.coefficient(), epsilon = 1e-12);
        assert_relative_eq!(warm.coefficient(), 0.0225, epsilon = 1e-12);
    }

    #[test]
    fn no_tissue_no_respiration() {
        let empty = RespirationParams {
            live_weight: Grams::new(0.0),
            total_weight: Grams::new(0.0),
            ..params(2.0)
        };
        assert_eq!(daily_respiration(&empty).unwrap().value, Grams::new(0.0));
    }

    #[test]
    fn live_heavier_than_total_is_rejected() {
        let err = daily_respiration(&params(1.0)).unwrap_err();
        assert_eq!(
            err,
            DomainError::LiveExceedsTotal {
                live: 2.0,
                total: 1.0
            }
        );
    }

    #[test]
    fn negative_inputs_are_rejected() {
        let neg_km = RespirationParams {
            km_prime: -0.1,
            ..params(2.0)
        };
        assert!(daily_respiration(&neg_km).is_err());
        let neg_glucose = RespirationParams {
            glucose_req: -1.0,
            ..params(2.0)
        };
        assert!(daily_respiration(&neg_glucose).is_err());
        let neg_live = RespirationParams {
            live_weight: Grams::new(-1.0),
            ..params(2.0)
        };
        assert!(daily_respiration(&neg_live).is_err());
    }

    #[test]
    fn hot_water_warns() {
        let hot = RespirationParams {
            temp: Celsius::new(70.0),
            ..params(2.0)
        };
        let out = daily_respiration(&hot).unwrap();
        assert_eq!(out.diagnostics.len(), 1);
    }
}
