//! Day-to-day biomass update
//!
//! Net carbon gain is one of several daily size changes. Loss processes
//! (scour, herbivory, desiccation, breakage, mortality) and empirical
//! size-gain curves are independent models: each implements [`SizeChange`]
//! and the caller sums them with the carbon budget. No state is kept between
//! days; the caller owns the biomass trajectory.

use crate::core_types::Grams;
use crate::error::{finite, non_negative, positive, ModelResult};
use serde::{Deserialize, Serialize};

/// A daily change in plant biomass computed from current biomass
pub trait SizeChange {
    /// Short label for reports
    fn name(&self) -> &str;

    /// Signed change over one day (g); negative for losses
    ///
    /// # Errors
    /// Implementations reject parameters outside their domain.
    fn biomass_delta(&self, biomass: Grams) -> ModelResult<Grams>;
}

/// Closed-form size-gain curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "model")]
pub enum GrowthModel {
    /// `r·B`
    Exponential { rate: f64 },
    /// `r·B·(1 - B/K)`
    Logistic { rate: f64, capacity: f64 },
}

impl SizeChange for GrowthModel {
    fn name(&self) -> &str {
        match self {
            GrowthModel::Exponential { .. } => "exponential growth",
            GrowthModel::Logistic { .. } => "logistic growth",
        }
    }

    fn biomass_delta(&self, biomass: Grams) -> ModelResult<Grams> {
        let b = non_negative("biomass", biomass.value())?;
        let delta = match *self {
            GrowthModel::Exponential { rate } => finite("rate", rate)? * b,
            GrowthModel::Logistic { rate, capacity } => {
                let k = positive("capacity", capacity)?;
                finite("rate", rate)? * b * (1.0 - b / k)
            }
        };
        Ok(Grams::new(delta))
    }
}

/// Biomass at the start of the next day.
///
/// Adds the net carbon budget and every collaborator's change to
/// `biomass`; the result is floored at zero since a plant cannot lose more
/// than it has.
///
/// # Errors
/// Negative starting biomass, a NaN net budget, or the first failing
/// collaborator.
pub fn apply_daily_update(
    biomass: Grams,
    net_budget: Grams,
    collaborators: &[&dyn SizeChange],
) -> ModelResult<Grams> {
    non_negative("biomass", biomass.value())?;
    let mut next = biomass + Grams::new(finite("net budget", net_budget.value())?);
    for model in collaborators {
        next = next + model.biomass_delta(biomass)?;
    }
    Ok(next.max(Grams::new(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use approx::assert_relative_eq;

    /// Fixed fraction lost per day, standing in for a scour model
    struct ConstantLoss(f64);

    impl SizeChange for ConstantLoss {
        fn name(&self) -> &str {
            "constant loss"
        }

        fn biomass_delta(&self, biomass: Grams) -> ModelResult<Grams> {
            Ok(biomass * -self.0)
        }
    }

    #[test]
    fn exponential_delta() {
        let d = GrowthModel::Exponential { rate: 0.05 }
            .biomass_delta(Grams::new(4.0))
            .unwrap();
        assert_relative_eq!(d.value(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn logistic_stalls_at_capacity() {
        let m = GrowthModel::Logistic {
            rate: 0.1,
            capacity: 10.0,
        };
        assert_eq!(m.biomass_delta(Grams::new(10.0)).unwrap(), Grams::new(0.0));
        assert!(m.biomass_delta(Grams::new(12.0)).unwrap().value() < 0.0);
        assert_relative_eq!(
            m.biomass_delta(Grams::new(5.0)).unwrap().value(),
            0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn logistic_needs_positive_capacity() {
        let m = GrowthModel::Logistic {
            rate: 0.1,
            capacity: 0.0,
        };
        assert!(matches!(
            m.biomass_delta(Grams::new(1.0)),
            Err(DomainError::NotPositive { .. })
        ));
    }

    #[test]
    fn update_sums_budget_and_collaborators() {
        let loss = ConstantLoss(0.1);
        let next = apply_daily_update(Grams::new(10.0), Grams::new(0.5), &[&loss]).unwrap();
        assert_relative_eq!(next.value(), 10.0 + 0.5 - 1.0, epsilon = 1e-12);
        assert_eq!(loss.name(), "constant loss");
    }

    #[test]
    fn update_never_goes_negative() {
        let wipeout = ConstantLoss(2.0);
        let next = apply_daily_update(Grams::new(1.0), Grams::new(-0.1), &[&wipeout]).unwrap();
        assert_eq!(next, Grams::new(0.0));
    }

    #[test]
    fn growth_model_deserializes() {
        let m: GrowthModel =
            serde_json::from_str(r#"{"model":"logistic","rate":0.2,"capacity":50.0}"#).unwrap();
        assert_eq!(
            m,
            GrowthModel::Logistic {
                rate: 0.2,
                capacity: 50.0
            }
        );
    }
}
