//! Parallel evaluation of independent (day, location, tissue) tuples
//!
//! Every evaluation is a pure function of its inputs, so tuples are spread
//! across the rayon pool with no coordination. Results come back in input
//! order and are bit-identical to evaluating the tuples one at a time; a
//! tuple that fails validation does not affect the others.

use crate::diagnostics::Evaluated;
use crate::error::ModelResult;
use crate::growth::{evaluate_organ, evaluate_plant, OrganBudget, OrganParams, PlantBudget, SiteLight};
use crate::light::{PolarPolicy, SolarDay};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One organ at one (day, location)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchJob {
    pub day: SolarDay,
    #[serde(default)]
    pub polar_policy: PolarPolicy,
    pub organ: OrganParams,
}

/// Budget every job in parallel.
pub fn evaluate_many(jobs: &[BatchJob]) -> Vec<ModelResult<Evaluated<OrganBudget>>> {
    info!("Evaluating {} organ-days", jobs.len());
    jobs.par_iter()
        .map(|job| -> ModelResult<Evaluated<OrganBudget>> {
            let site = SiteLight::compute(job.day, job.polar_policy)?;
            let mut budget = evaluate_organ(&site.value, &job.organ)?;
            let mut diagnostics = site.diagnostics;
            diagnostics.absorb(budget.diagnostics);
            budget.diagnostics = diagnostics;
            Ok(budget)
        })
        .collect()
}

/// A whole plant's budget on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub site: SiteLight,
    pub plant: PlantBudget,
}

/// Budget the same plant on each of `days` in parallel.
pub fn evaluate_days(
    days: &[SolarDay],
    policy: PolarPolicy,
    organs: &[OrganParams],
) -> Vec<ModelResult<Evaluated<DayReport>>> {
    info!(
        "Evaluating {} days x {} organs",
        days.len(),
        organs.len()
    );
    days.par_iter()
        .map(|&day| -> ModelResult<Evaluated<DayReport>> {
            let site = SiteLight::compute(day, policy)?;
            let plant = evaluate_plant(&site.value, organs)?;
            let mut diagnostics = site.diagnostics;
            diagnostics.absorb(plant.diagnostics);
            Ok(Evaluated::new(
                DayReport {
                    site: site.value,
                    plant: plant.value,
                },
                diagnostics,
            ))
        })
        .collect()
}
