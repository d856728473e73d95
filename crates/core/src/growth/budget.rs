//! Daily carbon budget for organs and whole plants
//!
//! Composes the light pipeline with assimilation and respiration:
//!
//! ```text
//! SolarGeometry → SurfaceLight → LightAttenuation → GrossAssimilation ┐
//!                                                MaintenanceRespiration ┴→ net
//! ```
//!
//! Sun position and surface light depend only on day and location, so they
//! are computed once per [`SiteLight`] and shared by every organ evaluated
//! there.

use crate::core_types::{Grams, Meters, ParProfile};
use crate::diagnostics::{Diagnostics, Evaluated};
use crate::error::ModelResult;
use crate::light::{
    attenuate_profile, solar_geometry, surface_par_from_geometry, AttenuationParams, PolarPolicy,
    SolarDay, SolarGeometry,
};
use crate::photosynthesis::{daily_respiration, gross_assimilation, PhotoParams, RespirationParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sun position and surface light for one (day, location)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteLight {
    pub day: SolarDay,
    pub geometry: SolarGeometry,
    pub surface: ParProfile,
}

impl SiteLight {
    /// # Errors
    /// See [`solar_geometry`].
    pub fn compute(day: SolarDay, policy: PolarPolicy) -> ModelResult<Evaluated<SiteLight>> {
        let geometry = solar_geometry(day, policy)?;
        Ok(geometry.map(|g| SiteLight {
            day,
            geometry: g,
            surface: surface_par_from_geometry(day.julian_day, &g),
        }))
    }
}

/// Everything needed to budget one tissue at one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganParams {
    /// Label used in reports (e.g. "leaf", "stem")
    pub name: String,
    /// Depth of the tissue below the water surface
    pub depth: Meters,
    #[serde(default)]
    pub attenuation: AttenuationParams,
    pub photo: PhotoParams,
    pub respiration: RespirationParams,
}

/// One organ's budget for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganBudget {
    pub name: String,
    /// PAR reaching the tissue at the three sample times
    pub par_at_tissue: ParProfile,
    pub gross: Grams,
    pub respiration: Grams,
    /// `gross - respiration`; negative when maintenance outweighs gain
    pub net: Grams,
}

/// Sum of organ budgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlantBudget {
    pub organs: Vec<OrganBudget>,
    pub gross: Grams,
    pub respiration: Grams,
    pub net: Grams,
}

/// Budget one organ at a site.
///
/// # Errors
/// Any [`crate::error::DomainError`] from attenuation, assimilation or
/// respiration.
pub fn evaluate_organ(site: &SiteLight, organ: &OrganParams) -> ModelResult<Evaluated<OrganBudget>> {
    let par_at_tissue = attenuate_profile(&site.surface, organ.depth, &organ.attenuation)?;

    let mut diagnostics = Diagnostics::new();
    let gross = gross_assimilation(&par_at_tissue, site.geometry.daylength, &organ.photo)?;
    diagnostics.absorb(gross.diagnostics);
    let respiration = daily_respiration(&organ.respiration)?;
    diagnostics.absorb(respiration.diagnostics);

    let gross = gross.value.biomass;
    let respiration = respiration.value;
    let net = gross - respiration;
    debug!(
        "organ '{}': gross={:.6}g respiration={:.6}g net={:.6}g",
        organ.name,
        gross.value(),
        respiration.value(),
        net.value()
    );

    Ok(Evaluated::new(
        OrganBudget {
            name: organ.name.clone(),
            par_at_tissue,
            gross,
            respiration,
            net,
        },
        diagnostics,
    ))
}

/// Budget every organ of a plant at a site and sum them.
///
/// # Errors
/// The first organ that fails validation aborts the whole plant.
pub fn evaluate_plant(
    site: &SiteLight,
    organs: &[OrganParams],
) -> ModelResult<Evaluated<PlantBudget>> {
    let mut diagnostics = Diagnostics::new();
    let mut plant = PlantBudget::default();
    for organ in organs {
        let budget = evaluate_organ(site, organ)?;
        diagnostics.absorb(budget.diagnostics);
        plant.gross = plant.gross + budget.value.gross;
        plant.respiration = plant.respiration + budget.value.respiration;
        plant.net = plant.net + budget.value.net;
        plant.organs.push(budget.value);
    }
    Ok(Evaluated::new(plant, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Celsius, Degrees};
    use crate::photosynthesis::{Limitation, TemperatureResponse};
    use approx::assert_relative_eq;

    fn leaf(depth: f64) -> OrganParams {
        OrganParams {
            name: "leaf".to_string(),
            depth: Meters::new(depth),
            attenuation: AttenuationParams::water(1.0),
            photo: PhotoParams {
                light: Limitation::Limited {
                    half_saturation: 300.0,
                },
                temperature: TemperatureResponse::hill(Celsius::new(20.0)),
                ..PhotoParams::unlimited(0.005, Grams::new(2.0), 1.5)
            },
            respiration: RespirationParams {
                km_prime: 0.0225,
                temp: Celsius::new(20.0),
                live_weight: Grams::new(2.0),
                total_weight: Grams::new(2.0),
                glucose_req: 1.5,
            },
        }
    }

    fn site() -> SiteLight {
        SiteLight::compute(SolarDay::new(120.0, Degrees::new(25.0)), PolarPolicy::Clamp)
            .unwrap()
            .value
    }

    #[test]
    fn site_light_matches_reference() {
        let s = site();
        assert_relative_eq!(s.surface.near_noon(), 2879.42, epsilon = 0.01);
    }

    #[test]
    fn net_is_gross_minus_respiration() {
        let b = evaluate_organ(&site(), &leaf(0.3)).unwrap().value;
        assert_relative_eq!(
            b.net.value(),
            b.gross.value() - b.respiration.value(),
            epsilon = 1e-15
        );
        assert!(b.gross.value() > 0.0);
    }

    #[test]
    fn deeper_tissue_gains_less() {
        let shallow = evaluate_organ(&site(), &leaf(0.1)).unwrap().value;
        let deep = evaluate_organ(&site(), &leaf(2.0)).unwrap().value;
        assert!(deep.gross < shallow.gross);
        assert_eq!(deep.respiration, shallow.respiration);
    }

    #[test]
    fn plant_sums_organs() {
        let organs = vec![leaf(0.1), leaf(0.5)];
        let plant = evaluate_plant(&site(), &organs).unwrap().value;
        assert_eq!(plant.organs.len(), 2);
        let gross: f64 = plant.organs.iter().map(|o| o.gross.value()).sum();
        assert_relative_eq!(plant.gross.value(), gross, epsilon = 1e-15);
        assert_relative_eq!(
            plant.net.value(),
            plant.gross.value() - plant.respiration.value(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn invalid_organ_aborts_plant() {
        let mut bad = leaf(0.1);
        bad.respiration.total_weight = Grams::new(1.0);
        assert!(evaluate_plant(&site(), &[leaf(0.1), bad]).is_err());
    }
}
