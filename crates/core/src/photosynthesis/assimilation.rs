//! Gross daily carbon assimilation
//!
//! Instantaneous assimilation is the maximum rate scaled by up to five
//! independent limiting factors:
//!
//! ```text
//! P(t) = Pmax · f_light(PAR(t)) · f_temp(T) · f_depth(D) · f_carb(C) · f_nutr(N)
//! ```
//!
//! `P(t)` is averaged over the three Gaussian sample times, scaled by tissue
//! biomass and daylength to a daily CO₂ uptake, converted to glucose by mass
//! ratio (30/44) and finally to biomass through the glucose requirement for
//! tissue construction.
//!
//! # References
//! - Goudriaan, J. & van Laar, H.H. (1994). Chapter 4 (assimilation),
//!   Chapter 6 (conversion efficiency).
//! - Carr, G.M. et al. (1997). "Models of aquatic plant productivity: a
//!   review of the factors that influence growth". Aquatic Botany 59.

use super::limitation::{optional_factor, Limitation, ResourceLimit, TemperatureResponse};
use crate::core_types::{Grams, Hours, ParProfile};
use crate::diagnostics::{Diagnostics, Evaluated};
use crate::error::{non_negative, positive, within, ModelResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mass of glucose-equivalent CH₂O (30 g/mol) per mass of CO₂ (44 g/mol)
pub const CO2_TO_GLUCOSE: f64 = 30.0 / 44.0;

/// Per-tissue photosynthesis parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoParams {
    /// Maximum gross assimilation rate (g CO₂ per g tissue per hour)
    pub pmax: f64,
    /// Photosynthesising tissue biomass
    pub pbiomass: Grams,
    /// Glucose required to build one gram of tissue (g/g)
    pub glucose_req: f64,
    /// Light response; `Limited` carries `Hi` (µE)
    #[serde(default)]
    pub light: Limitation,
    /// Temperature response
    #[serde(default)]
    pub temperature: TemperatureResponse,
    /// Depth `D` (m) with half-saturation `Hd`
    #[serde(default)]
    pub depth: Option<ResourceLimit>,
    /// Carbonate `C` with half-saturation `Hc`
    #[serde(default)]
    pub carbonate: Option<ResourceLimit>,
    /// Nutrient `N` with half-saturation `Hn`
    #[serde(default)]
    pub nutrient: Option<ResourceLimit>,
}

impl PhotoParams {
    /// Parameters with every limiting factor switched off
    pub fn unlimited(pmax: f64, pbiomass: Grams, glucose_req: f64) -> Self {
        Self {
            pmax,
            pbiomass,
            glucose_req,
            light: Limitation::Unlimited,
            temperature: TemperatureResponse::Unlimited,
            depth: None,
            carbonate: None,
            nutrient: None,
        }
    }

    fn validate(&self) -> ModelResult<()> {
        non_negative("Pmax", self.pmax)?;
        non_negative("pbiomass", self.pbiomass.value())?;
        positive("glucoseReq", self.glucose_req)?;
        self.light.validate("Hi")?;
        self.temperature.validate()?;
        if let Some(d) = &self.depth {
            d.validate("D", "Hd")?;
        }
        if let Some(c) = &self.carbonate {
            c.validate("C", "Hc")?;
        }
        if let Some(n) = &self.nutrient {
            n.validate("N", "Hn")?;
        }
        Ok(())
    }

    /// Product of the factors that do not vary through the day
    fn environment_factor(&self) -> f64 {
        self.temperature.factor()
            * optional_factor(self.depth.as_ref())
            * optional_factor(self.carbonate.as_ref())
            * optional_factor(self.nutrient.as_ref())
    }

    /// Instantaneous assimilation rate at a given PAR
    pub fn instantaneous_rate(&self, par: f64) -> f64 {
        self.pmax * self.light.factor(par) * self.environment_factor()
    }
}

/// Daily assimilation broken down through the unit-conversion chain
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrossAssimilation {
    /// Quadrature-weighted mean rate per unit biomass
    pub mean_rate: f64,
    /// CO₂ fixed over the day (g)
    pub carbohydrate: f64,
    /// Glucose-equivalent produced (g)
    pub glucose: f64,
    /// Tissue that glucose can build
    pub biomass: Grams,
}

/// Gross daily biomass gain for one tissue.
///
/// `par` is the light at the tissue (already attenuated) for the three
/// Gaussian sample times; `daylength` comes from the same day's
/// [`crate::light::SolarGeometry`].
///
/// # Errors
/// Negative PAR, `Pmax`, `pbiomass`, half-saturation constant or covariate;
/// `daylength` outside [0, 24] h; `glucoseReq` not strictly positive; a
/// NaN or infinite water temperature.
///
/// Warns when the water temperature is outside the recorded range on Earth.
pub fn gross_assimilation(
    par: &ParProfile,
    daylength: Hours,
    params: &PhotoParams,
) -> ModelResult<Evaluated<GrossAssimilation>> {
    for (_, value) in par.iter() {
        non_negative("PAR", value)?;
    }
    let hours = within("daylength", daylength.value(), 0.0, 24.0)?;
    params.validate()?;

    let mut diagnostics = Diagnostics::new();
    if let Some(temp) = params.temperature.temperature() {
        diagnostics.check_temperature(temp);
    }

    let mean_rate = par.weighted_mean(|p| params.instantaneous_rate(p));
    let carbohydrate = mean_rate * params.pbiomass.value() * hours;
    let glucose = carbohydrate * CO2_TO_GLUCOSE;
    let biomass = Grams::new(glucose / params.glucose_req);

    debug!(
        "gross assimilation: mean_rate={mean_rate:.6} co2={carbohydrate:.6}g biomass={:.6}g",
        biomass.value()
    );

    Ok(Evaluated::new(
        GrossAssimilation {
            mean_rate,
            carbohydrate,
            glucose,
            biomass,
        },
        diagnostics,
    ))
}
