//! FFI-safe mirrors of the model records.
//!
//! Every type here is `#[repr(C)]` and passed by value. Optional limiting
//! factors are flattened to an `enabled` flag plus their constants, since C
//! has no tagged `Option`.

use podostemum_core::{
    AttenuationParams, Celsius, Grams, Limitation, OrganBudget, ParProfile, PhotoParams,
    PolarPolicy, ResourceLimit, RespirationParams, SolarGeometry, TemperatureResponse,
};

/// Behaviour when the sun never rises or never sets.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodoPolarPolicy {
    /// Clamp daylength to 24 h / 0 h and record a warning.
    Clamp = 0,
    /// Fail with `PodoErrorCode::PolarDaylength`.
    Reject = 1,
}

impl From<PodoPolarPolicy> for PolarPolicy {
    fn from(p: PodoPolarPolicy) -> Self {
        match p {
            PodoPolarPolicy::Clamp => PolarPolicy::Clamp,
            PodoPolarPolicy::Reject => PolarPolicy::Reject,
        }
    }
}

/// Sun position terms for one day and latitude.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoSolarGeometry {
    /// Solar declination in radians.
    pub declination_rad: f64,
    /// Hours of daylight.
    pub daylength_hr: f64,
    pub sinld: f64,
    pub cosld: f64,
    pub aob: f64,
}

impl From<SolarGeometry> for PodoSolarGeometry {
    fn from(g: SolarGeometry) -> Self {
        Self {
            declination_rad: g.declination.value(),
            daylength_hr: g.daylength.value(),
            sinld: g.sinld,
            cosld: g.cosld,
            aob: g.aob,
        }
    }
}

/// PAR (µE) at the three Gaussian sample times.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoParProfile {
    pub near_noon: f64,
    pub mid_afternoon: f64,
    pub late_afternoon: f64,
}

impl From<ParProfile> for PodoParProfile {
    fn from(p: ParProfile) -> Self {
        Self {
            near_noon: p.near_noon(),
            mid_afternoon: p.mid_afternoon(),
            late_afternoon: p.late_afternoon(),
        }
    }
}

impl From<PodoParProfile> for ParProfile {
    fn from(p: PodoParProfile) -> Self {
        ParProfile::new([p.near_noon, p.mid_afternoon, p.late_afternoon])
    }
}

/// Water column and canopy optics.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoAttenuationParams {
    pub prop_reflect: f64,
    pub k: f64,
    pub kp: f64,
    pub bz: f64,
    pub self_shading: bool,
}

impl From<PodoAttenuationParams> for AttenuationParams {
    fn from(p: PodoAttenuationParams) -> Self {
        AttenuationParams {
            prop_reflect: p.prop_reflect,
            k: p.k,
            kp: p.kp,
            bz: p.bz,
            self_shading: p.self_shading,
        }
    }
}

/// Monod light limitation; ignored unless `enabled`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoLimit {
    pub enabled: bool,
    pub half_saturation: f64,
}

impl From<PodoLimit> for Limitation {
    fn from(l: PodoLimit) -> Self {
        if l.enabled {
            Limitation::Limited {
                half_saturation: l.half_saturation,
            }
        } else {
            Limitation::Unlimited
        }
    }
}

/// Covariate with Monod limitation; ignored unless `enabled`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoResource {
    pub enabled: bool,
    pub amount: f64,
    pub half_saturation: f64,
}

impl From<PodoResource> for Option<ResourceLimit> {
    fn from(r: PodoResource) -> Self {
        r.enabled.then(|| ResourceLimit::monod(r.amount, r.half_saturation))
    }
}

/// Photosynthesis parameters for one tissue.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoPhotoParams {
    pub pmax: f64,
    pub pbiomass: f64,
    pub glucose_req: f64,
    pub light: PodoLimit,
    /// Apply the Hill temperature response at `temperature_c`.
    pub temperature_enabled: bool,
    pub temperature_c: f64,
    pub depth: PodoResource,
    pub carbonate: PodoResource,
    pub nutrient: PodoResource,
}

impl From<PodoPhotoParams> for PhotoParams {
    fn from(p: PodoPhotoParams) -> Self {
        PhotoParams {
            pmax: p.pmax,
            pbiomass: Grams::new(p.pbiomass),
            glucose_req: p.glucose_req,
            light: p.light.into(),
            temperature: if p.temperature_enabled {
                TemperatureResponse::hill(Celsius::new(p.temperature_c))
            } else {
                TemperatureResponse::Unlimited
            },
            depth: p.depth.into(),
            carbonate: p.carbonate.into(),
            nutrient: p.nutrient.into(),
        }
    }
}

/// Maintenance respiration parameters for one tissue.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoRespirationParams {
    pub km_prime: f64,
    pub temperature_c: f64,
    pub live_weight: f64,
    pub total_weight: f64,
    pub glucose_req: f64,
}

impl From<PodoRespirationParams> for RespirationParams {
    fn from(p: PodoRespirationParams) -> Self {
        RespirationParams {
            km_prime: p.km_prime,
            temp: Celsius::new(p.temperature_c),
            live_weight: Grams::new(p.live_weight),
            total_weight: Grams::new(p.total_weight),
            glucose_req: p.glucose_req,
        }
    }
}

/// One organ's daily budget in grams.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PodoOrganBudget {
    pub par_at_tissue: PodoParProfile,
    pub gross: f64,
    pub respiration: f64,
    pub net: f64,
}

impl From<&OrganBudget> for PodoOrganBudget {
    fn from(b: &OrganBudget) -> Self {
        Self {
            par_at_tissue: b.par_at_tissue.into(),
            gross: b.gross.value(),
            respiration: b.respiration.value(),
            net: b.net.value(),
        }
    }
}
