use podostemum_core::{
    attenuate, attenuate_profile, daily_respiration, evaluate_organ, gross_assimilation,
    solar_geometry, surface_par, Degrees, Diagnostics, Hours, Meters, OrganParams, ParProfile,
    SiteLight, SolarDay,
};

use crate::error::{DefaultPodoError, PodoErrorCode};
use crate::helpers::{handle_ffi_result_error, track_error, write_optional};
use crate::types::{
    PodoAttenuationParams, PodoOrganBudget, PodoParProfile, PodoPhotoParams, PodoPolarPolicy,
    PodoRespirationParams, PodoSolarGeometry,
};

fn warning_count(diagnostics: &Diagnostics) -> u32 {
    u32::try_from(diagnostics.len()).unwrap_or(u32::MAX)
}

#[no_mangle]
/// Solar declination and daylength for a Julian day and latitude.
///
/// - `out_geometry` receives the geometry on success.
/// - `out_warnings` (optional) receives the number of warnings raised
///   (day outside 1..=365, polar clamp). Read them through the tracing log.
///
/// Returns
/// - `PodoErrorCode::Ok` (0) on success
/// - `PodoErrorCode::NullPointer` if `out_geometry` is null
/// - `PodoErrorCode::OutOfRange` if `latitude_deg` is outside [-90, 90]
/// - `PodoErrorCode::PolarDaylength` for polar day or night under `Reject`
///
/// # Safety
///
/// - `out_geometry` must be a valid, non-null pointer to a `PodoSolarGeometry`.
/// - `out_warnings` must be null or a valid pointer to a `u32`.
pub unsafe extern "C" fn podo_solar_geometry(
    julian_day: f64,
    latitude_deg: f64,
    policy: PodoPolarPolicy,
    out_geometry: *mut PodoSolarGeometry,
    out_warnings: *mut u32,
) -> PodoErrorCode {
    if out_geometry.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_geometry"));
    }

    handle_ffi_result_error(|| {
        let day = SolarDay::new(julian_day, Degrees::new(latitude_deg));
        let geometry = solar_geometry(day, policy.into())?;
        unsafe {
            *out_geometry = geometry.value.into();
            write_optional(out_warnings, warning_count(&geometry.diagnostics));
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// PAR (µE) at the water surface at the three Gaussian sample times.
///
/// During polar night every sample is zero.
///
/// Returns
/// - `PodoErrorCode::Ok` (0) on success
/// - `PodoErrorCode::NullPointer` if `out_par` is null
/// - `PodoErrorCode::OutOfRange` if `latitude_deg` is outside [-90, 90]
/// - `PodoErrorCode::PolarDaylength` for polar day or night under `Reject`
///
/// # Safety
///
/// - `out_par` must be a valid, non-null pointer to a `PodoParProfile`.
/// - `out_warnings` must be null or a valid pointer to a `u32`.
///
/// # Example Usage (C)
/// ```c
/// PodoParProfile surface;
/// uint32_t warnings = 0;
/// if (podo_surface_par(120.0, 25.0, PodoPolarPolicy_Clamp, &surface, &warnings) == PodoErrorCode_Ok) {
///     printf("near noon: %.2f uE\n", surface.near_noon);
/// }
/// ```
pub unsafe extern "C" fn podo_surface_par(
    julian_day: f64,
    latitude_deg: f64,
    policy: PodoPolarPolicy,
    out_par: *mut PodoParProfile,
    out_warnings: *mut u32,
) -> PodoErrorCode {
    if out_par.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_par"));
    }

    handle_ffi_result_error(|| {
        let day = SolarDay::new(julian_day, Degrees::new(latitude_deg));
        let par = surface_par(day, policy.into())?;
        unsafe {
            *out_par = par.value.into();
            write_optional(out_warnings, warning_count(&par.diagnostics));
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// Attenuate a three-sample surface PAR profile to `depth_m`.
///
/// Returns
/// - `PodoErrorCode::Ok` (0) on success
/// - `PodoErrorCode::NullPointer` if `out_par` is null
/// - `PodoErrorCode::Negative` for negative PAR, depth, `k`, `kp` or `bz`
/// - `PodoErrorCode::OutOfRange` if `prop_reflect` is outside [0, 1]
///
/// # Safety
///
/// - `out_par` must be a valid, non-null pointer to a `PodoParProfile`.
pub unsafe extern "C" fn podo_attenuate_profile(
    surface: PodoParProfile,
    depth_m: f64,
    params: PodoAttenuationParams,
    out_par: *mut PodoParProfile,
) -> PodoErrorCode {
    if out_par.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_par"));
    }

    handle_ffi_result_error(|| {
        let profile = attenuate_profile(
            &ParProfile::from(surface),
            Meters::new(depth_m),
            &params.into(),
        )?;
        unsafe {
            *out_par = profile.into();
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// Attenuate a single PAR value to `depth_m`.
///
/// Same error codes as `podo_attenuate_profile`.
///
/// # Safety
///
/// - `out_par` must be a valid, non-null pointer to a `double`.
pub unsafe extern "C" fn podo_attenuate_scalar(
    par: f64,
    depth_m: f64,
    params: PodoAttenuationParams,
    out_par: *mut f64,
) -> PodoErrorCode {
    if out_par.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_par"));
    }

    handle_ffi_result_error(|| {
        let value = attenuate(par, Meters::new(depth_m), &params.into())?;
        unsafe {
            *out_par = value;
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// Daily gross assimilation, in grams of biomass, for PAR at the tissue.
///
/// - `out_biomass` receives the biomass gain on success.
/// - `out_warnings` (optional) receives the warning count (temperature
///   outside the recorded range).
///
/// Returns
/// - `PodoErrorCode::Ok` (0) on success
/// - `PodoErrorCode::NullPointer` if `out_biomass` is null
/// - `PodoErrorCode::Negative` for negative PAR, daylength or parameters
/// - `PodoErrorCode::NotPositive` if `glucose_req` is zero
/// - `PodoErrorCode::OutOfRange` if `daylength_hr` exceeds 24
///
/// # Safety
///
/// - `out_biomass` must be a valid, non-null pointer to a `double`.
/// - `out_warnings` must be null or a valid pointer to a `u32`.
pub unsafe extern "C" fn podo_gross_assimilation(
    par_at_tissue: PodoParProfile,
    daylength_hr: f64,
    params: PodoPhotoParams,
    out_biomass: *mut f64,
    out_warnings: *mut u32,
) -> PodoErrorCode {
    if out_biomass.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_biomass"));
    }

    handle_ffi_result_error(|| {
        let gross = gross_assimilation(
            &ParProfile::from(par_at_tissue),
            Hours::new(daylength_hr),
            &params.into(),
        )?;
        unsafe {
            *out_biomass = gross.value.biomass.value();
            write_optional(out_warnings, warning_count(&gross.diagnostics));
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// Daily maintenance respiration, in grams of biomass lost.
///
/// Returns
/// - `PodoErrorCode::Ok` (0) on success
/// - `PodoErrorCode::NullPointer` if `out_biomass` is null
/// - `PodoErrorCode::Negative` for negative weights or `km_prime`
/// - `PodoErrorCode::NotPositive` if `glucose_req` is zero
/// - `PodoErrorCode::LiveExceedsTotal` if `live_weight > total_weight`
///
/// # Safety
///
/// - `out_biomass` must be a valid, non-null pointer to a `double`.
/// - `out_warnings` must be null or a valid pointer to a `u32`.
pub unsafe extern "C" fn podo_daily_respiration(
    params: PodoRespirationParams,
    out_biomass: *mut f64,
    out_warnings: *mut u32,
) -> PodoErrorCode {
    if out_biomass.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_biomass"));
    }

    handle_ffi_result_error(|| {
        let loss = daily_respiration(&params.into())?;
        unsafe {
            *out_biomass = loss.value.value();
            write_optional(out_warnings, warning_count(&loss.diagnostics));
        }
        Ok::<(), DefaultPodoError>(())
    })
}

#[no_mangle]
/// Run the whole pipeline for one organ: sun, surface light, attenuation,
/// assimilation and respiration.
///
/// - `out_budget` receives PAR at the tissue and the gross, respiration and
///   net biomass for the day.
/// - `out_warnings` (optional) receives the total warning count across all
///   stages.
///
/// Returns any error code of the individual stages.
///
/// # Safety
///
/// - `out_budget` must be a valid, non-null pointer to a `PodoOrganBudget`.
/// - `out_warnings` must be null or a valid pointer to a `u32`.
pub unsafe extern "C" fn podo_evaluate_organ(
    julian_day: f64,
    latitude_deg: f64,
    policy: PodoPolarPolicy,
    depth_m: f64,
    attenuation: PodoAttenuationParams,
    photo: PodoPhotoParams,
    respiration: PodoRespirationParams,
    out_budget: *mut PodoOrganBudget,
    out_warnings: *mut u32,
) -> PodoErrorCode {
    if out_budget.is_null() {
        return track_error(&DefaultPodoError::null_pointer("out_budget"));
    }

    handle_ffi_result_error(|| {
        let day = SolarDay::new(julian_day, Degrees::new(latitude_deg));
        let site = SiteLight::compute(day, policy.into())?;
        let organ = OrganParams {
            name: "organ".to_string(),
            depth: Meters::new(depth_m),
            attenuation: attenuation.into(),
            photo: photo.into(),
            respiration: respiration.into(),
        };
        let budget = evaluate_organ(&site.value, &organ)?;

        let mut diagnostics = site.diagnostics;
        diagnostics.absorb(budget.diagnostics);
        unsafe {
            *out_budget = PodoOrganBudget::from(&budget.value);
            write_optional(out_warnings, warning_count(&diagnostics));
        }
        Ok::<(), DefaultPodoError>(())
    })
}
