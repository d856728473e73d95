//! C ABI for the Podostemum light and carbon model.
//!
//! Every function returns a [`PodoErrorCode`] and writes results through
//! out-pointers. On failure the outputs are left untouched and the message
//! is available from [`podo_last_error`] until the next call on the same
//! thread. Non-fatal warnings are counted through an optional `out_warnings`
//! pointer and logged via `tracing` in the core crate.
//!
//! The C header `PodostemumFFI.h` is generated by `build.rs`.

mod error;
mod helpers;
mod operations;
mod types;

pub use error::{podo_last_error, podo_last_error_code, PodoErrorCode};
pub use operations::{
    podo_attenuate_profile, podo_attenuate_scalar, podo_daily_respiration, podo_evaluate_organ,
    podo_gross_assimilation, podo_solar_geometry, podo_surface_par,
};
pub use types::{
    PodoAttenuationParams, PodoLimit, PodoOrganBudget, PodoParProfile, PodoPhotoParams,
    PodoPolarPolicy, PodoResource, PodoRespirationParams, PodoSolarGeometry,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::ffi::CStr;
    use std::ptr;

    fn respiration_params(total: f64) -> PodoRespirationParams {
        PodoRespirationParams {
            km_prime: 0.0225,
            temperature_c: 15.0,
            live_weight: 2.0,
            total_weight: total,
            glucose_req: 1.5,
        }
    }

    fn leaf_photo() -> PodoPhotoParams {
        PodoPhotoParams {
            pmax: 0.005,
            pbiomass: 2.0,
            glucose_req: 1.5,
            light: PodoLimit {
                enabled: true,
                half_saturation: 300.0,
            },
            temperature_enabled: true,
            temperature_c: 20.0,
            ..PodoPhotoParams::default()
        }
    }

    fn last_error_message() -> String {
        let ptr = podo_last_error();
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    #[test]
    fn surface_par_matches_reference() {
        let mut par = PodoParProfile::default();
        let mut warnings = 99_u32;
        let code =
            unsafe { podo_surface_par(120.0, 25.0, PodoPolarPolicy::Clamp, &mut par, &mut warnings) };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_eq!(warnings, 0);
        assert_relative_eq!(par.near_noon, 2879.42, epsilon = 0.01);
        assert_relative_eq!(par.mid_afternoon, 1882.27, epsilon = 0.01);
        assert_relative_eq!(par.late_afternoon, 382.64, epsilon = 0.01);
        assert!(podo_last_error().is_null());
        assert_eq!(podo_last_error_code(), PodoErrorCode::Ok);
    }

    #[test]
    fn solar_geometry_reports_daylength() {
        let mut g = PodoSolarGeometry::default();
        let code = unsafe {
            podo_solar_geometry(120.0, 25.0, PodoPolarPolicy::Clamp, &mut g, ptr::null_mut())
        };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_relative_eq!(g.daylength_hr, 12.907, epsilon = 0.01);
    }

    #[test]
    fn polar_reject_sets_last_error() {
        let mut g = PodoSolarGeometry::default();
        let code = unsafe {
            podo_solar_geometry(172.0, 80.0, PodoPolarPolicy::Reject, &mut g, ptr::null_mut())
        };
        assert_eq!(code, PodoErrorCode::PolarDaylength);
        assert_eq!(podo_last_error_code(), PodoErrorCode::PolarDaylength);
        assert!(!last_error_message().is_empty());
    }

    #[test]
    fn polar_clamp_counts_a_warning() {
        let mut g = PodoSolarGeometry::default();
        let mut warnings = 0_u32;
        let code = unsafe {
            podo_solar_geometry(172.0, 80.0, PodoPolarPolicy::Clamp, &mut g, &mut warnings)
        };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_eq!(warnings, 1);
        assert_relative_eq!(g.daylength_hr, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn null_output_is_rejected() {
        let code = unsafe {
            podo_surface_par(
                120.0,
                25.0,
                PodoPolarPolicy::Clamp,
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        assert_eq!(code, PodoErrorCode::NullPointer);
        assert!(last_error_message().contains("out_par"));
    }

    #[test]
    fn invalid_latitude_maps_to_out_of_range() {
        let mut par = PodoParProfile::default();
        let code = unsafe {
            podo_surface_par(120.0, 95.0, PodoPolarPolicy::Clamp, &mut par, ptr::null_mut())
        };
        assert_eq!(code, PodoErrorCode::OutOfRange);
    }

    #[test]
    fn attenuation_at_surface_only_removes_reflection() {
        let params = PodoAttenuationParams {
            prop_reflect: 0.1,
            k: 2.0,
            ..PodoAttenuationParams::default()
        };
        let mut out = 0.0;
        let code = unsafe { podo_attenuate_scalar(1000.0, 0.0, params, &mut out) };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_relative_eq!(out, 900.0, epsilon = 1e-9);

        let surface = PodoParProfile {
            near_noon: 1000.0,
            mid_afternoon: 500.0,
            late_afternoon: 100.0,
        };
        let mut profile = PodoParProfile::default();
        let code = unsafe { podo_attenuate_profile(surface, 1.0, params, &mut profile) };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_relative_eq!(profile.near_noon, 900.0 * (-2.0_f64).exp(), epsilon = 1e-9);
        assert!(profile.late_afternoon < profile.mid_afternoon);
    }

    #[test]
    fn negative_depth_maps_to_negative() {
        let mut out = 0.0;
        let code =
            unsafe { podo_attenuate_scalar(1000.0, -1.0, PodoAttenuationParams::default(), &mut out) };
        assert_eq!(code, PodoErrorCode::Negative);
    }

    #[test]
    fn respiration_matches_reference() {
        let mut loss = 0.0;
        let code =
            unsafe { podo_daily_respiration(respiration_params(3.0), &mut loss, ptr::null_mut()) };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_relative_eq!(loss, 0.01, epsilon = 1e-9);

        let code =
            unsafe { podo_daily_respiration(respiration_params(1.0), &mut loss, ptr::null_mut()) };
        assert_eq!(code, PodoErrorCode::LiveExceedsTotal);
    }

    #[test]
    fn zero_glucose_requirement_is_not_positive() {
        let mut gain = 0.0;
        let photo = PodoPhotoParams {
            glucose_req: 0.0,
            ..leaf_photo()
        };
        let code = unsafe {
            podo_gross_assimilation(
                PodoParProfile::default(),
                12.0,
                photo,
                &mut gain,
                ptr::null_mut(),
            )
        };
        assert_eq!(code, PodoErrorCode::NotPositive);
    }

    #[test]
    fn nan_temperature_maps_to_not_finite() {
        let mut gain = 0.0;
        let photo = PodoPhotoParams {
            temperature_c: f64::NAN,
            ..leaf_photo()
        };
        let code = unsafe {
            podo_gross_assimilation(
                PodoParProfile::default(),
                12.0,
                photo,
                &mut gain,
                ptr::null_mut(),
            )
        };
        assert_eq!(code, PodoErrorCode::NotFinite);
        assert!(last_error_message().contains("temperature"));
    }

    #[test]
    fn assimilation_grows_with_light() {
        let dim = PodoParProfile {
            near_noon: 50.0,
            mid_afternoon: 30.0,
            late_afternoon: 10.0,
        };
        let bright = PodoParProfile {
            near_noon: 1500.0,
            mid_afternoon: 1000.0,
            late_afternoon: 200.0,
        };
        let (mut low, mut high) = (0.0, 0.0);
        unsafe {
            assert_eq!(
                podo_gross_assimilation(dim, 12.0, leaf_photo(), &mut low, ptr::null_mut()),
                PodoErrorCode::Ok
            );
            assert_eq!(
                podo_gross_assimilation(bright, 12.0, leaf_photo(), &mut high, ptr::null_mut()),
                PodoErrorCode::Ok
            );
        }
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn organ_budget_nets_gross_and_respiration() {
        let attenuation = PodoAttenuationParams {
            k: 1.0,
            ..PodoAttenuationParams::default()
        };
        let mut budget = PodoOrganBudget::default();
        let mut warnings = 0_u32;
        let code = unsafe {
            podo_evaluate_organ(
                120.0,
                25.0,
                PodoPolarPolicy::Clamp,
                0.3,
                attenuation,
                leaf_photo(),
                respiration_params(2.0),
                &mut budget,
                &mut warnings,
            )
        };
        assert_eq!(code, PodoErrorCode::Ok);
        assert_eq!(warnings, 0);
        assert!(budget.gross > 0.0);
        assert_relative_eq!(budget.net, budget.gross - budget.respiration, epsilon = 1e-15);
        assert_relative_eq!(
            budget.par_at_tissue.near_noon,
            2879.415 * (-0.3_f64).exp(),
            epsilon = 0.01
        );
    }
}
