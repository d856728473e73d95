//! Light attenuation through the water column
//!
//! Beer-Lambert extinction with surface reflection and optional
//! self-shading by plant biomass above the tissue:
//!
//! ```text
//! Iz = (1 - ρ) · I0 · exp(-K·z - Kp·Bz)
//! ```
//!
//! The `Kp·Bz` term only applies when self-shading is switched on. `Kp` and
//! `Bz` default to zero, so turning self-shading on without supplying them
//! leaves the result unchanged.

use crate::core_types::{Meters, ParProfile};
use crate::error::{non_negative, within, ModelResult};
use serde::{Deserialize, Serialize};

/// Optical properties of the water column and canopy
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttenuationParams {
    /// Proportion of surface light reflected, in [0, 1]
    pub prop_reflect: f64,
    /// Water attenuation coefficient (1/m)
    pub k: f64,
    /// Plant self-shading coefficient (per g of overlying biomass)
    pub kp: f64,
    /// Biomass above the tissue (g)
    pub bz: f64,
    /// Whether `kp·bz` contributes to extinction
    pub self_shading: bool,
}

impl AttenuationParams {
    /// Water-only attenuation with no reflection or self-shading
    pub fn water(k: f64) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    fn validate(&self) -> ModelResult<()> {
        within("propReflect", self.prop_reflect, 0.0, 1.0)?;
        non_negative("K", self.k)?;
        non_negative("Kp", self.kp)?;
        non_negative("Bz", self.bz)?;
        Ok(())
    }

    /// Fraction of surface PAR that reaches depth `z`
    fn transmission(&self, z: f64) -> f64 {
        let shading = if self.self_shading {
            self.kp * self.bz
        } else {
            0.0
        };
        (1.0 - self.prop_reflect) * (-self.k * z - shading).exp()
    }
}

/// PAR reaching depth `z` from a single surface value.
///
/// # Errors
/// Negative `par`, `depth`, `K`, `Kp` or `Bz`; `propReflect` outside [0, 1].
pub fn attenuate(par: f64, depth: Meters, params: &AttenuationParams) -> ModelResult<f64> {
    let par = non_negative("PAR", par)?;
    let z = non_negative("depth", depth.value())?;
    params.validate()?;
    Ok(par * params.transmission(z))
}

/// PAR reaching depth `z` at each of the three times of day.
///
/// # Errors
/// As [`attenuate`], if any profile entry is negative.
pub fn attenuate_profile(
    profile: &ParProfile,
    depth: Meters,
    params: &AttenuationParams,
) -> ModelResult<ParProfile> {
    for (_, par) in profile.iter() {
        non_negative("PAR", par)?;
    }
    let z = non_negative("depth", depth.value())?;
    params.validate()?;
    let transmission = params.transmission(z);
    Ok(profile.map(|par| par * transmission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn surface_without_reflection_is_lossless() {
        let profile = ParProfile::new([2879.42, 1882.27, 382.64]);
        let out = attenuate_profile(&profile, Meters::new(0.0), &AttenuationParams::water(1.2))
            .unwrap();
        assert_eq!(out, profile);
    }

    #[test]
    fn beer_lambert_at_one_metre() {
        let iz = attenuate(1000.0, Meters::new(1.0), &AttenuationParams::water(0.5)).unwrap();
        assert_relative_eq!(iz, 1000.0 * (-0.5_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn reflection_scales_linearly() {
        let params = AttenuationParams {
            prop_reflect: 0.1,
            ..AttenuationParams::default()
        };
        let iz = attenuate(500.0, Meters::new(0.0), &params).unwrap();
        assert_relative_eq!(iz, 450.0, epsilon = 1e-9);
    }

    #[test]
    fn self_shading_only_when_enabled() {
        let mut params = AttenuationParams {
            k: 0.8,
            kp: 0.3,
            bz: 2.0,
            ..AttenuationParams::default()
        };
        let off = attenuate(1000.0, Meters::new(0.5), &params).unwrap();
        params.self_shading = true;
        let on = attenuate(1000.0, Meters::new(0.5), &params).unwrap();
        assert_relative_eq!(on, off * (-0.6_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn self_shading_with_default_kp_bz_is_inert() {
        let params = AttenuationParams {
            k: 0.8,
            self_shading: true,
            ..AttenuationParams::default()
        };
        let with = attenuate(1000.0, Meters::new(0.5), &params).unwrap();
        let without = attenuate(1000.0, Meters::new(0.5), &AttenuationParams::water(0.8)).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let water = AttenuationParams::water(0.5);
        assert!(matches!(
            attenuate(-1.0, Meters::new(0.0), &water),
            Err(DomainError::Negative { name: "PAR", .. })
        ));
        assert!(matches!(
            attenuate(1.0, Meters::new(-0.1), &water),
            Err(DomainError::Negative { name: "depth", .. })
        ));
        let reflect = AttenuationParams {
            prop_reflect: 1.5,
            ..water
        };
        assert!(matches!(
            attenuate(1.0, Meters::new(0.1), &reflect),
            Err(DomainError::OutOfRange { name: "propReflect", .. })
        ));
        assert!(attenuate(1.0, Meters::new(0.1), &AttenuationParams::water(-0.2)).is_err());
    }

    #[test]
    fn negative_profile_entry_is_rejected() {
        let profile = ParProfile::new([10.0, -1.0, 0.0]);
        assert!(
            attenuate_profile(&profile, Meters::new(0.0), &AttenuationParams::default()).is_err()
        );
    }
}
