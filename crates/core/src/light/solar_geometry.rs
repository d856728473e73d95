//! Solar declination and daylength
//!
//! Astronomical daylength from Julian day and latitude, following the
//! formulation used in crop and aquatic-plant growth models (Goudriaan &
//! van Laar 1994):
//!
//! ```text
//! δ     = -asin(sin 23.45° · cos(2π(day + 10) / 365))
//! sinld = sin φ · sin δ
//! cosld = cos φ · cos δ
//! DL    = 12 · (1 + 2·asin(sinld / cosld) / π)
//! ```
//!
//! # References
//! - Goudriaan, J. & van Laar, H.H. (1994). "Modelling Potential Crop Growth
//!   Processes". Kluwer Academic Publishers, Chapter 3.
//! - Spitters, C.J.T. et al. (1986). "Separating the diffuse and direct
//!   component of global radiation". Agricultural and Forest Meteorology 38.

use crate::core_types::{Degrees, Hours, Radians};
use crate::diagnostics::{Diagnostics, Evaluated, Warning};
use crate::error::{finite, within, DomainError, ModelResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Obliquity of the ecliptic
pub const EARTH_TILT: Degrees = Degrees::new(23.45);

/// Days per (non-leap) year in the declination cycle
pub const DAYS_PER_YEAR: f64 = 365.0;

/// What to do when the sun never rises or never sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarPolicy {
    /// Clamp the sin/cos ratio to ±1 (24 h or 0 h of daylight) and warn
    #[default]
    Clamp,
    /// Fail with [`DomainError::PolarDaylength`]
    Reject,
}

/// A (day, location) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarDay {
    /// Julian day; whole numbers in 1..=365 expected
    pub julian_day: f64,
    /// Geographic latitude, positive north
    pub latitude: Degrees,
}

impl SolarDay {
    pub fn new(julian_day: f64, latitude: Degrees) -> Self {
        Self {
            julian_day,
            latitude,
        }
    }
}

/// Sun position terms reused by the surface light calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarGeometry {
    /// Solar declination
    pub declination: Radians,
    /// Hours between sunrise and sunset
    pub daylength: Hours,
    /// sin(latitude) · sin(declination)
    pub sinld: f64,
    /// cos(latitude) · cos(declination)
    pub cosld: f64,
    /// `sinld / cosld`, clamped to [-1, 1] under [`PolarPolicy::Clamp`]
    pub aob: f64,
}

impl SolarGeometry {
    /// `sqrt(1 - aob²)`, zero during polar day or night
    #[inline]
    pub fn aob_complement(&self) -> f64 {
        (1.0 - self.aob * self.aob).max(0.0).sqrt()
    }
}

/// Solar declination (radians) for a Julian day
pub fn declination(julian_day: f64) -> Radians {
    let tilt = EARTH_TILT.to_radians().sin();
    Radians::new(-(tilt * (2.0 * PI * (julian_day + 10.0) / DAYS_PER_YEAR).cos()).asin())
}

/// Declination, daylength and the sin/cos products for `day`.
///
/// # Errors
/// [`DomainError::OutOfRange`] when `|latitude| > 90`,
/// [`DomainError::NotFinite`] for NaN inputs, and
/// [`DomainError::PolarDaylength`] under [`PolarPolicy::Reject`] when the
/// sun does not both rise and set.
///
/// Warns (without failing) when the day is not a whole number in 1..=365.
pub fn solar_geometry(day: SolarDay, policy: PolarPolicy) -> ModelResult<Evaluated<SolarGeometry>> {
    let julian_day = finite("julian day", day.julian_day)?;
    let latitude = within("latitude", day.latitude.value(), -90.0, 90.0)?;

    let mut diagnostics = Diagnostics::new();
    diagnostics.check_julian_day(julian_day);

    let dec = declination(julian_day);
    let lat = Degrees::new(latitude).to_radians();
    let sinld = lat.sin() * dec.sin();
    let cosld = lat.cos() * dec.cos();

    // cosld is zero only at the poles; sinld/cosld then diverges to ±inf
    // (or NaN when the declination is also zero) and is handled as polar.
    let raw_aob = sinld / cosld;
    let aob = if (-1.0..=1.0).contains(&raw_aob) {
        raw_aob
    } else {
        match policy {
            PolarPolicy::Reject => return Err(DomainError::PolarDaylength { aob: raw_aob }),
            PolarPolicy::Clamp => {
                // NaN at a pole on an equinox: treat as the day/night boundary.
                let clamped = if raw_aob.is_nan() {
                    0.0
                } else {
                    raw_aob.clamp(-1.0, 1.0)
                };
                diagnostics.push(Warning::PolarClamp {
                    aob: raw_aob,
                    daylength_hr: daylength_from_aob(clamped).value(),
                });
                clamped
            }
        }
    };

    let daylength = daylength_from_aob(aob);
    debug!(
        "solar geometry: day={julian_day} lat={latitude} declination={:.4} daylength={:.3}h",
        dec.value(),
        daylength.value()
    );

    Ok(Evaluated::new(
        SolarGeometry {
            declination: dec,
            daylength,
            sinld,
            cosld,
            aob,
        },
        diagnostics,
    ))
}

fn daylength_from_aob(aob: f64) -> Hours {
    Hours::new(12.0 * (1.0 + 2.0 * aob.asin() / PI))
}
