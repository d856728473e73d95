//! Surface PAR at three representative times of day
//!
//! Daily extraterrestrial radiation is distributed over the day in
//! proportion to solar elevation, with the empirical `(1 + 0.4·sinβ)`
//! correction for atmospheric path length (Goudriaan & van Laar 1994,
//! eqs. 3.3-3.8). Instantaneous radiation is sampled at the three Gaussian
//! afternoon times and half of it is taken as photosynthetically active.
//!
//! ```text
//! dsinB  = 3600·(DL·sinld + 24·cosld·√(1-aob²)/π)
//! dsinBE = 3600·(DL·(sinld + 0.4·(sinld² + 0.5·cosld²))
//!                + 12·cosld·(2 + 1.2·sinld)·√(1-aob²)/π)
//! Sc     = 1370·(1 + 0.033·cos(2π·day/365))
//! PAR(t) = 0.5·Sc·dsinB·sinβ(t)·(1 + 0.4·sinβ(t)) / dsinBE
//! ```
//!
//! The W/m² result is converted to µE with the factor 868/208.32.

use super::solar_geometry::{solar_geometry, PolarPolicy, SolarDay, SolarGeometry, DAYS_PER_YEAR};
use crate::core_types::{ParProfile, TimeOfDay};
use crate::diagnostics::Evaluated;
use crate::error::ModelResult;
use std::f64::consts::PI;

/// Solar constant at mean Earth-Sun distance (W/m²)
pub const SOLAR_CONSTANT: f64 = 1370.0;

/// Fraction of shortwave radiation that is photosynthetically active
pub const PAR_FRACTION: f64 = 0.5;

/// W/m² of PAR to µE conversion
pub const WATTS_TO_MICRO_EINSTEINS: f64 = 868.0 / 208.32;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Integral of sin(solar elevation) over the day (seconds)
fn daily_sin_elevation(g: &SolarGeometry) -> f64 {
    let dl = g.daylength.value();
    SECONDS_PER_HOUR * (dl * g.sinld + 24.0 * g.cosld * g.aob_complement() / PI)
}

/// Same integral with the atmospheric path-length correction applied
fn daily_effective_sin_elevation(g: &SolarGeometry) -> f64 {
    let dl = g.daylength.value();
    let (s, c) = (g.sinld, g.cosld);
    SECONDS_PER_HOUR
        * (dl * (s + 0.4 * (s * s + 0.5 * c * c))
            + 12.0 * c * (2.0 + 1.2 * s) * g.aob_complement() / PI)
}

/// Eccentricity-corrected solar constant for a Julian day (W/m²)
pub fn solar_constant(julian_day: f64) -> f64 {
    SOLAR_CONSTANT * (1.0 + 0.033 * (2.0 * PI * julian_day / DAYS_PER_YEAR).cos())
}

/// Representative clock hour for a Gaussian sample of the afternoon
pub fn sample_hour(g: &SolarGeometry, time: TimeOfDay) -> f64 {
    12.0 + g.daylength.value() * 0.5 * time.abscissa()
}

/// Sine of solar elevation at `hour`, zero when the sun is below the horizon
pub fn sin_elevation(g: &SolarGeometry, hour: f64) -> f64 {
    (g.sinld + g.cosld * (2.0 * PI * (hour + 12.0) / 24.0).cos()).max(0.0)
}

/// Surface PAR profile from precomputed geometry.
///
/// Use this when several organs at one site share the same day: the
/// geometry is computed once and reused.
pub fn surface_par_from_geometry(julian_day: f64, g: &SolarGeometry) -> ParProfile {
    let effective = daily_effective_sin_elevation(g);
    if effective <= 0.0 {
        // Polar night: no daylight to distribute.
        return ParProfile::uniform(0.0);
    }

    let daily_radiation = solar_constant(julian_day) * daily_sin_elevation(g);
    let mut values = [0.0; 3];
    for time in TimeOfDay::ALL {
        let sin_b = sin_elevation(g, sample_hour(g, time));
        let watts = PAR_FRACTION * daily_radiation * sin_b * (1.0 + 0.4 * sin_b) / effective;
        values[time.index()] = (watts * WATTS_TO_MICRO_EINSTEINS).max(0.0);
    }
    ParProfile::new(values)
}

/// Surface PAR (µE) at the three Gaussian times of day.
///
/// # Errors
/// Same as [`solar_geometry`]: invalid latitude, NaN inputs, or a polar day
/// under [`PolarPolicy::Reject`]. Day warnings are carried through.
pub fn surface_par(day: SolarDay, policy: PolarPolicy) -> ModelResult<Evaluated<ParProfile>> {
    let geometry = solar_geometry(day, policy)?;
    Ok(geometry.map(|g| surface_par_from_geometry(day.julian_day, &g)))
}
