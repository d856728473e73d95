//! Non-fatal warnings
//!
//! Inputs that are unrealistic but not impossible (a water temperature
//! outside anything recorded on Earth, a Julian day of 400) do not stop an
//! evaluation. Each one is recorded in a [`Diagnostics`] collector returned
//! alongside the result and mirrored to the `tracing` log at WARN level.

use crate::core_types::Celsius;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Highest Julian day accepted without a warning
pub const LAST_JULIAN_DAY: f64 = 365.0;

/// An input that was accepted but looks suspicious
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// Julian day outside 1..=365
    DayOutOfRange { day: f64 },
    /// Julian day with a fractional part
    NonIntegerDay { day: f64 },
    /// Temperature outside the recorded [-90, 60] °C range
    TemperatureOutOfRange { celsius: f64 },
    /// Sun never sets (or never rises); daylength clamped to 24 h (or 0 h)
    PolarClamp { aob: f64, daylength_hr: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Warning::DayOutOfRange { day } => {
                write!(f, "Julian day {day} is outside 1-365; computing anyway")
            }
            Warning::NonIntegerDay { day } => {
                write!(f, "Julian day {day} is not a whole day; computing anyway")
            }
            Warning::TemperatureOutOfRange { celsius } => write!(
                f,
                "temperature {celsius} °C is outside the range recorded on Earth (-90 to 60 °C)"
            ),
            Warning::PolarClamp { aob, daylength_hr } => write!(
                f,
                "sin/cos ratio {aob:.4} outside [-1, 1]; daylength clamped to {daylength_hr} h"
            ),
        }
    }
}

/// Warnings accumulated during one evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it
    pub fn push(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Append everything recorded by a nested evaluation (already logged)
    pub fn absorb(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Warn if `day` is not a whole number in 1..=365.
    pub fn check_julian_day(&mut self, day: f64) {
        if !(1.0..=LAST_JULIAN_DAY).contains(&day) {
            self.push(Warning::DayOutOfRange { day });
        } else if day.fract() != 0.0 {
            self.push(Warning::NonIntegerDay { day });
        }
    }

    /// Warn if `temp` lies outside the recorded range on Earth.
    pub fn check_temperature(&mut self, temp: Celsius) {
        if !temp.is_recorded_on_earth() {
            self.push(Warning::TemperatureOutOfRange {
                celsius: temp.value(),
            });
        }
    }
}

/// A successful result plus whatever warnings were raised producing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluated<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Evaluated<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Evaluated<U> {
        Evaluated::new(f(self.value), self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_day_is_silent() {
        let mut d = Diagnostics::new();
        d.check_julian_day(1.0);
        d.check_julian_day(365.0);
        assert!(d.is_empty());
    }

    #[test]
    fn out_of_range_day_warns_once() {
        let mut d = Diagnostics::new();
        d.check_julian_day(366.5);
        assert_eq!(d.warnings(), &[Warning::DayOutOfRange { day: 366.5 }]);
    }

    #[test]
    fn fractional_day_warns() {
        let mut d = Diagnostics::new();
        d.check_julian_day(120.25);
        assert_eq!(d.warnings(), &[Warning::NonIntegerDay { day: 120.25 }]);
    }

    #[test]
    fn extreme_temperature_warns() {
        let mut d = Diagnostics::new();
        d.check_temperature(Celsius::new(15.0));
        assert!(d.is_empty());
        d.check_temperature(Celsius::new(75.0));
        assert_eq!(d.len(), 1);
        assert!(d.warnings()[0].to_string().contains("75"));
    }

    #[test]
    fn absorb_keeps_order() {
        let mut outer = Diagnostics::new();
        outer.check_julian_day(0.0);
        let mut inner = Diagnostics::new();
        inner.check_temperature(Celsius::new(-100.0));
        outer.absorb(inner);
        assert!(matches!(outer.warnings()[0], Warning::DayOutOfRange { .. }));
        assert!(matches!(
            outer.warnings()[1],
            Warning::TemperatureOutOfRange { .. }
        ));
    }
}
