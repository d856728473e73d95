//! Semantic unit types for the macrophyte light and carbon budget
//!
//! Newtype wrappers keep latitude degrees apart from radians, depths apart
//! from biomass, and water temperature apart from everything else. All
//! quantities are `f64`: the light pipeline chains several transcendental
//! functions and the reference scenarios are checked to two decimals in µE.
//!
//! # Design Philosophy
//! - Construction is unchecked; range validation belongs to the operations
//!   that consume the values and is reported as [`crate::error::DomainError`]
//! - Total ordering via `total_cmp` so values can be used with `min`/`max`
//! - Serde treats each unit as its bare number
//!
//! # Usage
//! ```
//! use podostemum_core::core_types::units::{Degrees, Grams};
//!
//! let lat = Degrees::new(35.0);
//! assert!((lat.to_radians().sin() - 0.5736).abs() < 1e-4);
//!
//! let live = Grams::new(2.0);
//! assert_eq!(live + Grams::new(1.0), Grams::new(3.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

/// Generates a `f64` newtype with total ordering, arithmetic against itself
/// and scaling by bare `f64`.
macro_rules! scalar_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal, $precision:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            /// Wrap a raw value
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw value
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{:.", $precision, "}", $suffix), self.0)
            }
        }
    };
}

// ============================================================================
// TEMPERATURE
// ============================================================================

scalar_unit!(
    /// Water temperature in degrees Celsius
    Celsius,
    "°C",
    1
);

impl Celsius {
    /// Coldest plausible water/air temperature recorded on Earth
    pub const RECORDED_MIN: Celsius = Celsius(-90.0);

    /// Hottest plausible water/air temperature recorded on Earth
    pub const RECORDED_MAX: Celsius = Celsius(60.0);

    /// Reference temperature for maintenance respiration coefficients
    pub const RESPIRATION_REFERENCE: Celsius = Celsius(25.0);

    /// Whether the temperature lies inside the historically recorded range
    #[inline]
    #[must_use]
    pub fn is_recorded_on_earth(self) -> bool {
        (Self::RECORDED_MIN.0..=Self::RECORDED_MAX.0).contains(&self.0)
    }
}

// ============================================================================
// ANGLES
// ============================================================================

scalar_unit!(
    /// Angle in degrees (latitude, declination for display)
    Degrees,
    "°",
    2
);

scalar_unit!(
    /// Angle in radians
    Radians,
    " rad",
    4
);

impl Degrees {
    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Radians {
    /// Compute sine
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Compute cosine
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

// ============================================================================
// LENGTH, MASS, TIME
// ============================================================================

scalar_unit!(
    /// Water depth in meters
    Meters,
    " m",
    2
);

scalar_unit!(
    /// Tissue biomass in grams (AFDM)
    Grams,
    " g",
    4
);

scalar_unit!(
    /// Duration in hours
    Hours,
    " h",
    2
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_convert_to_radians() {
        let r = Degrees::new(23.45).to_radians();
        assert_relative_eq!(r.value(), 0.409_279_7, epsilon = 1e-7);
        assert_relative_eq!(r.sin(), 0.397_948_6, epsilon = 1e-7);
    }

    #[test]
    fn recorded_temperature_range_is_inclusive() {
        assert!(Celsius::new(60.0).is_recorded_on_earth());
        assert!(Celsius::new(-90.0).is_recorded_on_earth());
        assert!(!Celsius::new(60.5).is_recorded_on_earth());
        assert!(!Celsius::new(f64::NAN).is_recorded_on_earth());
    }

    #[test]
    fn ordering_is_total() {
        let a = Grams::new(1.0);
        let b = Grams::new(2.0);
        assert_eq!(a.max(b), b);
        assert_eq!(Meters::new(0.5).min(Meters::new(0.25)), Meters::new(0.25));
    }

    #[test]
    fn display_uses_unit_suffix() {
        assert_eq!(format!("{}", Celsius::new(14.0)), "14.0°C");
        assert_eq!(format!("{}", Hours::new(12.5)), "12.50 h");
    }

    #[test]
    fn serde_uses_bare_number() {
        let json = serde_json::to_string(&Meters::new(0.3)).unwrap();
        assert_eq!(json, "0.3");
        let back: Meters = serde_json::from_str("1.5").unwrap();
        assert_eq!(back, Meters::new(1.5));
    }
}
