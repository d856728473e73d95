//! Three-point daylight sampling
//!
//! Daily light integrals are approximated with three-point Gauss-Legendre
//! quadrature over the afternoon half of the photoperiod. The three sample
//! times are fixed, so a profile is a fixed-size array with named accessors
//! rather than a general collection.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Gaussian abscissae on [0, 1], ascending (near noon first)
pub const GAUSS_ABSCISSAE: [f64; 3] = [0.1127, 0.5, 0.8873];

/// Gaussian weights matching [`GAUSS_ABSCISSAE`]; they sum to 1
pub const GAUSS_WEIGHTS: [f64; 3] = [0.2778, 0.4444, 0.2778];

/// One of the three representative times of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// Shortly after solar noon (abscissa 0.1127)
    NearNoon,
    /// Halfway between noon and sunset (abscissa 0.5)
    MidAfternoon,
    /// Shortly before sunset (abscissa 0.8873)
    LateAfternoon,
}

impl TimeOfDay {
    /// All sample times in quadrature order
    pub const ALL: [TimeOfDay; 3] = [
        TimeOfDay::NearNoon,
        TimeOfDay::MidAfternoon,
        TimeOfDay::LateAfternoon,
    ];

    /// Position in the quadrature arrays
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TimeOfDay::NearNoon => 0,
            TimeOfDay::MidAfternoon => 1,
            TimeOfDay::LateAfternoon => 2,
        }
    }

    /// Gaussian abscissa for this sample
    #[inline]
    pub const fn abscissa(self) -> f64 {
        GAUSS_ABSCISSAE[self.index()]
    }

    /// Gaussian weight for this sample
    #[inline]
    pub const fn weight(self) -> f64 {
        GAUSS_WEIGHTS[self.index()]
    }
}

/// PAR (µE) at the three representative times of day
///
/// Produced by [`crate::light::surface_par`], transformed by
/// [`crate::light::attenuate_profile`] and consumed by
/// [`crate::photosynthesis::gross_assimilation`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParProfile([f64; 3]);

impl ParProfile {
    /// Build a profile from values in quadrature order
    #[inline]
    #[must_use]
    pub const fn new(values: [f64; 3]) -> Self {
        ParProfile(values)
    }

    /// Profile with the same PAR at every sample time
    #[inline]
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        ParProfile([value; 3])
    }

    /// PAR shortly after solar noon
    #[inline]
    pub fn near_noon(&self) -> f64 {
        self.0[0]
    }

    /// PAR halfway through the afternoon
    #[inline]
    pub fn mid_afternoon(&self) -> f64 {
        self.0[1]
    }

    /// PAR shortly before sunset
    #[inline]
    pub fn late_afternoon(&self) -> f64 {
        self.0[2]
    }

    /// PAR at a given sample time
    #[inline]
    pub fn at(&self, time: TimeOfDay) -> f64 {
        self.0[time.index()]
    }

    /// Raw values in quadrature order
    #[inline]
    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    /// Iterate `(time, par)` pairs in quadrature order
    pub fn iter(&self) -> impl Iterator<Item = (TimeOfDay, f64)> + '_ {
        TimeOfDay::ALL.iter().map(move |&t| (t, self.at(t)))
    }

    /// Apply `f` to every sample
    #[must_use]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        ParProfile(self.0.map(&mut f))
    }

    /// Quadrature-weighted mean of `f(par)` over the three samples
    pub fn weighted_mean(&self, mut f: impl FnMut(f64) -> f64) -> f64 {
        self.iter().map(|(t, par)| f(par) * t.weight()).sum()
    }
}

impl Index<TimeOfDay> for ParProfile {
    type Output = f64;
    fn index(&self, time: TimeOfDay) -> &f64 {
        &self.0[time.index()]
    }
}

impl From<[f64; 3]> for ParProfile {
    fn from(values: [f64; 3]) -> Self {
        ParProfile(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = GAUSS_WEIGHTS.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn abscissae_are_symmetric_about_half() {
        assert_relative_eq!(GAUSS_ABSCISSAE[0] + GAUSS_ABSCISSAE[2], 1.0, epsilon = 1e-12);
        assert_eq!(TimeOfDay::MidAfternoon.abscissa(), 0.5);
    }

    #[test]
    fn named_accessors_follow_quadrature_order() {
        let p = ParProfile::new([3.0, 2.0, 1.0]);
        assert_eq!(p.near_noon(), 3.0);
        assert_eq!(p.mid_afternoon(), 2.0);
        assert_eq!(p.late_afternoon(), 1.0);
        assert_eq!(p[TimeOfDay::MidAfternoon], 2.0);
    }

    #[test]
    fn weighted_mean_of_uniform_profile_is_the_value() {
        let p = ParProfile::uniform(150.0);
        assert_relative_eq!(p.weighted_mean(|x| x), 150.0, epsilon = 1e-6);
    }

    #[test]
    fn map_is_elementwise() {
        let p = ParProfile::new([1.0, 2.0, 4.0]).map(|x| x * 0.5);
        assert_eq!(p.values(), [0.5, 1.0, 2.0]);
    }
}
