//! Light pipeline: sun position, surface PAR, attenuation to the tissue

pub mod attenuation;
pub mod solar_geometry;
pub mod surface;

pub use attenuation::{attenuate, attenuate_profile, AttenuationParams};
pub use solar_geometry::{declination, solar_geometry, PolarPolicy, SolarDay, SolarGeometry};
pub use surface::{surface_par, surface_par_from_geometry};
