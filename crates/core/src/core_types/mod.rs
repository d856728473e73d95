//! Core types and utilities

pub mod par_profile;
pub mod units;

pub use par_profile::{ParProfile, TimeOfDay, GAUSS_ABSCISSAE, GAUSS_WEIGHTS};
pub use units::*;
