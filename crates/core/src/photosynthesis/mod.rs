//! Carbon gain and loss for a single tissue

pub mod assimilation;
pub mod limitation;
pub mod respiration;

pub use assimilation::{gross_assimilation, GrossAssimilation, PhotoParams, CO2_TO_GLUCOSE};
pub use limitation::{monod, Limitation, ResourceLimit, TemperatureResponse};
pub use respiration::{daily_respiration, RespirationParams};
