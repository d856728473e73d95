//! Podostemum Core Library
//!
//! Daily light and carbon budget for submerged river macrophytes, built
//! around the riverweed *Podostemum ceratophyllum*. Every operation is a
//! pure function of its inputs, evaluated once per (day, location, tissue).
//!
//! ## Pipeline
//!
//! - Solar geometry: declination and daylength from Julian day and latitude
//! - Surface light: PAR at three Gaussian times of day
//! - Attenuation: Beer-Lambert extinction to the tissue, with optional
//!   canopy self-shading
//! - Gross assimilation: Monod/Hill limited photosynthesis converted to
//!   biomass
//! - Maintenance respiration: Q10-scaled biomass loss
//!
//! Net growth is `gross - respiration`; [`growth`] composes the pipeline per
//! organ and per plant, and [`batch`] evaluates many tuples in parallel.
//!
//! ## Errors and warnings
//!
//! Physically impossible inputs fail with [`DomainError`]. Unrealistic but
//! possible inputs succeed and carry a [`Warning`] in the returned
//! [`Evaluated`] value; warnings are also logged through `tracing`.
//!
//! ```
//! use podostemum_core::{surface_par, Degrees, PolarPolicy, SolarDay};
//!
//! let par = surface_par(SolarDay::new(120.0, Degrees::new(25.0)), PolarPolicy::Clamp)
//!     .unwrap()
//!     .value;
//! assert!((par.near_noon() - 2879.42).abs() < 0.01);
//! ```

// Core types and utilities
pub mod core_types;
pub mod diagnostics;
pub mod error;

// Model components
pub mod light;
pub mod photosynthesis;

// Composition
pub mod batch;
pub mod config;
pub mod growth;

// Re-export core types
pub use core_types::{Celsius, Degrees, Grams, Hours, Meters, ParProfile, TimeOfDay};
pub use diagnostics::{Diagnostics, Evaluated, Warning};
pub use error::{DomainError, ModelResult};

// Re-export the five operations and their parameter records
pub use light::{
    attenuate, attenuate_profile, solar_geometry, surface_par, AttenuationParams, PolarPolicy,
    SolarDay, SolarGeometry,
};
pub use photosynthesis::{
    daily_respiration, gross_assimilation, GrossAssimilation, Limitation, PhotoParams,
    ResourceLimit, RespirationParams, TemperatureResponse,
};

// Re-export composition types
pub use batch::{evaluate_days, evaluate_many, BatchJob, DayReport};
pub use config::{ConfigError, ScenarioConfig, SiteConfig};
pub use growth::{
    apply_daily_update, evaluate_organ, evaluate_plant, GrowthModel, OrganBudget, OrganParams,
    PlantBudget, SiteLight, SizeChange,
};
