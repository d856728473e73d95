//! Composing the carbon budget into daily plant growth

pub mod budget;
pub mod update;

pub use budget::{evaluate_organ, evaluate_plant, OrganBudget, OrganParams, PlantBudget, SiteLight};
pub use update::{apply_daily_update, GrowthModel, SizeChange};
