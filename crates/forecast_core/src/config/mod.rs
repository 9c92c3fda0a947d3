//! Engine configuration
//!
//! `ForecastConfig` carries the knobs that are not part of a stored model:
//! the fallback horizon and the damping applied to cost growth. Every field has
//! a serde default so partial config files load.
//!
//! # Builder DSL
//!
//! ```ignore
//! use forecast_core::config::ModelBuilder;
//! use forecast_core::model::BudgetApplication;
//!
//! let model = ModelBuilder::weekly_event("Night Market", 26, 400.0)
//!     .ticket_price(12.0)
//!     .fb_spend(8.0)
//!     .fb_cogs_percent(35.0)
//!     .staff(6, 180.0)
//!     .attendance_growth(2.0)
//!     .high_level_marketing(5_000.0, BudgetApplication::SpreadCustom, Some(8))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod builder;

pub use builder::ModelBuilder;

fn default_horizon() -> u32 {
    12
}

fn default_cost_growth_ratio() -> f64 {
    0.7
}

/// Settings applied to every forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Periods to project when the model does not state its own horizon
    #[serde(default = "default_horizon")]
    pub default_horizon: u32,

    /// Share of the revenue growth rate applied to recurring and variable costs
    /// that have no rate of their own
    #[serde(default = "default_cost_growth_ratio")]
    pub cost_growth_ratio: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon: default_horizon(),
            cost_growth_ratio: default_cost_growth_ratio(),
        }
    }
}

impl ForecastConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant with a different fallback horizon
    #[must_use]
    pub fn with_default_horizon(mut self, periods: u32) -> Self {
        self.default_horizon = periods;
        self
    }

    #[must_use]
    pub fn with_cost_growth_ratio(mut self, ratio: f64) -> Self {
        self.cost_growth_ratio = ratio;
        self
    }
}
