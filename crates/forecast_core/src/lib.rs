//! Financial forecasting and scenario-planning engine
//!
//! This crate turns a stored financial model into a deterministic
//! period-by-period projection and compares scenarios against it.
//! It supports:
//! - Linear and exponential growth curves
//! - Attendance-driven weekly event models (ticket, F&B, merchandise spend)
//! - Fixed, recurring and variable costs, COGS, staffing and marketing allocation
//! - Scenario deltas (pricing, attendance growth, COGS, marketing spend)
//! - Summary metrics, break-even detection and baseline-vs-scenario comparison
//!
//! Every operation is a pure function of its inputs; callers own state.
//!
//! # Example
//!
//! ```ignore
//! use forecast_core::analysis::{compare, summarize};
//! use forecast_core::config::{ForecastConfig, ModelBuilder};
//! use forecast_core::forecast::generate;
//! use forecast_core::model::ScenarioParameterDeltas;
//! use forecast_core::scenario::forecast_scenario;
//!
//! let model = ModelBuilder::weekly_event("Night Market", 12, 250.0)
//!     .ticket_price(10.0)
//!     .fb_spend(6.0)
//!     .attendance_growth(3.0)
//!     .build();
//!
//! let baseline = generate(&model)?;
//! let deltas = ScenarioParameterDeltas { pricing_percent: 20.0, ..Default::default() };
//! let scenario = forecast_scenario(&model, &deltas, &ForecastConfig::default())?;
//! let comparison = compare(&summarize(&baseline), &summarize(&scenario));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod cache;
pub mod cost;
pub mod error;
pub mod forecast;
pub mod growth;
pub mod revenue;
pub mod scenario;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ForecastConfig, ModelBuilder};
pub use error::ForecastError;
