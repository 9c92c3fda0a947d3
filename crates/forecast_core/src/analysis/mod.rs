//! Summary and comparison metrics.
//!
//! Metrics are derived on demand from a `ForecastPeriodData` series and are
//! never a source of truth:
//!
//! ```ignore
//! use forecast_core::analysis::{compare, summarize};
//! use forecast_core::forecast::generate;
//! use forecast_core::scenario::forecast_scenario;
//!
//! let baseline = summarize(&generate(&model)?);
//! let scenario = summarize(&forecast_scenario(&model, &deltas, &config)?);
//! let comparison = compare(&baseline, &scenario);
//! ```

mod comparison;
mod summary;

pub use comparison::*;
pub use summary::*;
