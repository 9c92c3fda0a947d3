//! Command-line front end for the forecast engine
//!
//! Loads a project file (one model plus its scenarios), runs the baseline and
//! every selected scenario through `forecast_core`, and renders the results as
//! text tables or JSON.

pub mod logging;
pub mod report;
pub mod storage;
pub mod util;

pub use logging::init_logging;
pub use report::{OutputFormat, render};
pub use storage::{ProjectFile, StorageError, load_project, save_project};
