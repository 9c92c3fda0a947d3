//! Integration tests for the forecast engine
//!
//! Tests are organized by topic:
//! - `generator` - Series generation, cumulative and profit identities
//! - `weekly_event` - Attendance-driven models end to end
//! - `scenarios` - Delta application, suggestions and batch evaluation
//! - `metrics` - Summary and comparison metrics
//! - `builder_dsl` - Fluent model construction and file round trips

mod builder_dsl;
