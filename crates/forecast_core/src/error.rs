use std::fmt;

use crate::model::{ModelId, ScenarioId};

/// Errors raised before or while generating a forecast
#[derive(Debug, Clone)]
pub enum ForecastError {
    /// Required assumption fields are absent; callers render a fallback state
    IncompleteModel { missing: Vec<&'static str> },
    /// Inputs are present but unusable (zero-length horizon, non-finite values)
    InvalidModel(String),
    /// A calendar date for a period could not be computed
    DateOutOfRange(jiff::Error),
    /// A scenario was evaluated against a model it was not created from
    ScenarioMismatch {
        scenario: ScenarioId,
        expected: ModelId,
        found: ModelId,
    },
}

impl ForecastError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ForecastError::IncompleteModel { .. })
    }
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::IncompleteModel { missing } => {
                write!(f, "incomplete model: missing {}", missing.join(", "))
            }
            ForecastError::InvalidModel(msg) => write!(f, "invalid model: {msg}"),
            ForecastError::DateOutOfRange(e) => write!(f, "period date out of range: {e}"),
            ForecastError::ScenarioMismatch {
                scenario,
                expected,
                found,
            } => write!(
                f,
                "scenario {scenario} is based on model {expected}, not {found}"
            ),
        }
    }
}

impl std::error::Error for ForecastError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForecastError::DateOutOfRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jiff::Error> for ForecastError {
    fn from(err: jiff::Error) -> Self {
        ForecastError::DateOutOfRange(err)
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;
