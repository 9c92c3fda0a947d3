//! Identifiers for stored entities
//!
//! Models, scenarios and projects live in an external store that hands out
//! string keys, so every ID wraps a `String`. Marketing channels are keyed the
//! same way because scenario deltas override them by ID.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a project grouping models and scenarios
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

/// Identifier of a stored financial model
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(pub String);

/// Identifier of a stored scenario
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

/// Identifier of a marketing channel inside a model
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

macro_rules! impl_id {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $ty {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

impl_id!(ProjectId, ModelId, ScenarioId, ChannelId);
