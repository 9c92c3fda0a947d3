//! Scenario definitions
//!
//! A scenario is a baseline model reference plus a set of relative parameter
//! deltas. The zero delta set is neutral: it reproduces the baseline exactly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{ChannelId, ModelId, ProjectId, ScenarioId};

/// Relative adjustments applied to a baseline model.
///
/// Every field is a percentage; 0 means "no change".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameterDeltas {
    #[serde(default)]
    pub marketing_spend_percent: f64,
    /// Per-channel percentages that replace `marketing_spend_percent` for that channel
    #[serde(default)]
    pub marketing_spend_by_channel: BTreeMap<ChannelId, f64>,
    #[serde(default)]
    pub pricing_percent: f64,
    /// Percentage points added to the baseline attendance growth rate
    #[serde(default)]
    pub attendance_growth_percent: f64,
    /// Percentage adjustment to COGS rates and staff cost per person
    #[serde(default)]
    pub cogs_multiplier: f64,
}

/// Addresses a single field of `ScenarioParameterDeltas`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeltaField {
    MarketingSpend,
    MarketingChannel(ChannelId),
    Pricing,
    AttendanceGrowth,
    Cogs,
}

impl ScenarioParameterDeltas {
    /// All-neutral delta set
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.marketing_spend_percent == 0.0
            && self.marketing_spend_by_channel.values().all(|v| *v == 0.0)
            && self.pricing_percent == 0.0
            && self.attendance_growth_percent == 0.0
            && self.cogs_multiplier == 0.0
    }

    /// Current value of a field; an unset channel override reads as 0
    pub fn get(&self, field: &DeltaField) -> f64 {
        match field {
            DeltaField::MarketingSpend => self.marketing_spend_percent,
            DeltaField::MarketingChannel(id) => self
                .marketing_spend_by_channel
                .get(id)
                .copied()
                .unwrap_or(0.0),
            DeltaField::Pricing => self.pricing_percent,
            DeltaField::AttendanceGrowth => self.attendance_growth_percent,
            DeltaField::Cogs => self.cogs_multiplier,
        }
    }

    /// Set exactly one field, leaving every other field untouched
    pub fn set(&mut self, field: DeltaField, value: f64) {
        match field {
            DeltaField::MarketingSpend => self.marketing_spend_percent = value,
            DeltaField::MarketingChannel(id) => {
                self.marketing_spend_by_channel.insert(id, value);
            }
            DeltaField::Pricing => self.pricing_percent = value,
            DeltaField::AttendanceGrowth => self.attendance_growth_percent = value,
            DeltaField::Cogs => self.cogs_multiplier = value,
        }
    }

    /// Drop a per-channel override so the channel follows the overall percentage again
    pub fn clear_channel_override(&mut self, id: &ChannelId) -> Option<f64> {
        self.marketing_spend_by_channel.remove(id)
    }

    /// Effective marketing percentage for one channel
    pub fn channel_percent(&self, id: &ChannelId) -> f64 {
        self.marketing_spend_by_channel
            .get(id)
            .copied()
            .unwrap_or(self.marketing_spend_percent)
    }
}

/// A named what-if variant of a base model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base_model_id: ModelId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub parameters: ScenarioParameterDeltas,
}

impl Scenario {
    /// Create a scenario with all-zero deltas
    pub fn new(
        id: ScenarioId,
        name: impl Into<String>,
        base_model_id: ModelId,
        project_id: ProjectId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            base_model_id,
            project_id,
            parameters: ScenarioParameterDeltas::zero(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: ScenarioParameterDeltas) -> Self {
        self.parameters = parameters;
        self
    }
}
