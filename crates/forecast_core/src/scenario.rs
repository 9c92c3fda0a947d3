//! Scenario delta application
//!
//! Deltas never mutate the baseline: `apply_deltas` returns an adjusted copy of
//! the model which then runs through the normal generator. Adjustments:
//! - `pricingPercent` scales ticket, F&B and merchandise spend
//! - `attendanceGrowthPercent` adds percentage points to attendance growth
//! - `cogsMultiplier` scales both COGS rates and staff cost per person
//! - `marketingSpendPercent` scales channel budgets or the high-level budget,
//!   with `marketingSpendByChannel` taking precedence per channel, along with
//!   listed recurring costs in the Marketing category
//!
//! The zero delta set reproduces the baseline exactly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::{compare, summarize};
use crate::config::ForecastConfig;
use crate::cost::CostBucket;
use crate::error::{ForecastError, Result};
use crate::forecast::generate_with_config;
use crate::model::{
    Assumptions, CostType, DeltaField, FinancialModel, ForecastPeriodData, MarketingSetup, Scenario,
    ScenarioComparisonMetrics, ScenarioId, ScenarioParameterDeltas, ScenarioSummaryMetrics,
};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Attendance growth points suggested per percent of extra marketing spend
pub const MARKETING_ATTENDANCE_RESPONSE: f64 = 0.05;
/// Attendance growth points suggested per percent of price increase (subtracted)
pub const PRICE_ATTENDANCE_RESPONSE: f64 = 0.1;

/// Scale `value` by a relative percentage
fn scale(value: f64, percent: f64) -> f64 {
    value * (1.0 + percent / 100.0)
}

/// Adjusted copy of `model` with `deltas` applied
#[must_use]
pub fn apply_deltas(model: &FinancialModel, deltas: &ScenarioParameterDeltas) -> FinancialModel {
    let mut adjusted = model.clone();
    if let Some(assumptions) = adjusted.assumptions.as_mut() {
        adjust_assumptions(assumptions, deltas);
    }
    adjusted
}

fn adjust_assumptions(assumptions: &mut Assumptions, deltas: &ScenarioParameterDeltas) {
    if let Some(event) = assumptions.weekly_event_mut() {
        let spend = &mut event.per_customer;
        spend.ticket_price = scale(spend.ticket_price, deltas.pricing_percent);
        spend.fb_spend = scale(spend.fb_spend, deltas.pricing_percent);
        spend.merchandise_spend = scale(spend.merchandise_spend, deltas.pricing_percent);

        event.growth.attendance_growth_rate += deltas.attendance_growth_percent;

        let costs = &mut event.costs;
        costs.fb_cogs_percent = scale(costs.fb_cogs_percent, deltas.cogs_multiplier);
        costs.merchandise_cogs_percent =
            scale(costs.merchandise_cogs_percent, deltas.cogs_multiplier);
        costs.staff_cost_per_person = scale(costs.staff_cost_per_person, deltas.cogs_multiplier);
    }

    match assumptions.marketing.as_mut() {
        Some(MarketingSetup::Channels(allocation)) => {
            for channel in &mut allocation.channels {
                channel.weekly_budget =
                    scale(channel.weekly_budget, deltas.channel_percent(&channel.id));
            }
        }
        Some(MarketingSetup::HighLevel(budget)) => {
            budget.total_budget = scale(budget.total_budget, deltas.marketing_spend_percent);
        }
        None => {}
    }

    if let Some(costs) = assumptions.costs.as_mut() {
        for cost in costs
            .iter_mut()
            .filter(|c| c.kind != CostType::Fixed && CostBucket::of(c) == CostBucket::Marketing)
        {
            cost.value = scale(cost.value, deltas.marketing_spend_percent);
        }
    }
}

/// Generate the series of `model` under `deltas`
pub fn forecast_scenario(
    model: &FinancialModel,
    deltas: &ScenarioParameterDeltas,
    config: &ForecastConfig,
) -> Result<Vec<ForecastPeriodData>> {
    generate_with_config(&apply_deltas(model, deltas), config)
}

// ============================================================================
// Related-change suggestions
// ============================================================================

/// An advisory change to one delta field. Nothing is applied until the caller
/// passes it to `ScenarioParameterDeltas::accept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedChange {
    pub field: DeltaField,
    pub current: f64,
    pub proposed: f64,
    pub reason: String,
}

/// Propose changes to fields related to `changed`.
///
/// Marketing spend and pricing both move attendance growth. A channel edit is
/// judged by that channel's effective percent. Fields in `locked`
/// (typically the ones the user set explicitly) are never proposed.
#[must_use]
pub fn suggest_related_changes(
    deltas: &ScenarioParameterDeltas,
    changed: &DeltaField,
    locked: &BTreeSet<DeltaField>,
) -> Vec<RelatedChange> {
    let mut suggestions = Vec::new();

    let moves_attendance = matches!(
        changed,
        DeltaField::MarketingSpend | DeltaField::MarketingChannel(_) | DeltaField::Pricing
    );
    if moves_attendance && !locked.contains(&DeltaField::AttendanceGrowth) {
        let marketing_percent = match changed {
            DeltaField::MarketingChannel(id) => deltas.channel_percent(id),
            _ => deltas.marketing_spend_percent,
        };
        let proposed = round2(
            marketing_percent * MARKETING_ATTENDANCE_RESPONSE
                - deltas.pricing_percent * PRICE_ATTENDANCE_RESPONSE,
        );
        let current = deltas.attendance_growth_percent;
        if proposed != current {
            suggestions.push(RelatedChange {
                field: DeltaField::AttendanceGrowth,
                current,
                proposed,
                reason: format!(
                    "marketing {:+.1}% and pricing {:+.1}% usually move attendance growth by {:+.2} points",
                    marketing_percent, deltas.pricing_percent, proposed
                ),
            });
        }
    }

    suggestions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ScenarioParameterDeltas {
    /// Apply one suggestion. This is the only path by which a suggestion changes a field.
    pub fn accept(&mut self, change: &RelatedChange) {
        self.set(change.field.clone(), change.proposed);
    }
}

// ============================================================================
// Batch evaluation
// ============================================================================

/// A scenario's series together with its metrics against the baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub series: Vec<ForecastPeriodData>,
    pub summary: ScenarioSummaryMetrics,
    pub comparison: ScenarioComparisonMetrics,
}

/// Baseline plus every evaluated scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvaluation {
    pub baseline: Vec<ForecastPeriodData>,
    pub baseline_summary: ScenarioSummaryMetrics,
    pub scenarios: Vec<ScenarioOutcome>,
}

/// Evaluate the baseline once and each scenario against it, preserving scenario order
pub fn forecast_scenarios(
    model: &FinancialModel,
    scenarios: &[Scenario],
    config: &ForecastConfig,
) -> Result<ScenarioEvaluation> {
    if let Some(foreign) = scenarios.iter().find(|s| s.base_model_id != model.id) {
        return Err(ForecastError::ScenarioMismatch {
            scenario: foreign.id.clone(),
            expected: foreign.base_model_id.clone(),
            found: model.id.clone(),
        });
    }

    let baseline = generate_with_config(model, config)?;
    let baseline_summary = summarize(&baseline);

    let evaluate = |scenario: &Scenario| -> Result<ScenarioOutcome> {
        let series = forecast_scenario(model, &scenario.parameters, config)?;
        let summary = summarize(&series);
        let comparison = compare(&baseline_summary, &summary);
        Ok(ScenarioOutcome {
            scenario_id: scenario.id.clone(),
            name: scenario.name.clone(),
            series,
            summary,
            comparison,
        })
    };

    #[cfg(feature = "parallel")]
    let outcomes: Result<Vec<_>> = scenarios.par_iter().map(evaluate).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Result<Vec<_>> = scenarios.iter().map(evaluate).collect();

    tracing::debug!(
        model = %model.id,
        scenarios = scenarios.len(),
        "evaluated scenarios"
    );

    Ok(ScenarioEvaluation {
        baseline,
        baseline_summary,
        scenarios: outcomes?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_identity() {
        assert_eq!(scale(123.456, 0.0), 123.456);
        assert_eq!(scale(10.0, 20.0), 12.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(-0.5), -0.5);
    }
}
