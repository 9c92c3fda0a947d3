//! Baseline-vs-scenario comparison.
//!
//! Every delta is scenario minus baseline. Percent deltas divide by the
//! baseline value and are defined as 0 when the baseline is 0.
//!
//! Break-even delta uses one signed rule: a series that never breaks even is
//! treated as breaking even at index `period_count`, and the delta is
//! `scenario_index - baseline_index`. Negative therefore always means the
//! scenario breaks even sooner, whether or not the baseline ever does.

use crate::model::{BreakEvenChange, ScenarioComparisonMetrics, ScenarioSummaryMetrics};

#[must_use]
pub fn compare(
    baseline: &ScenarioSummaryMetrics,
    scenario: &ScenarioSummaryMetrics,
) -> ScenarioComparisonMetrics {
    let break_even_change = break_even_change(baseline, scenario);

    ScenarioComparisonMetrics {
        revenue_delta: scenario.total_revenue - baseline.total_revenue,
        revenue_delta_percent: percent_delta(baseline.total_revenue, scenario.total_revenue),
        costs_delta: scenario.total_costs - baseline.total_costs,
        costs_delta_percent: percent_delta(baseline.total_costs, scenario.total_costs),
        profit_delta: scenario.total_profit - baseline.total_profit,
        profit_delta_percent: percent_delta(baseline.total_profit, scenario.total_profit),
        margin_delta: scenario.profit_margin - baseline.profit_margin,
        break_even_delta: break_even_delta(
            break_even_change,
            baseline.period_count,
            scenario.period_count,
        ),
        break_even_change,
    }
}

/// `(scenario - baseline) / baseline * 100`, or 0 when the baseline is 0
pub fn percent_delta(baseline: f64, scenario: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (scenario - baseline) / baseline * 100.0
    }
}

fn break_even_change(
    baseline: &ScenarioSummaryMetrics,
    scenario: &ScenarioSummaryMetrics,
) -> BreakEvenChange {
    match (
        baseline.break_even_period.index,
        scenario.break_even_period.index,
    ) {
        (Some(baseline), Some(scenario)) => BreakEvenChange::Shifted { baseline, scenario },
        (None, Some(scenario)) => BreakEvenChange::Reached { scenario },
        (Some(baseline), None) => BreakEvenChange::Lost { baseline },
        (None, None) => BreakEvenChange::NeverReached,
    }
}

fn break_even_delta(
    change: BreakEvenChange,
    baseline_periods: usize,
    scenario_periods: usize,
) -> Option<i64> {
    let (baseline, scenario) = match change {
        BreakEvenChange::Shifted { baseline, scenario } => (baseline, scenario),
        BreakEvenChange::Reached { scenario } => (baseline_periods, scenario),
        BreakEvenChange::Lost { baseline } => (baseline, scenario_periods),
        BreakEvenChange::NeverReached => return None,
    };
    Some(scenario as i64 - baseline as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_delta_zero_baseline() {
        assert_eq!(percent_delta(0.0, 500.0), 0.0);
        assert_eq!(percent_delta(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percent_delta() {
        assert_eq!(percent_delta(1000.0, 1200.0), 20.0);
        assert_eq!(percent_delta(200.0, 150.0), -25.0);
    }

    #[test]
    fn test_break_even_delta_rule() {
        let shifted = BreakEvenChange::Shifted {
            baseline: 6,
            scenario: 4,
        };
        assert_eq!(break_even_delta(shifted, 12, 12), Some(-2));

        let reached = BreakEvenChange::Reached { scenario: 9 };
        assert_eq!(break_even_delta(reached, 12, 12), Some(-3));

        let lost = BreakEvenChange::Lost { baseline: 10 };
        assert_eq!(break_even_delta(lost, 12, 12), Some(2));

        assert_eq!(break_even_delta(BreakEvenChange::NeverReached, 12, 12), None);
    }
}
