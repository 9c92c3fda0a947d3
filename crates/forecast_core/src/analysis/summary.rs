//! Aggregate metrics of a single forecast series.

use crate::model::{
    BreakEvenPeriod, CostBreakdown, ForecastPeriodData, ScenarioSummaryMetrics, StreamAmount,
};

/// Reduce a series to totals, margin, break-even and per-period averages.
///
/// Never divides by zero: an empty series or zero revenue yields 0 for the
/// affected ratios.
#[must_use]
pub fn summarize(series: &[ForecastPeriodData]) -> ScenarioSummaryMetrics {
    let mut total_revenue = 0.0;
    let mut total_costs = 0.0;
    let mut total_profit = 0.0;
    let mut costs_by_category = CostBreakdown::default();
    let mut revenue_by_stream: Vec<StreamAmount> = Vec::new();

    for point in series {
        total_revenue += point.revenue;
        total_costs += point.cost;
        total_profit += point.profit;
        costs_by_category.accumulate(&point.cost_breakdown);

        for stream in point.revenue_breakdown.iter() {
            match revenue_by_stream.iter_mut().find(|s| s.name == stream.name) {
                Some(total) => total.amount += stream.amount,
                None => revenue_by_stream.push(stream.clone()),
            }
        }
    }

    let period_count = series.len();
    let average = |total: f64| {
        if period_count == 0 {
            0.0
        } else {
            total / period_count as f64
        }
    };

    ScenarioSummaryMetrics {
        total_revenue,
        total_costs,
        total_profit,
        profit_margin: profit_margin(total_profit, total_revenue),
        break_even_period: break_even_period(series),
        average_weekly_revenue: average(total_revenue),
        average_weekly_costs: average(total_costs),
        average_weekly_profit: average(total_profit),
        period_count,
        revenue_by_stream,
        costs_by_category,
    }
}

/// Profit as a percentage of revenue; 0 unless revenue is positive
pub fn profit_margin(profit: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        profit / revenue * 100.0
    } else {
        0.0
    }
}

/// First index whose cumulative profit is non-negative, even if it dips again later
pub fn break_even_period(series: &[ForecastPeriodData]) -> BreakEvenPeriod {
    series
        .iter()
        .position(|p| p.cumulative_profit >= 0.0)
        .map_or_else(BreakEvenPeriod::not_reached, |index| BreakEvenPeriod {
            index: Some(index),
            label: series[index].point.clone(),
        })
}
