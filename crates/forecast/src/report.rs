//! Text and JSON rendering of forecast results

use std::fmt::Write;

use forecast_core::model::{
    BreakEvenChange, ForecastPeriodData, ScenarioComparisonMetrics, ScenarioSummaryMetrics,
};
use forecast_core::scenario::ScenarioEvaluation;

use crate::util::{format_currency, format_currency_short, format_percent};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render a baseline-plus-scenarios evaluation
pub fn render(
    evaluation: &ScenarioEvaluation,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(evaluation),
        OutputFormat::Table => Ok(render_table(evaluation)),
    }
}

fn render_table(evaluation: &ScenarioEvaluation) -> String {
    let mut out = String::new();

    out.push_str("Baseline forecast\n");
    out.push_str(&series_table(&evaluation.baseline));
    out.push('\n');
    out.push_str(&summary_block(&evaluation.baseline_summary));

    if !evaluation.scenarios.is_empty() {
        out.push_str("\nScenarios vs baseline\n");
        let _ = writeln!(
            out,
            "{:<24} {:>14} {:>9} {:>14} {:>14} {:>9} {:>12}",
            "Scenario", "Revenue", "Rev %", "Costs", "Profit", "Margin", "Break-even"
        );
        for outcome in &evaluation.scenarios {
            let _ = writeln!(
                out,
                "{}",
                comparison_row(&outcome.name, &outcome.comparison)
            );
        }
    }

    out
}

/// One row per period
pub fn series_table(series: &[ForecastPeriodData]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>14} {:>14} {:>14} {:>16}",
        "Period", "Revenue", "Cost", "Profit", "Cumulative"
    );
    for point in series {
        let _ = writeln!(
            out,
            "{:<12} {:>14} {:>14} {:>14} {:>16}",
            point.point,
            format_currency_short(point.revenue),
            format_currency_short(point.cost),
            format_currency_short(point.profit),
            format_currency_short(point.cumulative_profit),
        );
    }
    out
}

pub fn summary_block(summary: &ScenarioSummaryMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total revenue     {}", format_currency(summary.total_revenue));
    let _ = writeln!(out, "Total costs       {}", format_currency(summary.total_costs));
    let _ = writeln!(out, "Total profit      {}", format_currency(summary.total_profit));
    let _ = writeln!(
        out,
        "Profit margin     {}",
        format_percent(summary.profit_margin, false)
    );
    let _ = writeln!(out, "Break-even        {}", summary.break_even_period.label);
    let _ = writeln!(
        out,
        "Avg profit/period {}",
        format_currency(summary.average_weekly_profit)
    );

    if !summary.revenue_by_stream.is_empty() {
        out.push_str("Revenue by stream\n");
        for stream in &summary.revenue_by_stream {
            let _ = writeln!(out, "  {:<22} {}", stream.name, format_currency(stream.amount));
        }
    }

    out.push_str("Costs by category\n");
    for (label, amount) in summary.costs_by_category.categories() {
        if amount != 0.0 {
            let _ = writeln!(out, "  {label:<22} {}", format_currency(amount));
        }
    }
    out
}

fn comparison_row(name: &str, comparison: &ScenarioComparisonMetrics) -> String {
    format!(
        "{:<24} {:>14} {:>9} {:>14} {:>14} {:>9} {:>12}",
        name,
        signed_currency(comparison.revenue_delta),
        format_percent(comparison.revenue_delta_percent, true),
        signed_currency(comparison.costs_delta),
        signed_currency(comparison.profit_delta),
        format_percent(comparison.margin_delta, true),
        break_even_text(comparison),
    )
}

fn signed_currency(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_currency_short(value))
    } else {
        format_currency_short(value)
    }
}

/// Describe break-even movement, e.g. "2 sooner"
pub fn break_even_text(comparison: &ScenarioComparisonMetrics) -> String {
    match (comparison.break_even_change, comparison.break_even_delta) {
        (BreakEvenChange::NeverReached, _) | (_, None) => "never".to_string(),
        (BreakEvenChange::Lost { .. }, _) => "lost".to_string(),
        (BreakEvenChange::Reached { .. }, _) => "reached".to_string(),
        (BreakEvenChange::Shifted { .. }, Some(0)) => "same".to_string(),
        (BreakEvenChange::Shifted { .. }, Some(delta)) if delta < 0 => {
            format!("{} sooner", -delta)
        }
        (BreakEvenChange::Shifted { .. }, Some(delta)) => format!("{delta} later"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::ForecastConfig;
    use forecast_core::config::ModelBuilder;
    use forecast_core::model::{CostType, Scenario, ScenarioId, ScenarioParameterDeltas};
    use forecast_core::scenario::forecast_scenarios;

    fn evaluation() -> ScenarioEvaluation {
        let model = ModelBuilder::weekly_event("Night Market", 6, 100.0)
            .ticket_price(10.0)
            .fb_spend(5.0)
            .cost("Stage", 3_000.0, CostType::Fixed)
            .build();
        let scenario = Scenario::new(
            ScenarioId::new("premium"),
            "Premium pricing",
            model.id.clone(),
            model.project_id.clone(),
        )
        .with_parameters(ScenarioParameterDeltas {
            pricing_percent: 20.0,
            ..Default::default()
        });

        forecast_scenarios(&model, &[scenario], &ForecastConfig::default()).unwrap()
    }

    #[test]
    fn test_table_lists_every_period_and_scenario() {
        let table = render(&evaluation(), OutputFormat::Table).unwrap();

        assert!(table.contains("Week 1"));
        assert!(table.contains("Week 6"));
        assert!(table.contains("Ticket Sales"));
        assert!(table.contains("Fixed/Setup"));
        assert!(table.contains("Premium pricing"));
        assert!(table.contains("+20.0%"));
    }

    #[test]
    fn test_json_is_the_evaluation() {
        let json = render(&evaluation(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["baseline"].as_array().unwrap().len(), 6);
        assert_eq!(value["scenarios"][0]["scenarioId"], "premium");
        assert!(value["scenarios"][0]["comparison"]["revenueDelta"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_break_even_text() {
        let evaluation = evaluation();
        let comparison = &evaluation.scenarios[0].comparison;

        // Both break even in week 2: baseline -1500 then 0, premium -1200 then 600
        assert_eq!(break_even_text(comparison), "same");

        let mut sooner = comparison.clone();
        sooner.break_even_change = BreakEvenChange::Shifted {
            baseline: 3,
            scenario: 1,
        };
        sooner.break_even_delta = Some(-2);
        assert_eq!(break_even_text(&sooner), "2 sooner");

        sooner.break_even_change = BreakEvenChange::NeverReached;
        sooner.break_even_delta = None;
        assert_eq!(break_even_text(&sooner), "never");
    }
}
