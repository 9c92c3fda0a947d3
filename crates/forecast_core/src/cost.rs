//! Per-period cost calculation
//!
//! Costs of a period are bucketed into COGS, marketing, fixed/setup, other
//! recurring and staffing. COGS is tied to the same period's F&B and
//! merchandise revenue, so revenue for period `p` must be known first.
//!
//! Fixed and setup costs land in period 1. When an event model spreads its
//! setup costs, the fixed amount is divided evenly across every period of the
//! horizon, period 1 included, so the spread total equals the unspread total.

use crate::config::ForecastConfig;
use crate::growth::growth_factor;
use crate::model::{
    BudgetApplication, CompleteAssumptions, CostBreakdown, CostItem, CostType, HighLevelBudget,
    MarketingSetup, PeriodUnit, RevenueBreakdown, SpendCategory,
};

/// Cost incurred in one period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodCost {
    pub total: f64,
    pub by_category: CostBreakdown,
}

/// Cost of a 1-indexed period given that period's revenue breakdown
pub fn cost_for_period(
    assumptions: &CompleteAssumptions<'_>,
    period: u32,
    period_count: u32,
    revenue: &RevenueBreakdown,
    config: &ForecastConfig,
) -> PeriodCost {
    let mut by_category = CostBreakdown {
        setup: setup_cost(assumptions, period, period_count),
        marketing: marketing_cost(assumptions, period, period_count),
        ..Default::default()
    };

    if let Some(event) = assumptions.weekly_event() {
        let rules = &event.costs;
        by_category.cogs = rules.fb_cogs_percent / 100.0
            * revenue.category(SpendCategory::FoodBeverage)
            + rules.merchandise_cogs_percent / 100.0 * revenue.category(SpendCategory::Merchandise);
        by_category.staffing = f64::from(rules.staff_count) * rules.staff_cost_per_person;
    }

    let default_rate = assumptions.growth_model.rate * config.cost_growth_ratio;
    for cost in assumptions
        .costs
        .iter()
        .filter(|c| c.kind != CostType::Fixed)
    {
        let rate = cost.growth_rate.unwrap_or(default_rate);
        let amount = cost.value * growth_factor(assumptions.growth_model.curve, rate, period);
        match CostBucket::of(cost) {
            CostBucket::Cogs => by_category.cogs += amount,
            CostBucket::Marketing => by_category.marketing += amount,
            CostBucket::Staffing => by_category.staffing += amount,
            CostBucket::Recurring => by_category.recurring += amount,
        }
    }

    PeriodCost {
        total: by_category.total(),
        by_category,
    }
}

/// Where a listed recurring or variable cost is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CostBucket {
    Cogs,
    Marketing,
    Staffing,
    Recurring,
}

impl CostBucket {
    pub(crate) fn of(cost: &CostItem) -> Self {
        match cost.category.trim().to_ascii_lowercase().as_str() {
            "cogs" => CostBucket::Cogs,
            "marketing" => CostBucket::Marketing,
            "staff" | "staffing" => CostBucket::Staffing,
            _ => CostBucket::Recurring,
        }
    }
}

/// Fixed costs plus event setup costs, before spreading
pub fn total_setup_costs(assumptions: &CompleteAssumptions<'_>) -> f64 {
    let listed: f64 = assumptions
        .costs
        .iter()
        .filter(|c| c.kind == CostType::Fixed)
        .map(|c| c.value)
        .sum();
    let event_setup = assumptions
        .weekly_event()
        .map_or(0.0, |event| event.costs.setup_costs);
    listed + event_setup
}

fn setup_cost(assumptions: &CompleteAssumptions<'_>, period: u32, period_count: u32) -> f64 {
    let total = total_setup_costs(assumptions);
    let spread = assumptions
        .weekly_event()
        .is_some_and(|event| event.costs.spread_setup_costs);

    if spread && period_count > 0 {
        total / f64::from(period_count)
    } else if period <= 1 {
        total
    } else {
        0.0
    }
}

/// Marketing spend of a period under the model's allocation mode
pub fn marketing_cost(assumptions: &CompleteAssumptions<'_>, period: u32, period_count: u32) -> f64 {
    match assumptions.marketing {
        None => 0.0,
        Some(MarketingSetup::Channels(allocation)) => {
            let weekly: f64 = allocation.channels.iter().map(|c| c.weekly_budget).sum();
            weekly_to_period(weekly, assumptions.period_unit)
        }
        Some(MarketingSetup::HighLevel(budget)) => {
            high_level_cost(budget, period, period_count)
        }
    }
}

fn weekly_to_period(weekly: f64, unit: PeriodUnit) -> f64 {
    match unit {
        PeriodUnit::Week => weekly,
        other => weekly * other.weeks(),
    }
}

fn high_level_cost(budget: &HighLevelBudget, period: u32, period_count: u32) -> f64 {
    match budget.budget_application {
        BudgetApplication::Upfront => {
            if period <= 1 {
                budget.total_budget
            } else {
                0.0
            }
        }
        BudgetApplication::SpreadEvenly => {
            if period_count == 0 {
                0.0
            } else {
                budget.total_budget / f64::from(period_count)
            }
        }
        BudgetApplication::SpreadCustom => {
            let duration = effective_spread_duration(budget, period_count);
            if duration == 0 || period > duration {
                0.0
            } else {
                budget.total_budget / f64::from(duration)
            }
        }
    }
}

/// `spreadDuration`, falling back to the whole horizon when unset or zero
pub fn effective_spread_duration(budget: &HighLevelBudget, period_count: u32) -> u32 {
    budget
        .spread_duration
        .filter(|d| *d > 0)
        .unwrap_or(period_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelBuilder;
    use crate::model::{ChannelId, FinancialModel};
    use crate::revenue::revenue_for_period;

    fn period_cost(model: &FinancialModel, period: u32, period_count: u32) -> PeriodCost {
        let assumptions = model.assumptions().unwrap().complete().unwrap();
        let revenue = revenue_for_period(&assumptions, period);
        cost_for_period(
            &assumptions,
            period,
            period_count,
            &revenue.by_stream,
            &ForecastConfig::default(),
        )
    }

    #[test]
    fn test_cogs_tied_to_stream_revenue() {
        let model = ModelBuilder::weekly_event("Market", 4, 100.0)
            .ticket_price(20.0)
            .fb_spend(10.0)
            .merchandise_spend(5.0)
            .fb_cogs_percent(30.0)
            .merchandise_cogs_percent(50.0)
            .build();

        let cost = period_cost(&model, 1, 4);
        // 30% of 1000 F&B + 50% of 500 merch; ticket revenue carries no COGS
        assert!((cost.by_category.cogs - 550.0).abs() < 1e-9);
        assert_eq!(cost.total, cost.by_category.total());
    }

    #[test]
    fn test_staffing_is_flat() {
        let model = ModelBuilder::weekly_event("Market", 4, 100.0)
            .ticket_price(20.0)
            .staff(4, 150.0)
            .attendance_growth(25.0)
            .build();

        for period in 1..=4 {
            assert_eq!(period_cost(&model, period, 4).by_category.staffing, 600.0);
        }
    }

    #[test]
    fn test_fixed_costs_in_first_period_only() {
        let model = ModelBuilder::generic("Shop")
            .cost("Fit-out", 1200.0, CostType::Fixed)
            .build();

        assert_eq!(period_cost(&model, 1, 12).by_category.setup, 1200.0);
        assert_eq!(period_cost(&model, 2, 12).by_category.setup, 0.0);
    }

    #[test]
    fn test_spread_setup_costs_cover_every_period() {
        let model = ModelBuilder::weekly_event("Market", 4, 100.0)
            .ticket_price(10.0)
            .setup_costs(800.0)
            .cost("Stage", 400.0, CostType::Fixed)
            .spread_setup_costs(true)
            .build();

        let spread: Vec<f64> = (1..=4)
            .map(|p| period_cost(&model, p, 4).by_category.setup)
            .collect();
        assert_eq!(spread, vec![300.0; 4]);
    }

    #[test]
    fn test_recurring_costs_grow_slower_than_revenue() {
        let model = ModelBuilder::generic("Shop")
            .cost("Rent", 100.0, CostType::Recurring)
            .linear_growth(0.1)
            .build();

        // 0.1 * 0.7 = 0.07 per period
        let cost = period_cost(&model, 3, 12);
        assert!((cost.by_category.recurring - 114.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_specific_rate() {
        let model = ModelBuilder::generic("Shop")
            .cost_item(CostItem {
                name: "Energy".into(),
                value: 100.0,
                kind: CostType::Variable,
                category: "Utilities".into(),
                growth_rate: Some(0.2),
            })
            .linear_growth(0.1)
            .build();

        let cost = period_cost(&model, 2, 12);
        assert!((cost.by_category.recurring - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_listed_cost_category_routing() {
        let model = ModelBuilder::generic("Shop")
            .cost_item(CostItem {
                name: "Flyers".into(),
                value: 50.0,
                kind: CostType::Recurring,
                category: "Marketing".into(),
                growth_rate: None,
            })
            .cost_item(CostItem {
                name: "Cashiers".into(),
                value: 70.0,
                kind: CostType::Recurring,
                category: "Staffing".into(),
                growth_rate: None,
            })
            .build();

        let cost = period_cost(&model, 1, 12);
        assert_eq!(cost.by_category.marketing, 50.0);
        assert_eq!(cost.by_category.staffing, 70.0);
        assert_eq!(cost.by_category.recurring, 0.0);
    }

    #[test]
    fn test_channel_marketing_sums_weekly_budgets() {
        let model = ModelBuilder::generic("Shop")
            .marketing_channel(ChannelId::new("social"), 150.0)
            .marketing_channel(ChannelId::new("radio"), 50.0)
            .build();

        assert_eq!(period_cost(&model, 1, 12).by_category.marketing, 200.0);
        assert_eq!(period_cost(&model, 7, 12).by_category.marketing, 200.0);
    }

    #[test]
    fn test_channel_marketing_converted_to_months() {
        let model = ModelBuilder::generic("Shop")
            .period_unit(PeriodUnit::Month)
            .marketing_channel(ChannelId::new("social"), 120.0)
            .build();

        let cost = period_cost(&model, 1, 12);
        assert!((cost.by_category.marketing - 520.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_level_upfront() {
        let model = ModelBuilder::generic("Shop")
            .high_level_marketing(1200.0, BudgetApplication::Upfront, None)
            .build();

        assert_eq!(period_cost(&model, 1, 12).by_category.marketing, 1200.0);
        assert_eq!(period_cost(&model, 2, 12).by_category.marketing, 0.0);
    }

    #[test]
    fn test_high_level_spread_evenly() {
        let model = ModelBuilder::generic("Shop")
            .high_level_marketing(1200.0, BudgetApplication::SpreadEvenly, None)
            .build();

        for period in 1..=12 {
            assert_eq!(period_cost(&model, period, 12).by_category.marketing, 100.0);
        }
    }

    #[test]
    fn test_high_level_spread_custom() {
        let model = ModelBuilder::generic("Shop")
            .high_level_marketing(900.0, BudgetApplication::SpreadCustom, Some(3))
            .build();

        assert_eq!(period_cost(&model, 1, 12).by_category.marketing, 300.0);
        assert_eq!(period_cost(&model, 3, 12).by_category.marketing, 300.0);
        assert_eq!(period_cost(&model, 4, 12).by_category.marketing, 0.0);
    }

    #[test]
    fn test_spread_custom_without_duration_uses_horizon() {
        let budget = HighLevelBudget {
            total_budget: 600.0,
            budget_application: BudgetApplication::SpreadCustom,
            spread_duration: Some(0),
        };
        assert_eq!(effective_spread_duration(&budget, 6), 6);
        assert_eq!(high_level_cost(&budget, 6, 6), 100.0);
    }
}
