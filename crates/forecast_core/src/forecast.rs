//! Forecast time-series generation
//!
//! Periods are generated strictly in order: period `p` cost depends on period
//! `p` revenue, and cumulative totals depend on period `p - 1`. A model with
//! missing required fields yields an error, never a zero-filled series.

use jiff::ToSpan;

use crate::config::ForecastConfig;
use crate::cost::{cost_for_period, effective_spread_duration};
use crate::error::{ForecastError, Result};
use crate::model::{
    Assumptions, BudgetApplication, CompleteAssumptions, FinancialModel, ForecastPeriodData,
    MarketingSetup, ModelMetadata, PeriodUnit,
};
use crate::revenue::revenue_for_period;

/// Generate a forecast with the default configuration
pub fn generate(model: &FinancialModel) -> Result<Vec<ForecastPeriodData>> {
    generate_with_config(model, &ForecastConfig::default())
}

/// Generate one `ForecastPeriodData` per period, in ascending period order
pub fn generate_with_config(
    model: &FinancialModel,
    config: &ForecastConfig,
) -> Result<Vec<ForecastPeriodData>> {
    let assumptions = model.assumptions()?;
    let complete = assumptions.complete()?;
    let periods = period_count(assumptions, config)?;
    validate(&complete, periods)?;

    tracing::debug!(
        model = %model.id,
        periods,
        attendance_driven = complete.weekly_event().is_some(),
        "generating forecast"
    );

    let mut series = Vec::with_capacity(periods as usize);
    let mut cumulative_revenue = 0.0;
    let mut cumulative_cost = 0.0;
    let mut cumulative_profit = 0.0;

    for period in 1..=periods {
        let revenue = revenue_for_period(&complete, period);
        let cost = cost_for_period(&complete, period, periods, &revenue.by_stream, config);
        let profit = revenue.total - cost.total;

        cumulative_revenue += revenue.total;
        cumulative_cost += cost.total;
        cumulative_profit += profit;

        tracing::trace!(period, revenue = revenue.total, cost = cost.total, "period");

        series.push(ForecastPeriodData {
            period,
            point: period_label(complete.period_unit, period),
            date: period_date(assumptions.start_date, complete.period_unit, period)?,
            revenue: revenue.total,
            cost: cost.total,
            profit,
            cumulative_revenue,
            cumulative_cost,
            cumulative_profit,
            attendance: revenue.attendance,
            revenue_breakdown: revenue.by_stream,
            cost_breakdown: cost.by_category,
        });
    }

    Ok(series)
}

/// Number of periods to project: `weeks` for events, the model's own horizon
/// for generic models, else the configured default
pub fn period_count(assumptions: &Assumptions, config: &ForecastConfig) -> Result<u32> {
    let periods = match &assumptions.metadata {
        Some(ModelMetadata::WeeklyEvent(event)) => event.weeks,
        Some(ModelMetadata::Generic(generic)) => generic.periods.unwrap_or(config.default_horizon),
        None => config.default_horizon,
    };

    if periods == 0 {
        return Err(ForecastError::InvalidModel(
            "forecast horizon must be at least one period".to_string(),
        ));
    }
    Ok(periods)
}

/// Display label of a period, e.g. "Week 3"
pub fn period_label(unit: PeriodUnit, period: u32) -> String {
    format!("{} {period}", unit.label())
}

/// First calendar day of a period when the model has a start date
pub fn period_date(
    start: Option<jiff::civil::Date>,
    unit: PeriodUnit,
    period: u32,
) -> Result<Option<jiff::civil::Date>> {
    let Some(start) = start else {
        return Ok(None);
    };

    let offset = i64::from(period.saturating_sub(1));
    let date = match unit {
        PeriodUnit::Day => start.checked_add(offset.days())?,
        PeriodUnit::Week => start.checked_add(offset.weeks())?,
        PeriodUnit::Month => start.checked_add(offset.months())?,
        PeriodUnit::Quarter => start.checked_add((offset * 3).months())?,
        PeriodUnit::Year => start.checked_add(offset.years())?,
    };
    Ok(Some(date))
}

fn validate(assumptions: &CompleteAssumptions<'_>, periods: u32) -> Result<()> {
    if !assumptions.growth_model.rate.is_finite() {
        return Err(ForecastError::InvalidModel(
            "growth rate must be finite".to_string(),
        ));
    }

    if let Some(stream) = assumptions.revenue.iter().find(|s| !s.value.is_finite()) {
        return Err(ForecastError::InvalidModel(format!(
            "revenue stream '{}' has a non-finite value",
            stream.name
        )));
    }

    if let Some(cost) = assumptions.costs.iter().find(|c| !c.value.is_finite()) {
        return Err(ForecastError::InvalidModel(format!(
            "cost '{}' has a non-finite value",
            cost.name
        )));
    }

    if let Some(event) = assumptions.weekly_event() {
        let attendance = event.initial_weekly_attendance;
        if !attendance.is_finite() || attendance < 0.0 {
            return Err(ForecastError::InvalidModel(format!(
                "initial weekly attendance must be a non-negative number, got {attendance}"
            )));
        }
    }

    if let Some(MarketingSetup::HighLevel(budget)) = assumptions.marketing
        && budget.budget_application == BudgetApplication::SpreadCustom
    {
        let duration = effective_spread_duration(budget, periods);
        if duration > periods {
            tracing::warn!(
                duration,
                periods,
                "marketing spread duration exceeds the horizon; the remainder is never spent"
            );
        }
    }

    Ok(())
}
