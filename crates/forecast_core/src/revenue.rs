//! Per-period revenue calculation
//!
//! Attendance-driven models earn ticket, F&B and merchandise revenue from
//! `attendance * spend`, where attendance and (optionally) each spend category
//! grow on their own rates. Every other listed revenue stream is projected from
//! its base value with the model's growth curve, or its own rate when given.
//! A listed stream named after an attendance stream ("Ticket Sales", say) is
//! left out on those models since attendance already earns it.
//!
//! Attendance is evaluated in closed form from period 1, so no state is carried
//! between periods.

use crate::error::Result;
use crate::growth::{growth_factor, growth_factor_percent};
use crate::model::{
    CompleteAssumptions, FinancialModel, Frequency, GrowthCurve, GrowthModel, PeriodUnit,
    RevenueBreakdown, RevenueStream, RevenueType, SpendCategory, StreamAmount,
    WeeklyEventMetadata,
};

/// Revenue earned in one period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRevenue {
    pub total: f64,
    pub by_stream: RevenueBreakdown,
    /// Set for attendance-driven models
    pub attendance: Option<f64>,
}

/// Revenue of `model` in a 1-indexed period.
///
/// Fails with an incomplete-model error when assumptions or required fields
/// are absent.
pub fn revenue_for_model(model: &FinancialModel, period: u32) -> Result<PeriodRevenue> {
    let assumptions = model.assumptions()?.complete()?;
    Ok(revenue_for_period(&assumptions, period))
}

/// Revenue of validated assumptions in a 1-indexed period
pub fn revenue_for_period(assumptions: &CompleteAssumptions<'_>, period: u32) -> PeriodRevenue {
    let mut streams = Vec::with_capacity(assumptions.revenue.len() + 3);
    let mut attendance = None;

    let event = assumptions.weekly_event();
    if let Some(event) = event {
        let curve = assumptions.growth_model.curve;
        let visitors = attendance_for_period(event, curve, period);
        attendance = Some(visitors);

        for category in SpendCategory::ALL {
            streams.push(StreamAmount {
                name: category.stream_name().to_string(),
                amount: visitors * spend_for_period(event, curve, category, period),
                category: Some(category),
            });
        }
    }

    // Attendance already covers streams named after a spend category
    let listed = assumptions.revenue.iter().filter(|stream| {
        event.is_none() || SpendCategory::from_stream_name(&stream.name).is_none()
    });
    for stream in listed {
        streams.push(StreamAmount {
            name: stream.name.clone(),
            amount: stream_amount(
                stream,
                assumptions.growth_model,
                assumptions.period_unit,
                period,
            ),
            category: None,
        });
    }

    let by_stream = RevenueBreakdown(streams);
    PeriodRevenue {
        total: by_stream.total(),
        by_stream,
        attendance,
    }
}

/// Attendance in a period: `initialWeeklyAttendance * growth(attendanceGrowthRate, p)`
pub fn attendance_for_period(event: &WeeklyEventMetadata, curve: GrowthCurve, period: u32) -> f64 {
    event.initial_weekly_attendance
        * growth_factor_percent(curve, event.growth.attendance_growth_rate, period)
}

/// Per-attendee spend of one category, grown only when customer spend growth is enabled
pub fn spend_for_period(
    event: &WeeklyEventMetadata,
    curve: GrowthCurve,
    category: SpendCategory,
    period: u32,
) -> f64 {
    let spend = &event.per_customer;
    let growth = &event.growth;
    let (base, rate) = match category {
        SpendCategory::Ticket => (spend.ticket_price, growth.ticket_price_growth_rate),
        SpendCategory::FoodBeverage => (spend.fb_spend, growth.fb_spend_growth_rate),
        SpendCategory::Merchandise => (
            spend.merchandise_spend,
            growth.merchandise_spend_growth_rate,
        ),
    };

    if growth.use_customer_spend_growth {
        base * growth_factor_percent(curve, rate, period)
    } else {
        base
    }
}

fn stream_amount(
    stream: &RevenueStream,
    growth_model: &GrowthModel,
    unit: PeriodUnit,
    period: u32,
) -> f64 {
    if stream.frequency == Frequency::Once {
        return if period <= 1 { stream.value } else { 0.0 };
    }

    let base = match stream.frequency.weeks() {
        Some(weeks) => stream.value * unit.weeks() / weeks,
        None => stream.value,
    };

    match stream.kind {
        RevenueType::Fixed => base,
        RevenueType::Recurring | RevenueType::Variable => {
            let rate = stream.growth_rate.unwrap_or(growth_model.rate);
            base * growth_factor(growth_model.curve, rate, period)
        }
    }
}
