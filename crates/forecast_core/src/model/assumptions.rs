//! Financial model definitions
//!
//! A `FinancialModel` owns one `Assumptions` block describing revenue streams,
//! cost items, the default growth curve, optional attendance metadata and the
//! marketing allocation. Field names follow the stored camelCase contract.

use serde::{Deserialize, Serialize};

use super::ids::{ChannelId, ModelId, ProjectId};
use crate::error::ForecastError;

/// Weeks in a year used for every period-unit conversion
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// A stored financial model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialModel {
    pub id: ModelId,
    pub project_id: ProjectId,
    pub name: String,
    /// Absent when the model was saved before its assumptions were filled in
    #[serde(default)]
    pub assumptions: Option<Assumptions>,
}

impl FinancialModel {
    /// Borrow the assumptions, failing with an incomplete-model error when absent
    pub fn assumptions(&self) -> Result<&Assumptions, ForecastError> {
        self.assumptions
            .as_ref()
            .ok_or_else(|| ForecastError::IncompleteModel {
                missing: vec!["assumptions"],
            })
    }
}

/// Everything the engine needs to project a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    pub revenue: Option<Vec<RevenueStream>>,
    pub costs: Option<Vec<CostItem>>,
    pub growth_model: Option<GrowthModel>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
    #[serde(default)]
    pub marketing: Option<MarketingSetup>,
    #[serde(default)]
    pub period_unit: PeriodUnit,
    /// First day of period 1, used only for calendar labels
    #[serde(default)]
    pub start_date: Option<jiff::civil::Date>,
}

/// Borrowed view of assumptions whose required fields are all present
#[derive(Debug, Clone, Copy)]
pub struct CompleteAssumptions<'a> {
    pub revenue: &'a [RevenueStream],
    pub costs: &'a [CostItem],
    pub growth_model: &'a GrowthModel,
    pub metadata: Option<&'a ModelMetadata>,
    pub marketing: Option<&'a MarketingSetup>,
    pub period_unit: PeriodUnit,
}

impl<'a> CompleteAssumptions<'a> {
    /// Attendance metadata when the model is attendance-driven
    pub fn weekly_event(&self) -> Option<&'a WeeklyEventMetadata> {
        match self.metadata {
            Some(ModelMetadata::WeeklyEvent(event)) => Some(event),
            Some(ModelMetadata::Generic(_)) | None => None,
        }
    }
}

impl Assumptions {
    /// Check that `revenue`, `costs` and `growthModel` are all present.
    ///
    /// Every missing field is reported at once so callers can render a single
    /// "incomplete model" state.
    pub fn complete(&self) -> Result<CompleteAssumptions<'_>, ForecastError> {
        let mut missing = Vec::new();
        if self.revenue.is_none() {
            missing.push("revenue");
        }
        if self.costs.is_none() {
            missing.push("costs");
        }
        if self.growth_model.is_none() {
            missing.push("growthModel");
        }

        match (&self.revenue, &self.costs, &self.growth_model) {
            (Some(revenue), Some(costs), Some(growth_model)) => Ok(CompleteAssumptions {
                revenue,
                costs,
                growth_model,
                metadata: self.metadata.as_ref(),
                marketing: self.marketing.as_ref(),
                period_unit: self.effective_period_unit(),
            }),
            _ => Err(ForecastError::IncompleteModel { missing }),
        }
    }

    /// Weekly event models always run in weeks, whatever `periodUnit` says
    pub fn effective_period_unit(&self) -> PeriodUnit {
        match self.metadata {
            Some(ModelMetadata::WeeklyEvent(_)) => PeriodUnit::Week,
            _ => self.period_unit,
        }
    }

    /// Attendance metadata when the model is attendance-driven
    pub fn weekly_event(&self) -> Option<&WeeklyEventMetadata> {
        match &self.metadata {
            Some(ModelMetadata::WeeklyEvent(event)) => Some(event),
            _ => None,
        }
    }

    pub fn weekly_event_mut(&mut self) -> Option<&mut WeeklyEventMetadata> {
        match &mut self.metadata {
            Some(ModelMetadata::WeeklyEvent(event)) => Some(event),
            _ => None,
        }
    }
}

/// Shape of a growth curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthCurve {
    #[default]
    Linear,
    Exponential,
}

/// Default growth applied to streams without a more specific rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthModel {
    #[serde(rename = "type")]
    pub curve: GrowthCurve,
    /// Per-period rate as a fraction (0.1 = 10%)
    pub rate: f64,
}

impl GrowthModel {
    pub fn linear(rate: f64) -> Self {
        Self {
            curve: GrowthCurve::Linear,
            rate,
        }
    }

    pub fn exponential(rate: f64) -> Self {
        Self {
            curve: GrowthCurve::Exponential,
            rate,
        }
    }
}

/// How a revenue stream behaves over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueType {
    /// Held flat at its base value
    Fixed,
    #[default]
    Recurring,
    Variable,
}

/// How often a stream's `value` is earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    /// `value` is already expressed per model period
    #[default]
    PerPeriod,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
    /// Earned once, in period 1
    Once,
}

impl Frequency {
    /// Length of one occurrence in weeks, `None` for per-period and one-off values
    pub fn weeks(self) -> Option<f64> {
        match self {
            Frequency::PerPeriod | Frequency::Once => None,
            Frequency::Weekly => Some(1.0),
            Frequency::Monthly => Some(WEEKS_PER_YEAR / 12.0),
            Frequency::Quarterly => Some(WEEKS_PER_YEAR / 4.0),
            Frequency::Annually => Some(WEEKS_PER_YEAR),
        }
    }
}

/// A named revenue stream with its period-1 value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStream {
    pub name: String,
    pub value: f64,
    #[serde(rename = "type", default)]
    pub kind: RevenueType,
    #[serde(default)]
    pub frequency: Frequency,
    /// Overrides `growthModel.rate` for this stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
}

/// Cost behaviour over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    /// One-off setup spend
    Fixed,
    Recurring,
    Variable,
}

/// A named cost line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub name: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: CostType,
    #[serde(default)]
    pub category: String,
    /// Overrides the damped revenue growth rate for this cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
}

/// Length of one forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl PeriodUnit {
    /// Length of one period in weeks
    pub fn weeks(self) -> f64 {
        match self {
            PeriodUnit::Day => 1.0 / 7.0,
            PeriodUnit::Week => 1.0,
            PeriodUnit::Month => WEEKS_PER_YEAR / 12.0,
            PeriodUnit::Quarter => WEEKS_PER_YEAR / 4.0,
            PeriodUnit::Year => WEEKS_PER_YEAR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodUnit::Day => "Day",
            PeriodUnit::Week => "Week",
            PeriodUnit::Month => "Month",
            PeriodUnit::Quarter => "Quarter",
            PeriodUnit::Year => "Year",
        }
    }
}

/// Model-kind specific metadata, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModelMetadata {
    WeeklyEvent(WeeklyEventMetadata),
    Generic(GenericMetadata),
}

/// Metadata for models that are not attendance-driven
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericMetadata {
    /// Forecast horizon; the configured default is used when absent
    #[serde(default)]
    pub periods: Option<u32>,
}

/// Attendance-driven model of a recurring weekly event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEventMetadata {
    pub weeks: u32,
    pub initial_weekly_attendance: f64,
    pub per_customer: PerCustomerSpend,
    #[serde(default)]
    pub growth: EventGrowth,
    #[serde(default)]
    pub costs: EventCosts,
}

/// Spend per attendee
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerCustomerSpend {
    pub ticket_price: f64,
    #[serde(default)]
    pub fb_spend: f64,
    #[serde(default)]
    pub merchandise_spend: f64,
}

/// Growth rates of an event model, in percent per period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGrowth {
    #[serde(default)]
    pub attendance_growth_rate: f64,
    /// Spend categories stay flat unless this is set
    #[serde(default)]
    pub use_customer_spend_growth: bool,
    #[serde(default)]
    pub ticket_price_growth_rate: f64,
    #[serde(default)]
    pub fb_spend_growth_rate: f64,
    #[serde(default)]
    pub merchandise_spend_growth_rate: f64,
}

/// Event cost rules. Percentages are of the same-period stream revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCosts {
    #[serde(rename = "fbCOGSPercent", default)]
    pub fb_cogs_percent: f64,
    #[serde(default)]
    pub merchandise_cogs_percent: f64,
    #[serde(default)]
    pub staff_count: u32,
    #[serde(default)]
    pub staff_cost_per_person: f64,
    #[serde(default)]
    pub setup_costs: f64,
    #[serde(default)]
    pub spread_setup_costs: bool,
}

/// Marketing allocation, discriminated by `allocationMode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "allocationMode", rename_all = "camelCase")]
pub enum MarketingSetup {
    Channels(ChannelAllocation),
    HighLevel(HighLevelBudget),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelAllocation {
    #[serde(default)]
    pub channels: Vec<MarketingChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingChannel {
    pub id: ChannelId,
    #[serde(default)]
    pub name: String,
    pub weekly_budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighLevelBudget {
    pub total_budget: f64,
    #[serde(default)]
    pub budget_application: BudgetApplication,
    /// Periods over which `spreadCustom` spends the budget
    #[serde(default)]
    pub spread_duration: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetApplication {
    Upfront,
    #[default]
    SpreadEvenly,
    SpreadCustom,
}
