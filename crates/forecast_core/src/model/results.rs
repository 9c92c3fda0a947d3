//! Forecast output types
//!
//! These structures are the contract consumed by chart, table and export
//! collaborators. Field names serialize in camelCase.

use serde::{Deserialize, Serialize};

/// Per-attendee spend category of an attendance-driven model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpendCategory {
    Ticket,
    FoodBeverage,
    Merchandise,
}

impl SpendCategory {
    pub const ALL: [SpendCategory; 3] = [
        SpendCategory::Ticket,
        SpendCategory::FoodBeverage,
        SpendCategory::Merchandise,
    ];

    /// Stream name used in revenue breakdowns
    pub fn stream_name(self) -> &'static str {
        match self {
            SpendCategory::Ticket => "Ticket Sales",
            SpendCategory::FoodBeverage => "F&B Sales",
            SpendCategory::Merchandise => "Merchandise Sales",
        }
    }

    /// The category whose stream carries `name`, ignoring case and surrounding space
    pub fn from_stream_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.stream_name().eq_ignore_ascii_case(name))
    }
}

/// Revenue earned by one stream in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamAmount {
    pub name: String,
    pub amount: f64,
    /// Set for streams derived from attendance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SpendCategory>,
}

/// Revenue of one period broken out by stream, in model order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueBreakdown(pub Vec<StreamAmount>);

impl RevenueBreakdown {
    pub fn total(&self) -> f64 {
        self.0.iter().map(|s| s.amount).sum()
    }

    /// Revenue of an attendance-derived category, 0 when the model has none
    pub fn category(&self, category: SpendCategory) -> f64 {
        self.0
            .iter()
            .filter(|s| s.category == Some(category))
            .map(|s| s.amount)
            .sum()
    }

    pub fn stream(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|s| s.name == name).map(|s| s.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StreamAmount> {
        self.0.iter()
    }
}

/// Cost of one period broken out by category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub cogs: f64,
    pub marketing: f64,
    /// Fixed and setup costs
    pub setup: f64,
    /// Other recurring and variable costs
    pub recurring: f64,
    pub staffing: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.cogs + self.marketing + self.setup + self.recurring + self.staffing
    }

    /// Labelled categories in display order
    pub fn categories(&self) -> [(&'static str, f64); 5] {
        [
            ("COGS", self.cogs),
            ("Marketing", self.marketing),
            ("Fixed/Setup", self.setup),
            ("Other Recurring", self.recurring),
            ("Staffing", self.staffing),
        ]
    }

    pub(crate) fn accumulate(&mut self, other: &CostBreakdown) {
        self.cogs += other.cogs;
        self.marketing += other.marketing;
        self.setup += other.setup;
        self.recurring += other.recurring;
        self.staffing += other.staffing;
    }
}

/// One period of a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriodData {
    /// 1-indexed period number
    pub period: u32,
    /// Display label such as "Week 3"
    pub point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<jiff::civil::Date>,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub cumulative_revenue: f64,
    pub cumulative_cost: f64,
    pub cumulative_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<f64>,
    #[serde(default)]
    pub revenue_breakdown: RevenueBreakdown,
    #[serde(default)]
    pub cost_breakdown: CostBreakdown,
}

/// First period whose cumulative profit is non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenPeriod {
    /// 0-based index into the series
    pub index: Option<usize>,
    pub label: String,
}

impl BreakEvenPeriod {
    pub const NOT_REACHED: &'static str = "N/A";

    pub fn not_reached() -> Self {
        Self {
            index: None,
            label: Self::NOT_REACHED.to_string(),
        }
    }

    pub fn is_reached(&self) -> bool {
        self.index.is_some()
    }
}

/// Aggregate metrics of a single series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummaryMetrics {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    /// Percent of revenue, 0 when there is no revenue
    pub profit_margin: f64,
    pub break_even_period: BreakEvenPeriod,
    pub average_weekly_revenue: f64,
    pub average_weekly_costs: f64,
    pub average_weekly_profit: f64,
    pub period_count: usize,
    #[serde(default)]
    pub revenue_by_stream: Vec<StreamAmount>,
    #[serde(default)]
    pub costs_by_category: CostBreakdown,
}

/// How break-even moved between baseline and scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BreakEvenChange {
    /// Both series break even
    Shifted { baseline: usize, scenario: usize },
    /// Only the scenario breaks even
    Reached { scenario: usize },
    /// Only the baseline breaks even
    Lost { baseline: usize },
    /// Neither series breaks even
    NeverReached,
}

/// Baseline-vs-scenario deltas (scenario minus baseline)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparisonMetrics {
    pub revenue_delta: f64,
    pub revenue_delta_percent: f64,
    pub costs_delta: f64,
    pub costs_delta_percent: f64,
    pub profit_delta: f64,
    pub profit_delta_percent: f64,
    /// Difference in profit margin, in percentage points
    pub margin_delta: f64,
    /// Scenario index minus baseline index in periods, where a series that
    /// never breaks even counts as breaking even at its period count.
    /// Negative means the scenario breaks even sooner. `None` when neither does.
    pub break_even_delta: Option<i64>,
    pub break_even_change: BreakEvenChange,
}
