mod assumptions;
mod ids;
mod results;
mod scenario;

pub use assumptions::{
    Assumptions, BudgetApplication, ChannelAllocation, CompleteAssumptions, CostItem, CostType,
    EventCosts, EventGrowth, FinancialModel, Frequency, GenericMetadata, GrowthCurve, GrowthModel,
    HighLevelBudget, MarketingChannel, MarketingSetup, ModelMetadata, PerCustomerSpend,
    PeriodUnit, RevenueStream, RevenueType, WEEKS_PER_YEAR, WeeklyEventMetadata,
};
pub use ids::{ChannelId, ModelId, ProjectId, ScenarioId};
pub use results::{
    BreakEvenChange, BreakEvenPeriod, CostBreakdown, ForecastPeriodData, RevenueBreakdown,
    ScenarioComparisonMetrics, ScenarioSummaryMetrics, SpendCategory, StreamAmount,
};
pub use scenario::{DeltaField, Scenario, ScenarioParameterDeltas};
