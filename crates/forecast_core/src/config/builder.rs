//! Model Builder
//!
//! Fluent construction of `FinancialModel`s. The builder starts from a complete
//! model (empty revenue and cost lists, flat linear growth) and every setter
//! replaces or appends one piece.
//!
//! # Example
//!
//! ```ignore
//! use forecast_core::config::ModelBuilder;
//! use forecast_core::model::CostType;
//!
//! let model = ModelBuilder::generic("Consulting")
//!     .revenue("Retainers", 12_000.0)
//!     .cost("Office", 3_000.0, CostType::Recurring)
//!     .cost("Laptops", 6_000.0, CostType::Fixed)
//!     .exponential_growth(0.02)
//!     .periods(24)
//!     .build();
//! ```

use crate::model::{
    Assumptions, BudgetApplication, ChannelAllocation, ChannelId, CostItem, CostType, EventCosts,
    EventGrowth, FinancialModel, GenericMetadata, GrowthModel, HighLevelBudget, MarketingChannel,
    MarketingSetup, ModelId, ModelMetadata, PerCustomerSpend, PeriodUnit, ProjectId,
    RevenueStream, WeeklyEventMetadata,
};

/// Builder for `FinancialModel`
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    id: ModelId,
    project_id: ProjectId,
    name: String,
    assumptions: Assumptions,
}

impl ModelBuilder {
    fn with_metadata(name: &str, metadata: Option<ModelMetadata>) -> Self {
        Self {
            id: ModelId::new(slug(name)),
            project_id: ProjectId::new("default"),
            name: name.to_string(),
            assumptions: Assumptions {
                revenue: Some(Vec::new()),
                costs: Some(Vec::new()),
                growth_model: Some(GrowthModel::linear(0.0)),
                metadata,
                marketing: None,
                period_unit: PeriodUnit::Week,
                start_date: None,
            },
        }
    }

    /// A model driven only by its listed revenue streams
    #[must_use]
    pub fn generic(name: &str) -> Self {
        Self::with_metadata(name, None)
    }

    /// An attendance-driven weekly event
    #[must_use]
    pub fn weekly_event(name: &str, weeks: u32, initial_weekly_attendance: f64) -> Self {
        Self::with_metadata(
            name,
            Some(ModelMetadata::WeeklyEvent(WeeklyEventMetadata {
                weeks,
                initial_weekly_attendance,
                per_customer: PerCustomerSpend::default(),
                growth: EventGrowth::default(),
                costs: EventCosts::default(),
            })),
        )
    }

    // =========================================================================
    // Identity
    // =========================================================================

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = ModelId::new(id);
        self
    }

    #[must_use]
    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = ProjectId::new(project_id);
        self
    }

    // =========================================================================
    // Horizon and growth
    // =========================================================================

    /// Horizon of a generic model. Weekly events use their `weeks` instead.
    #[must_use]
    pub fn periods(mut self, periods: u32) -> Self {
        match &mut self.assumptions.metadata {
            Some(ModelMetadata::WeeklyEvent(event)) => event.weeks = periods,
            Some(ModelMetadata::Generic(generic)) => generic.periods = Some(periods),
            None => {
                self.assumptions.metadata = Some(ModelMetadata::Generic(GenericMetadata {
                    periods: Some(periods),
                }));
            }
        }
        self
    }

    #[must_use]
    pub fn period_unit(mut self, unit: PeriodUnit) -> Self {
        self.assumptions.period_unit = unit;
        self
    }

    #[must_use]
    pub fn start_date(mut self, year: i16, month: i8, day: i8) -> Self {
        self.assumptions.start_date = Some(jiff::civil::date(year, month, day));
        self
    }

    #[must_use]
    pub fn growth(mut self, growth_model: GrowthModel) -> Self {
        self.assumptions.growth_model = Some(growth_model);
        self
    }

    #[must_use]
    pub fn linear_growth(self, rate: f64) -> Self {
        self.growth(GrowthModel::linear(rate))
    }

    #[must_use]
    pub fn exponential_growth(self, rate: f64) -> Self {
        self.growth(GrowthModel::exponential(rate))
    }

    // =========================================================================
    // Revenue and costs
    // =========================================================================

    /// Append a recurring per-period revenue stream
    #[must_use]
    pub fn revenue(self, name: &str, value: f64) -> Self {
        self.revenue_stream(RevenueStream {
            name: name.to_string(),
            value,
            kind: Default::default(),
            frequency: Default::default(),
            growth_rate: None,
        })
    }

    #[must_use]
    pub fn revenue_stream(mut self, stream: RevenueStream) -> Self {
        self.assumptions
            .revenue
            .get_or_insert_with(Vec::new)
            .push(stream);
        self
    }

    /// Append a cost in the default category
    #[must_use]
    pub fn cost(self, name: &str, value: f64, kind: CostType) -> Self {
        self.cost_item(CostItem {
            name: name.to_string(),
            value,
            kind,
            category: String::new(),
            growth_rate: None,
        })
    }

    #[must_use]
    pub fn cost_item(mut self, cost: CostItem) -> Self {
        self.assumptions
            .costs
            .get_or_insert_with(Vec::new)
            .push(cost);
        self
    }

    // =========================================================================
    // Marketing
    // =========================================================================

    /// Add a channel, switching the model to channel allocation if needed
    #[must_use]
    pub fn marketing_channel(mut self, id: ChannelId, weekly_budget: f64) -> Self {
        let channel = MarketingChannel {
            name: id.to_string(),
            id,
            weekly_budget,
            target_audience: None,
        };
        match &mut self.assumptions.marketing {
            Some(MarketingSetup::Channels(allocation)) => allocation.channels.push(channel),
            _ => {
                self.assumptions.marketing = Some(MarketingSetup::Channels(ChannelAllocation {
                    channels: vec![channel],
                }));
            }
        }
        self
    }

    #[must_use]
    pub fn high_level_marketing(
        mut self,
        total_budget: f64,
        budget_application: BudgetApplication,
        spread_duration: Option<u32>,
    ) -> Self {
        self.assumptions.marketing = Some(MarketingSetup::HighLevel(HighLevelBudget {
            total_budget,
            budget_application,
            spread_duration,
        }));
        self
    }

    // =========================================================================
    // Weekly event metadata (ignored for generic models)
    // =========================================================================

    fn event(mut self, update: impl FnOnce(&mut WeeklyEventMetadata)) -> Self {
        match self.assumptions.weekly_event_mut() {
            Some(event) => update(event),
            None => tracing::warn!(model = %self.name, "event setting ignored on a generic model"),
        }
        self
    }

    #[must_use]
    pub fn ticket_price(self, price: f64) -> Self {
        self.event(|e| e.per_customer.ticket_price = price)
    }

    #[must_use]
    pub fn fb_spend(self, spend: f64) -> Self {
        self.event(|e| e.per_customer.fb_spend = spend)
    }

    #[must_use]
    pub fn merchandise_spend(self, spend: f64) -> Self {
        self.event(|e| e.per_customer.merchandise_spend = spend)
    }

    /// Attendance growth in percent per week
    #[must_use]
    pub fn attendance_growth(self, percent: f64) -> Self {
        self.event(|e| e.growth.attendance_growth_rate = percent)
    }

    #[must_use]
    pub fn use_customer_spend_growth(self, enabled: bool) -> Self {
        self.event(|e| e.growth.use_customer_spend_growth = enabled)
    }

    #[must_use]
    pub fn ticket_price_growth(self, percent: f64) -> Self {
        self.event(|e| e.growth.ticket_price_growth_rate = percent)
    }

    #[must_use]
    pub fn fb_spend_growth(self, percent: f64) -> Self {
        self.event(|e| e.growth.fb_spend_growth_rate = percent)
    }

    #[must_use]
    pub fn merchandise_spend_growth(self, percent: f64) -> Self {
        self.event(|e| e.growth.merchandise_spend_growth_rate = percent)
    }

    #[must_use]
    pub fn fb_cogs_percent(self, percent: f64) -> Self {
        self.event(|e| e.costs.fb_cogs_percent = percent)
    }

    #[must_use]
    pub fn merchandise_cogs_percent(self, percent: f64) -> Self {
        self.event(|e| e.costs.merchandise_cogs_percent = percent)
    }

    #[must_use]
    pub fn staff(self, count: u32, cost_per_person: f64) -> Self {
        self.event(|e| {
            e.costs.staff_count = count;
            e.costs.staff_cost_per_person = cost_per_person;
        })
    }

    #[must_use]
    pub fn setup_costs(self, amount: f64) -> Self {
        self.event(|e| e.costs.setup_costs = amount)
    }

    #[must_use]
    pub fn spread_setup_costs(self, spread: bool) -> Self {
        self.event(|e| e.costs.spread_setup_costs = spread)
    }

    // =========================================================================
    // Build
    // =========================================================================

    #[must_use]
    pub fn build(self) -> FinancialModel {
        FinancialModel {
            id: self.id,
            project_id: self.project_id,
            name: self.name,
            assumptions: Some(self.assumptions),
        }
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
