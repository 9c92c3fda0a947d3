//! Tests for the model builder and the stored camelCase contract
//!
//! These tests verify that:
//! - Builder setters land in the right assumption fields
//! - Event-only setters are ignored on generic models
//! - Models, scenarios and results serialize with the stored field names

use crate::config::{ForecastConfig, ModelBuilder};
use crate::forecast::generate;
use crate::model::{
    BudgetApplication, ChannelId, CostType, FinancialModel, GrowthCurve, MarketingSetup,
    ModelMetadata, PeriodUnit, Scenario, ScenarioParameterDeltas,
};

#[test]
fn test_builder_defaults_are_complete() {
    let model = ModelBuilder::generic("Corner Shop").build();

    assert_eq!(model.id.as_str(), "corner-shop");
    assert_eq!(model.project_id.as_str(), "default");
    assert_eq!(model.name, "Corner Shop");

    let assumptions = model.assumptions().unwrap();
    assert!(assumptions.complete().is_ok());
    assert_eq!(assumptions.period_unit, PeriodUnit::Week);
    assert_eq!(assumptions.growth_model.unwrap().curve, GrowthCurve::Linear);
    assert!(assumptions.metadata.is_none());
    assert!(assumptions.marketing.is_none());
}

#[test]
fn test_builder_setters() {
    let model = ModelBuilder::generic("Cafe")
        .id("cafe-v2")
        .project("downtown")
        .revenue("Coffee", 2_000.0)
        .cost("Rent", 900.0, CostType::Recurring)
        .cost("Grinder", 1_500.0, CostType::Fixed)
        .exponential_growth(0.04)
        .period_unit(PeriodUnit::Month)
        .periods(18)
        .build();

    assert_eq!(model.id.as_str(), "cafe-v2");
    assert_eq!(model.project_id.as_str(), "downtown");

    let assumptions = model.assumptions().unwrap();
    assert_eq!(assumptions.revenue.as_ref().unwrap().len(), 1);
    assert_eq!(assumptions.costs.as_ref().unwrap().len(), 2);
    assert_eq!(assumptions.growth_model.unwrap().rate, 0.04);
    assert!(matches!(
        assumptions.metadata,
        Some(ModelMetadata::Generic(ref generic)) if generic.periods == Some(18)
    ));
    assert_eq!(generate(&model).unwrap().len(), 18);
}

#[test]
fn test_event_setters_ignored_on_generic_models() {
    let plain = ModelBuilder::generic("Cafe").build();
    let with_event_fields = ModelBuilder::generic("Cafe")
        .ticket_price(10.0)
        .staff(3, 100.0)
        .setup_costs(500.0)
        .build();

    assert_eq!(plain, with_event_fields);
}

#[test]
fn test_marketing_setters() {
    let channels = ModelBuilder::generic("Cafe")
        .marketing_channel(ChannelId::new("social"), 80.0)
        .marketing_channel(ChannelId::new("print"), 20.0)
        .build();
    match channels.assumptions().unwrap().marketing.as_ref() {
        Some(MarketingSetup::Channels(allocation)) => {
            assert_eq!(allocation.channels.len(), 2);
            assert_eq!(allocation.channels[1].id.as_str(), "print");
        }
        other => panic!("expected channel allocation, got {other:?}"),
    }

    let high_level = ModelBuilder::generic("Cafe")
        .high_level_marketing(2_400.0, BudgetApplication::SpreadCustom, Some(6))
        .build();
    match high_level.assumptions().unwrap().marketing.as_ref() {
        Some(MarketingSetup::HighLevel(budget)) => {
            assert_eq!(budget.total_budget, 2_400.0);
            assert_eq!(budget.spread_duration, Some(6));
        }
        other => panic!("expected high-level budget, got {other:?}"),
    }
}

#[test]
fn test_model_json_uses_stored_field_names() {
    let model = ModelBuilder::weekly_event("Night Market", 10, 120.0)
        .ticket_price(8.0)
        .fb_cogs_percent(35.0)
        .high_level_marketing(1_000.0, BudgetApplication::Upfront, None)
        .build();

    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(value["projectId"], "default");
    assert_eq!(value["assumptions"]["growthModel"]["type"], "linear");
    assert_eq!(value["assumptions"]["metadata"]["type"], "WeeklyEvent");
    assert_eq!(value["assumptions"]["metadata"]["initialWeeklyAttendance"], 120.0);
    assert_eq!(value["assumptions"]["metadata"]["perCustomer"]["ticketPrice"], 8.0);
    assert_eq!(value["assumptions"]["metadata"]["costs"]["fbCOGSPercent"], 35.0);
    assert_eq!(value["assumptions"]["marketing"]["allocationMode"], "highLevel");
    assert_eq!(value["assumptions"]["marketing"]["budgetApplication"], "upfront");

    let parsed: FinancialModel = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, model);
}

#[test]
fn test_model_without_assumptions_parses() {
    let model: FinancialModel =
        serde_json::from_str(r#"{"id": "draft", "projectId": "p1", "name": "Draft"}"#).unwrap();
    assert!(model.assumptions.is_none());
    assert!(generate(&model).unwrap_err().is_incomplete());
}

#[test]
fn test_scenario_json() {
    let json = r#"{
        "id": "s1",
        "name": "Premium pricing",
        "baseModelId": "night-market",
        "projectId": "default",
        "parameters": {
            "pricingPercent": 20,
            "marketingSpendByChannel": {"social": -10}
        }
    }"#;

    let scenario: Scenario = serde_json::from_str(json).unwrap();
    assert_eq!(scenario.base_model_id.as_str(), "night-market");
    assert!(scenario.description.is_none());
    assert_eq!(scenario.parameters.pricing_percent, 20.0);
    assert_eq!(
        scenario.parameters.channel_percent(&ChannelId::new("social")),
        -10.0
    );
    assert_eq!(scenario.parameters.attendance_growth_percent, 0.0);
}

#[test]
fn test_series_json_fields() {
    let model = ModelBuilder::generic("Shop")
        .revenue("Sales", 100.0)
        .start_date(2025, 3, 3)
        .periods(2)
        .build();

    let series = generate(&model).unwrap();
    let value = serde_json::to_value(&series).unwrap();
    let first = &value[0];

    assert_eq!(first["point"], "Week 1");
    assert_eq!(first["date"], "2025-03-03");
    assert_eq!(first["cumulativeRevenue"], 100.0);
    assert_eq!(first["revenueBreakdown"][0]["name"], "Sales");
    assert!(first["costBreakdown"]["cogs"].is_number());
    assert!(first.get("attendance").is_none());
}

#[test]
fn test_config_partial_json() {
    let config: ForecastConfig = serde_json::from_str(r#"{"defaultHorizon": 24}"#).unwrap();
    assert_eq!(config.default_horizon, 24);
    assert_eq!(config.cost_growth_ratio, ForecastConfig::default().cost_growth_ratio);

    let deltas = ScenarioParameterDeltas::default();
    assert!(deltas.is_zero());
}
