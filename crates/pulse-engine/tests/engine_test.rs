//! Facade control flow against the in-memory fixture store: every
//! operation computes its result, delivers it to the sink, and returns
//! the same object.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use pulse_core::config::PulseConfig;
use pulse_core::models::{
    CausalMethod, ConfidenceLevel, CounterfactualKind, PredictionMethod, StrategyLabel,
};
use pulse_core::records::{Feature, UserId};
use pulse_core::traits::ResultSink;
use pulse_engine::AnalyticsEngine;
use test_fixtures::{seed_days, CollectingSink, DaySpec, MemoryDataStore, FIXTURE_HABIT};

const USER: UserId = UserId(1);

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine_over(store: MemoryDataStore) -> (AnalyticsEngine, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let engine = AnalyticsEngine::with_resolved_learner(
        Arc::new(store),
        Arc::clone(&sink) as Arc<dyn ResultSink>,
        PulseConfig::default(),
    );
    (engine, sink)
}

/// 90 days of alternating 6h/8h sleep with mood tracking it exactly.
fn sleep_dataset() -> MemoryDataStore {
    let mut store = MemoryDataStore::new();
    seed_days(&mut store, USER, 90, |i, _| {
        let sleep = if i % 2 == 0 { 6.0 } else { 8.0 };
        DaySpec {
            mood: Some(0.5 * sleep + 4.0),
            sleep_hours: Some(sleep),
            ..DaySpec::default()
        }
    });
    store
}

#[test]
fn empty_store_mood_prediction_is_baseline_and_reaches_sink() -> anyhow::Result<()> {
    init_tracing();
    let (engine, sink) = engine_over(MemoryDataStore::new());

    let result = engine.predict_mood(USER, today() + Duration::days(1), today())?;
    assert_eq!(result.prediction, 7.0);
    assert_eq!(result.method, PredictionMethod::SimpleAverage);
    assert_eq!(result.message.as_deref(), Some("Need 30 entries. Currently: 0"));

    let accepted = sink.labeled("prediction:mood");
    assert_eq!(accepted.len(), 1);
    let obj = accepted[0].as_object().unwrap();
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["prediction", "confidence", "method", "message", "factors", "use_prediction"]
    );
    assert_eq!(obj["method"], "simple_average");
    Ok(())
}

#[test]
fn habit_prediction_carries_streak_through_sink() -> anyhow::Result<()> {
    let mut store = MemoryDataStore::new();
    seed_days(&mut store, USER, 25, |_, _| DaySpec {
        mood: Some(7.0),
        habits_completed: 1,
        ..DaySpec::default()
    });
    let (engine, sink) = engine_over(store);

    let result = engine.predict_habit(USER, FIXTURE_HABIT, today(), None)?;
    assert_eq!(result.method, PredictionMethod::HistoricalBaseline);
    assert_eq!(result.prediction, 1.0);
    assert_eq!(result.streak, Some(25));

    let accepted = sink.labeled("prediction:habit");
    assert_eq!(accepted[0]["streak"], 25);
    assert_eq!(accepted[0]["method"], "historical_baseline");
    Ok(())
}

#[test]
fn energy_forecast_covers_the_configured_horizon() -> anyhow::Result<()> {
    let mut store = MemoryDataStore::new();
    seed_days(&mut store, USER, 60, |_, _| DaySpec {
        journal_energy: Some(6.0),
        ..DaySpec::default()
    });
    let (engine, sink) = engine_over(store);

    let forecast = engine.forecast_energy(USER, today())?;
    assert_eq!(forecast.forecast.len(), 7);
    assert_eq!(forecast.overall_average, 6.0);
    assert_eq!(forecast.peak_days.len(), 2);
    assert_eq!(forecast.low_days.len(), 2);

    let accepted = sink.labeled("forecast");
    assert_eq!(accepted.len(), 1);
    let day = &accepted[0]["forecast"][0];
    for key in ["date", "day", "energy", "lower", "upper", "confidence"] {
        assert!(day.get(key).is_some(), "missing forecast key {key}");
    }
    Ok(())
}

#[test]
fn correlation_table_flows_through_the_sink() -> anyhow::Result<()> {
    let (engine, sink) = engine_over(sleep_dataset());

    let set = engine.correlations(USER, today())?;
    assert_eq!(set.sample_size, 90);
    assert!(set.message.is_none());
    let sleep = set
        .correlations
        .iter()
        .find(|c| c.feature == Feature::SleepHours)
        .unwrap();
    assert!((sleep.correlation - 1.0).abs() < 1e-9);
    assert!(sleep.significant);

    let accepted = sink.labeled("correlations");
    assert_eq!(accepted[0]["period_days"], 90);
    assert!(accepted[0].get("message").is_none());
    Ok(())
}

#[test]
fn unknown_causal_variable_is_a_structured_failure() -> anyhow::Result<()> {
    init_tracing();
    let (engine, sink) = engine_over(sleep_dataset());

    let analysis = engine.causal_analysis(USER, "caffeine", "mood", today())?;
    let failure = analysis.failure().unwrap();
    assert_eq!(failure.error, "Unknown variable");
    assert_eq!(
        failure.message.as_deref(),
        Some("'caffeine' is not a tracked variable.")
    );

    let accepted = sink.labeled("causal");
    assert_eq!(accepted[0]["error"], "Unknown variable");
    assert!(accepted[0].get("method").is_none());
    Ok(())
}

#[test]
fn causal_pair_over_seeded_data_yields_an_estimate() -> anyhow::Result<()> {
    let (engine, sink) = engine_over(sleep_dataset());

    let analysis = engine.causal_analysis(USER, "sleep_hours", "mood", today())?;
    let estimate = analysis.estimate().unwrap();
    assert_eq!(estimate.method, CausalMethod::BackdoorAdjustment);
    assert!((estimate.estimated_effect - 0.5).abs() < 1e-6);
    assert_eq!(estimate.treatment, Feature::SleepHours);

    let accepted = sink.labeled("causal");
    assert_eq!(accepted[0]["method"], "backdoor_adjustment");
    assert!(accepted[0].get("interpretation").is_some());
    assert!(accepted[0].get("caution").is_some());
    Ok(())
}

#[test]
fn counterfactuals_project_the_sleep_scenario() -> anyhow::Result<()> {
    let (engine, sink) = engine_over(sleep_dataset());

    let counterfactuals = engine.counterfactuals(USER, today())?;
    let sleep = counterfactuals
        .iter()
        .find(|c| c.kind == CounterfactualKind::Sleep)
        .unwrap();
    // Average sleep 7.0h, slope 0.5 per hour, target 8h.
    assert!((sleep.current_avg - 7.5).abs() < 1e-9);
    assert!((sleep.predicted_avg - 8.0).abs() < 1e-9);
    assert!((sleep.change - 0.5).abs() < 1e-9);

    let accepted = sink.labeled("counterfactuals");
    assert_eq!(accepted[0][0]["type"], "sleep");
    Ok(())
}

#[test]
fn experiments_follow_the_correlation_table() -> anyhow::Result<()> {
    let (engine, sink) = engine_over(sleep_dataset());

    let suggestions = engine.experiments(USER, today())?;
    let sleep = suggestions
        .iter()
        .find(|s| s.variable == Feature::SleepHours)
        .unwrap();
    assert_eq!(sleep.hypothesis, "Increasing sleep hours will improve mood.");
    assert_eq!(sleep.duration_days, 14);

    let accepted = sink.labeled("experiments");
    assert_eq!(accepted[0][0]["duration_days"], 14);
    Ok(())
}

#[test]
fn data_status_bands_on_journal_history() -> anyhow::Result<()> {
    let (engine, sink) = engine_over(sleep_dataset());

    let status = engine.data_status(USER)?;
    assert_eq!(status.journal_entries, 90);
    assert_eq!(status.strategy, StrategyLabel::SimpleModels);
    assert_eq!(status.confidence_level, ConfidenceLevel::Low);
    assert!(status.predictions_available);

    let accepted = sink.labeled("data_status");
    assert_eq!(accepted[0]["strategy"], "simple_models");
    assert_eq!(accepted[0]["confidence_level"], "low");
    Ok(())
}
