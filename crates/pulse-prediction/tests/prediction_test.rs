//! Prediction engine behavior across tiers, against the in-memory store.

use std::sync::Arc;

use chrono::NaiveDate;

use pulse_core::config::PulseConfig;
use pulse_core::models::{ConfidenceLevel, PredictionMethod, StrategyLabel};
use pulse_core::records::{HabitLog, JournalEntry, MoodLog, UserId};
use pulse_core::traits::EnsembleLearner;
use pulse_prediction::PredictionEngine;
use test_fixtures::{ConstantLearner, MemoryDataStore, UnavailableLearner};

const USER: UserId = UserId(1);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mood(log_date: NaiveDate, value: f64) -> MoodLog {
    MoodLog {
        log_date,
        mood_value: value,
        energy_level: None,
        stress_level: None,
    }
}

fn habit_log(log_date: NaiveDate, completed: bool) -> HabitLog {
    HabitLog {
        log_date,
        log_hour: None,
        completed,
    }
}

fn engine(store: MemoryDataStore, learner: impl EnsembleLearner + 'static) -> PredictionEngine {
    PredictionEngine::new(Arc::new(store), Arc::new(learner), PulseConfig::default())
}

fn constant_learner(value: f64) -> ConstantLearner {
    ConstantLearner {
        value,
        importances: vec![0.4, 0.3, 0.2, 0.1],
    }
}

/// `days` consecutive daily mood logs ending the day before `today`.
fn seed_moods(store: &mut MemoryDataStore, days: u32, today: NaiveDate, value: impl Fn(NaiveDate) -> f64) {
    for i in 1..=i64::from(days) {
        let d = today - chrono::Duration::days(i);
        store.add_mood(USER, mood(d, value(d)));
    }
}

// --- Mood ---

#[test]
fn mood_below_minimum_uses_recent_average() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    for (i, value) in [6.0, 6.0, 6.0, 8.0, 8.0].into_iter().enumerate() {
        store.add_mood(USER, mood(today - chrono::Duration::days(i as i64 + 1), value));
    }

    let result = engine(store, constant_learner(0.0))
        .predict_mood(USER, today, today)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::SimpleAverage);
    assert!((result.prediction - 6.8).abs() < 1e-12);
    assert_eq!(result.confidence, 0.3);
    assert!(!result.use_prediction);
    assert_eq!(result.message.as_deref(), Some("Need 30 entries. Currently: 5"));
    assert_eq!(result.factors, vec!["Insufficient data - using average"]);
}

#[test]
fn mood_below_minimum_without_recent_logs_is_neutral() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    // One log, far outside the 7-day window.
    store.add_mood(USER, mood(date(2026, 1, 1), 2.0));

    let result = engine(store, constant_learner(0.0))
        .predict_mood(USER, today, today)
        .unwrap();

    assert_eq!(result.prediction, 7.0);
    assert_eq!(result.confidence, 0.3);
}

#[test]
fn mood_simple_tier_prefers_target_weekday() {
    // 30 consecutive days ending 2026-07-30; Mondays carry mood 5, the
    // rest 7. Target 2026-08-03 is a Monday; the window holds 4 Mondays.
    let mut store = MemoryDataStore::new();
    seed_moods(&mut store, 30, date(2026, 7, 31), |d| {
        if d.format("%A").to_string() == "Monday" {
            5.0
        } else {
            7.0
        }
    });

    let result = engine(store, constant_learner(0.0))
        .predict_mood(USER, date(2026, 8, 3), date(2026, 7, 31))
        .unwrap();

    assert_eq!(result.method, PredictionMethod::DayOfWeekAverage);
    assert_eq!(result.prediction, 5.0);
    assert!((result.confidence - 0.4).abs() < 1e-12);
    assert!(!result.use_prediction);
    assert!(result.factors.iter().any(|f| f == "Based on 4 past Mondays"));
}

#[test]
fn monday_only_history_averages_to_six() {
    use pulse_core::config::ConfidenceConfig;
    use pulse_prediction::strategies::mood::WeekdayBaselineStrategy;

    let logs = vec![mood(date(2026, 8, 10), 5.0), mood(date(2026, 8, 17), 7.0)];
    let result =
        WeekdayBaselineStrategy::predict(&logs, date(2026, 8, 24), &ConfidenceConfig::default());

    assert_eq!(result.prediction, 6.0);
    assert!((result.confidence - 0.2).abs() < 1e-12);
    assert_eq!(result.method, PredictionMethod::DayOfWeekAverage);
}

#[test]
fn ensemble_tier_reports_learner_prediction_and_importances() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    seed_moods(&mut store, 120, today, |_| 6.0);

    let result = engine(store, constant_learner(6.5))
        .predict_mood(USER, today, today)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::RandomForest);
    assert_eq!(result.prediction, 6.5);
    assert_eq!(result.confidence, 0.7);
    assert!(result.use_prediction);
    assert_eq!(result.factors[0], "day_of_week: 40% importance");
    assert_eq!(result.factors.len(), 4);
}

#[test]
fn advanced_tier_raises_confidence_ceiling() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    seed_moods(&mut store, 400, today, |_| 6.0);

    let result = engine(store, constant_learner(6.5))
        .predict_mood(USER, today, today)
        .unwrap();

    assert_eq!(result.confidence, 0.8);
}

#[test]
fn ensemble_failure_falls_back_to_weekday_baseline() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    seed_moods(&mut store, 120, today, |_| 6.0);

    let result = engine(store, UnavailableLearner)
        .predict_mood(USER, today, today)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::DayOfWeekAverage);
    assert_eq!(result.prediction, 6.0);
    assert!(result.confidence <= 0.8);
}

// --- Habits ---

#[test]
fn unknown_habit_reports_no_data() {
    let store = MemoryDataStore::new();
    let result = engine(store, constant_learner(0.0))
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::NoData);
    assert_eq!(result.prediction, 0.5);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.message.as_deref(), Some("No habit found: stretching"));
}

#[test]
fn habit_without_logs_reports_no_data() {
    let mut store = MemoryDataStore::new();
    store.add_habit(USER, "stretching");

    let result = engine(store, constant_learner(0.0))
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::NoData);
    assert_eq!(result.message.as_deref(), Some("Need 20 logs. Currently: 0"));
}

#[test]
fn habit_below_minimum_uses_overall_rate() {
    let mut store = MemoryDataStore::new();
    for i in 0..10u32 {
        store.add_habit_log(
            USER,
            "stretching",
            habit_log(date(2026, 8, 1) + chrono::Duration::days(i64::from(i)), i < 8),
        );
    }

    let result = engine(store, constant_learner(0.0))
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::OverallHistorical);
    assert!((result.prediction - 0.8).abs() < 1e-12);
    assert!((result.confidence - 10.0 / 30.0).abs() < 1e-12);
    assert_eq!(result.message.as_deref(), Some("Based on 10 logs"));
    assert_eq!(result.factors, vec!["Overall success rate: 80%"]);
}

#[test]
fn habit_baseline_blends_overall_and_weekday_rates() {
    // 25 logs, 20 completed. Three fall on Mondays, two of them completed:
    // prediction = (0.8 + 2/3) / 2.
    let mut store = MemoryDataStore::new();
    store.add_habit_log(USER, "stretching", habit_log(date(2026, 8, 3), true));
    store.add_habit_log(USER, "stretching", habit_log(date(2026, 8, 10), true));
    store.add_habit_log(USER, "stretching", habit_log(date(2026, 8, 17), false));
    // 22 Tuesday..Saturday logs, 18 completed.
    for i in 0..22u32 {
        let d = date(2026, 5, 5) + chrono::Duration::days(i64::from(i / 5) * 7 + i64::from(i % 5));
        store.add_habit_log(USER, "stretching", habit_log(d, i < 18));
    }

    let result = engine(store, constant_learner(0.0))
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();

    assert_eq!(result.method, PredictionMethod::HistoricalBaseline);
    assert!((result.prediction - (0.8 + 2.0 / 3.0) / 2.0).abs() < 1e-12);
    assert!((result.confidence - 0.5).abs() < 1e-12);
    assert!(result.use_prediction);
    assert!(result
        .factors
        .iter()
        .any(|f| f == "Monday success rate: 67% (3 logs)"));
}

#[test]
fn habit_streak_counts_back_from_latest_log() {
    let mut store = MemoryDataStore::new();
    // 20 consecutive daily logs; a miss four days back, completions after.
    for i in 0..20u32 {
        let d = date(2026, 8, 1) + chrono::Duration::days(i64::from(i));
        store.add_habit_log(USER, "stretching", habit_log(d, i != 16));
    }

    let result = engine(store, constant_learner(0.0))
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();

    assert_eq!(result.streak, Some(3));
    assert!(result.factors.iter().any(|f| f == "Current streak: 3 days"));
}

#[test]
fn habit_hour_rate_blends_when_hour_given() {
    let mut store = MemoryDataStore::new();
    // 20 hourless logs, all completed, plus 4 logs at 07:00, none completed.
    for i in 0..20u32 {
        let d = date(2026, 8, 1) + chrono::Duration::days(i64::from(i));
        store.add_habit_log(USER, "stretching", habit_log(d, true));
    }
    for i in 0..4u32 {
        let d = date(2026, 7, 1) + chrono::Duration::days(i64::from(i));
        store.add_habit_log(
            USER,
            "stretching",
            HabitLog {
                log_date: d,
                log_hour: Some(7),
                completed: false,
            },
        );
    }

    let eng = engine(store, constant_learner(0.0));
    let plain = eng
        .predict_habit(USER, "stretching", date(2026, 8, 24), None)
        .unwrap();
    let at_seven = eng
        .predict_habit(USER, "stretching", date(2026, 8, 24), Some(7))
        .unwrap();

    assert!(at_seven.prediction < plain.prediction);
    assert!(at_seven.factors.iter().any(|f| f == "Success at 7:00: 0%"));
}

// --- Energy ---

#[test]
fn sparse_energy_history_forecasts_flat_average() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    for i in 1..=10i64 {
        store.add_journal(
            USER,
            JournalEntry {
                entry_date: today - chrono::Duration::days(i),
                mood: None,
                energy_level: Some(6.0),
                stress_level: None,
                sleep_hours: None,
            },
        );
    }

    let forecast = engine(store, constant_learner(0.0))
        .forecast_energy(USER, today, 7)
        .unwrap();

    assert_eq!(forecast.method, PredictionMethod::SimpleAverage);
    assert_eq!(forecast.message.as_deref(), Some("Need 40 entries. Currently: 10"));
    assert_eq!(forecast.forecast.len(), 7);
    for day in &forecast.forecast {
        assert_eq!(day.energy, 6.0);
        assert_eq!(day.lower, 5.0);
        assert_eq!(day.upper, 7.0);
        assert_eq!(day.confidence, 0.3);
    }
    assert!(forecast.peak_days.is_empty());
    assert!(forecast.low_days.is_empty());
}

#[test]
fn weekday_energy_pattern_drives_forecast_and_extremes() {
    // Six full weeks: Mondays at 8, Tuesdays at 4, everything else at 6.
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    for i in 1..=42i64 {
        let d = today - chrono::Duration::days(i);
        let energy = match d.format("%A").to_string().as_str() {
            "Monday" => 8.0,
            "Tuesday" => 4.0,
            _ => 6.0,
        };
        store.add_journal(
            USER,
            JournalEntry {
                entry_date: d,
                mood: None,
                energy_level: Some(energy),
                stress_level: None,
                sleep_hours: None,
            },
        );
    }

    let forecast = engine(store, constant_learner(0.0))
        .forecast_energy(USER, today, 7)
        .unwrap();

    assert_eq!(forecast.method, PredictionMethod::DayOfWeekAverage);
    assert_eq!(forecast.forecast.len(), 7);
    let monday = forecast
        .forecast
        .iter()
        .find(|d| d.day == "Monday")
        .unwrap();
    assert_eq!(monday.energy, 8.0);
    // Zero within-weekday variance collapses the band.
    assert_eq!(monday.lower, 8.0);
    assert_eq!(monday.upper, 8.0);
    assert!((monday.confidence - 42.0 / 90.0).abs() < 1e-12);

    assert_eq!(forecast.peak_days.len(), 2);
    assert_eq!(forecast.low_days.len(), 2);
    assert!(forecast.peak_days.contains(&"Mon".to_string()));
    assert!(forecast.low_days.contains(&"Tue".to_string()));
    assert!((forecast.overall_average - 6.0).abs() < 1e-12);
}

#[test]
fn energy_bands_are_clamped_to_scale() {
    let today = date(2026, 8, 24);
    let mut store = MemoryDataStore::new();
    // Alternate extremes within each weekday so the std band would
    // otherwise escape the 1..=10 scale.
    for i in 1..=56i64 {
        let d = today - chrono::Duration::days(i);
        let energy = if (i / 7) % 2 == 0 { 10.0 } else { 1.0 };
        store.add_journal(
            USER,
            JournalEntry {
                entry_date: d,
                mood: None,
                energy_level: Some(energy),
                stress_level: None,
                sleep_hours: None,
            },
        );
    }

    let forecast = engine(store, constant_learner(0.0))
        .forecast_energy(USER, today, 7)
        .unwrap();

    for day in &forecast.forecast {
        assert!(day.lower >= 1.0, "lower {} out of scale", day.lower);
        assert!(day.upper <= 10.0, "upper {} out of scale", day.upper);
        assert!(day.lower <= day.upper);
    }
}

// --- Data status ---

#[test]
fn data_status_bands_follow_journal_count() {
    let today = date(2026, 8, 24);

    let empty = engine(MemoryDataStore::new(), constant_learner(0.0))
        .data_status(USER)
        .unwrap();
    assert_eq!(empty.strategy, StrategyLabel::DataCollection);
    assert_eq!(empty.confidence_level, ConfidenceLevel::None);
    assert!(!empty.predictions_available);

    let mut store = MemoryDataStore::new();
    for i in 1..=50i64 {
        store.add_journal(
            USER,
            JournalEntry {
                entry_date: today - chrono::Duration::days(i),
                mood: None,
                energy_level: None,
                stress_level: None,
                sleep_hours: Some(7.0),
            },
        );
    }
    let simple = engine(store, constant_learner(0.0)).data_status(USER).unwrap();
    assert_eq!(simple.strategy, StrategyLabel::SimpleModels);
    assert_eq!(simple.confidence_level, ConfidenceLevel::Low);
    assert!(simple.predictions_available);
    assert_eq!(simple.journal_entries, 50);

    let mut store = MemoryDataStore::new();
    for i in 1..=400i64 {
        store.add_journal(
            USER,
            JournalEntry {
                entry_date: today - chrono::Duration::days(i),
                mood: None,
                energy_level: None,
                stress_level: None,
                sleep_hours: Some(7.0),
            },
        );
    }
    let advanced = engine(store, constant_learner(0.0)).data_status(USER).unwrap();
    assert_eq!(advanced.strategy, StrategyLabel::AdvancedMl);
    assert_eq!(advanced.confidence_level, ConfidenceLevel::High);
}
