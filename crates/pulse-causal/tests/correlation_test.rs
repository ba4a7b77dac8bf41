//! Correlation engine behavior: inclusion rules, sorting, idempotence.

use chrono::NaiveDate;

use pulse_causal::CorrelationEngine;
use pulse_core::config::CorrelationConfig;
use pulse_core::models::CorrelationStrength;
use pulse_core::records::{DailyRecord, Feature};

fn day(i: u32, mood: f64) -> DailyRecord {
    DailyRecord {
        date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(i64::from(i)),
        mood,
        energy: None,
        stress: None,
        sleep_hours: None,
        habits_completed: 0,
        habits_total: 0,
        context_switches: 0,
        deep_work_minutes: 0,
        interruptions: 0,
        social_interactions: 0,
        avg_social_impact: None,
    }
}

fn dataset() -> Vec<DailyRecord> {
    (0..15u32)
        .map(|i| {
            let mood = 4.0 + f64::from(i % 5);
            let mut r = day(i, mood);
            // Lockstep with mood.
            r.energy = Some(mood);
            // Constant: zero variance, must be excluded.
            r.stress = Some(5.0);
            // Too few pairs (4 < 5), must be excluded.
            if i < 4 {
                r.sleep_hours = Some(7.0 + f64::from(i));
            }
            // Varies, but not in lockstep.
            r.habits_completed = i % 3;
            r
        })
        .collect()
}

#[test]
fn small_dataset_yields_empty_table_with_message() {
    let config = CorrelationConfig::default();
    let records: Vec<DailyRecord> = (0..9u32).map(|i| day(i, 6.0)).collect();

    let set = CorrelationEngine::new(&config).analyze(&records, 90);

    assert!(set.correlations.is_empty());
    assert_eq!(set.sample_size, 9);
    assert_eq!(
        set.message.as_deref(),
        Some("Need at least 10 days of data for correlation analysis.")
    );
}

#[test]
fn lockstep_feature_is_strong_and_significant() {
    let config = CorrelationConfig::default();
    let set = CorrelationEngine::new(&config).analyze(&dataset(), 90);

    let energy = set
        .correlations
        .iter()
        .find(|c| c.feature == Feature::Energy)
        .unwrap();
    assert!((energy.correlation - 1.0).abs() < 1e-12);
    assert_eq!(energy.strength, CorrelationStrength::Strong);
    assert!(energy.significant);
    assert_eq!(energy.sample_size, 15);
}

#[test]
fn degenerate_features_never_appear() {
    let config = CorrelationConfig::default();
    let set = CorrelationEngine::new(&config).analyze(&dataset(), 90);

    let features: Vec<Feature> = set.correlations.iter().map(|c| c.feature).collect();
    // Constant series, under-sampled series, and all-absent series are
    // all skipped.
    assert!(!features.contains(&Feature::Stress));
    assert!(!features.contains(&Feature::SleepHours));
    assert!(!features.contains(&Feature::AvgSocialImpact));
    assert!(!features.contains(&Feature::ContextSwitches));
}

#[test]
fn table_is_sorted_by_absolute_correlation() {
    let config = CorrelationConfig::default();
    let set = CorrelationEngine::new(&config).analyze(&dataset(), 90);

    assert!(set.correlations.len() >= 2);
    assert_eq!(set.correlations[0].feature, Feature::Energy);
    for pair in set.correlations.windows(2) {
        assert!(pair[0].correlation.abs() >= pair[1].correlation.abs());
    }
    for c in &set.correlations {
        assert!((-1.0..=1.0).contains(&c.correlation));
    }
}

#[test]
fn reruns_on_unchanged_snapshot_are_byte_identical() {
    let config = CorrelationConfig::default();
    let records = dataset();
    let engine = CorrelationEngine::new(&config);

    let first = serde_json::to_vec(&engine.analyze(&records, 90)).unwrap();
    let second = serde_json::to_vec(&engine.analyze(&records, 90)).unwrap();
    assert_eq!(first, second);
}
