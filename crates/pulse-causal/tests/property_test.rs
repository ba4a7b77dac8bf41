//! Property coverage: coefficient bounds, clamping, and determinism over
//! randomized daily datasets.

use chrono::NaiveDate;
use proptest::prelude::*;

use pulse_causal::{CausalEstimator, CorrelationEngine, CounterfactualGenerator};
use pulse_core::config::{CausalConfig, CorrelationConfig, CounterfactualConfig};
use pulse_core::records::{DailyRecord, Feature};

#[derive(Debug, Clone)]
struct DayInput {
    mood: f64,
    energy: Option<f64>,
    sleep: Option<f64>,
    habits: u32,
    deep_work: u32,
}

fn day_input() -> impl Strategy<Value = DayInput> {
    (
        1.0f64..=10.0,
        prop::option::of(1.0f64..=10.0),
        prop::option::of(0.0f64..=12.0),
        0u32..6,
        0u32..240,
    )
        .prop_map(|(mood, energy, sleep, habits, deep_work)| DayInput {
            mood,
            energy,
            sleep,
            habits,
            deep_work,
        })
}

fn to_records(inputs: &[DayInput]) -> Vec<DailyRecord> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, d)| DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
                + chrono::Duration::days(i as i64),
            mood: d.mood,
            energy: d.energy,
            stress: None,
            sleep_hours: d.sleep,
            habits_completed: d.habits,
            habits_total: d.habits,
            context_switches: 0,
            deep_work_minutes: d.deep_work,
            interruptions: 0,
            social_interactions: 0,
            avg_social_impact: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn correlations_stay_within_unit_interval(inputs in prop::collection::vec(day_input(), 0..80)) {
        let records = to_records(&inputs);
        let config = CorrelationConfig::default();
        let set = CorrelationEngine::new(&config).analyze(&records, 90);

        for c in &set.correlations {
            prop_assert!((-1.0..=1.0).contains(&c.correlation));
            prop_assert!(c.sample_size >= config.min_pairs);
        }
    }

    #[test]
    fn counterfactual_projections_stay_on_scale(inputs in prop::collection::vec(day_input(), 0..80)) {
        let records = to_records(&inputs);
        let config = CounterfactualConfig::default();

        for cf in CounterfactualGenerator::new(&config).generate(&records) {
            prop_assert!((1.0..=10.0).contains(&cf.predicted_avg));
        }
    }

    #[test]
    fn stratified_effect_equals_group_difference(inputs in prop::collection::vec(day_input(), 15..80)) {
        let records = to_records(&inputs);
        let config = CausalConfig {
            backdoor_enabled: false,
            ..CausalConfig::default()
        };
        let analysis = CausalEstimator::new(&config)
            .analyze(&records, Feature::SleepHours, Feature::Mood);

        if let Some(est) = analysis.estimate() {
            prop_assert_eq!(est.estimated_effect, est.high_group_mean - est.low_group_mean);
            prop_assert!(est.high_group_n + est.low_group_n >= config.min_valid_pairs);
        }
    }

    #[test]
    fn analysis_is_deterministic(inputs in prop::collection::vec(day_input(), 0..60)) {
        let records = to_records(&inputs);
        let corr_config = CorrelationConfig::default();
        let causal_config = CausalConfig::default();

        let engine = CorrelationEngine::new(&corr_config);
        let first = serde_json::to_vec(&engine.analyze(&records, 60)).unwrap();
        let second = serde_json::to_vec(&engine.analyze(&records, 60)).unwrap();
        prop_assert_eq!(first, second);

        let estimator = CausalEstimator::new(&causal_config);
        let a = serde_json::to_vec(&estimator.analyze(&records, Feature::SleepHours, Feature::Mood)).unwrap();
        let b = serde_json::to_vec(&estimator.analyze(&records, Feature::SleepHours, Feature::Mood)).unwrap();
        prop_assert_eq!(a, b);
    }
}
