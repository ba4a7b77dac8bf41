//! Mood prediction strategies: recent average, day-of-week baseline, and
//! the regression-tree ensemble.

use chrono::{Datelike, Duration, NaiveDate};

use pulse_core::config::{ConfidenceConfig, WindowConfig};
use pulse_core::constants::{MOOD_MODEL_FEATURES, NEUTRAL_LEVEL, NEUTRAL_MOOD};
use pulse_core::errors::{PulseResult, TrainingError};
use pulse_core::models::{PredictionMethod, PredictionResult};
use pulse_core::records::{MoodLog, UserId};
use pulse_core::stats;
use pulse_core::traits::{DataStore, EnsembleLearner};

use super::weekday_name;

/// Short-window mood average used by the Baseline tier.
pub struct RecentAverageStrategy;

impl RecentAverageStrategy {
    /// Mean mood over the last `recent_mood_days`, or the neutral default
    /// when that window is empty.
    pub fn predict(
        store: &dyn DataStore,
        user: UserId,
        today: NaiveDate,
        windows: &WindowConfig,
    ) -> PulseResult<f64> {
        let from = today - Duration::days(i64::from(windows.recent_mood_days));
        let recent = store.mood_logs(user, from, today)?;
        let values: Vec<f64> = recent.iter().map(|m| m.mood_value).collect();
        Ok(stats::mean(&values).unwrap_or(NEUTRAL_MOOD))
    }
}

/// Day-of-week baseline with overall-average and neutral-default fallbacks.
pub struct WeekdayBaselineStrategy;

impl WeekdayBaselineStrategy {
    /// `use_prediction` is left `false`; the engine applies its threshold.
    pub fn predict(
        logs: &[MoodLog],
        target_date: NaiveDate,
        confidence: &ConfidenceConfig,
    ) -> PredictionResult {
        let target_dow = target_date.weekday();
        let day = weekday_name(target_dow);

        let matching: Vec<f64> = logs
            .iter()
            .filter(|m| m.log_date.weekday() == target_dow)
            .map(|m| m.mood_value)
            .collect();

        if let Some(avg) = stats::mean(&matching) {
            return PredictionResult {
                prediction: avg,
                confidence: confidence.scaled(
                    matching.len(),
                    confidence.weekday_mood_divisor,
                    confidence.weekday_mood_ceiling,
                ),
                method: PredictionMethod::DayOfWeekAverage,
                message: None,
                factors: vec![
                    format!("Based on {} past {day}s", matching.len()),
                    format!("Average mood on {day}: {avg:.1}/10"),
                ],
                use_prediction: false,
                streak: None,
            };
        }

        let all: Vec<f64> = logs.iter().map(|m| m.mood_value).collect();
        if let Some(avg) = stats::mean(&all) {
            return PredictionResult {
                prediction: avg,
                confidence: confidence.scaled(
                    all.len(),
                    confidence.overall_mood_divisor,
                    confidence.overall_mood_ceiling,
                ),
                method: PredictionMethod::OverallAverage,
                message: None,
                factors: vec![format!("Overall average: {avg:.1}/10")],
                use_prediction: false,
                streak: None,
            };
        }

        PredictionResult {
            prediction: NEUTRAL_MOOD,
            confidence: confidence.default_mood,
            method: PredictionMethod::Default,
            message: None,
            factors: vec!["No historical data".to_string()],
            use_prediction: false,
            streak: None,
        }
    }
}

/// Ensemble-tier mood prediction: fit on {weekday, month, energy, stress},
/// predict the target date with neutral energy/stress defaults.
pub struct EnsembleStrategy;

impl EnsembleStrategy {
    pub fn predict(
        learner: &dyn EnsembleLearner,
        logs: &[MoodLog],
        target_date: NaiveDate,
        confidence: f64,
    ) -> Result<PredictionResult, TrainingError> {
        let features: Vec<Vec<f64>> = logs.iter().map(feature_row).collect();
        let targets: Vec<f64> = logs.iter().map(|m| m.mood_value).collect();

        let model = learner.fit(&features, &targets, None)?;
        let prediction = model.predict(&target_row(target_date));

        let mut ranked: Vec<(&str, f64)> = MOOD_MODEL_FEATURES
            .iter()
            .copied()
            .zip(model.feature_importances())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(PredictionResult {
            prediction,
            confidence,
            method: PredictionMethod::RandomForest,
            message: None,
            factors: ranked
                .iter()
                .map(|(name, imp)| format!("{name}: {:.0}% importance", imp * 100.0))
                .collect(),
            use_prediction: true,
            streak: None,
        })
    }
}

/// Training row for one mood log, in `MOOD_MODEL_FEATURES` column order.
pub fn feature_row(log: &MoodLog) -> Vec<f64> {
    vec![
        f64::from(log.log_date.weekday().num_days_from_monday()),
        f64::from(log.log_date.month()),
        log.energy_level.unwrap_or(NEUTRAL_LEVEL),
        log.stress_level.unwrap_or(NEUTRAL_LEVEL),
    ]
}

/// Prediction row for a target date (neutral energy/stress).
pub fn target_row(date: NaiveDate) -> Vec<f64> {
    vec![
        f64::from(date.weekday().num_days_from_monday()),
        f64::from(date.month()),
        NEUTRAL_LEVEL,
        NEUTRAL_LEVEL,
    ]
}
