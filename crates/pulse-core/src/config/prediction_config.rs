use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-domain minimum sample counts below which only baseline strategies
/// are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinSamples {
    pub mood: usize,
    pub habit: usize,
    pub energy: usize,
    /// Reserved for decision-support predictions; no current consumer.
    pub decision: usize,
}

impl Default for MinSamples {
    fn default() -> Self {
        Self {
            mood: defaults::MIN_SAMPLES_MOOD,
            habit: defaults::MIN_SAMPLES_HABIT,
            energy: defaults::MIN_SAMPLES_ENERGY,
            decision: defaults::MIN_SAMPLES_DECISION,
        }
    }
}

/// Lookback windows and horizons, in days unless noted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub recent_mood_days: u32,
    pub correlation_days: u32,
    pub causal_days: u32,
    pub counterfactual_days: u32,
    pub experiment_days: u32,
    /// Maximum number of recent journal entries consulted by the forecaster.
    pub energy_history_limit: usize,
    pub forecast_horizon_days: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            recent_mood_days: defaults::RECENT_MOOD_DAYS,
            correlation_days: defaults::CORRELATION_DAYS,
            causal_days: defaults::CAUSAL_DAYS,
            counterfactual_days: defaults::COUNTERFACTUAL_DAYS,
            experiment_days: defaults::EXPERIMENT_DAYS,
            energy_history_limit: defaults::ENERGY_HISTORY_LIMIT,
            forecast_horizon_days: defaults::FORECAST_HORIZON_DAYS,
        }
    }
}

/// Confidence constants, ceilings, and the sample-size divisors that scale
/// confidence with available history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub baseline: f64,
    pub default_mood: f64,
    pub ensemble: f64,
    pub advanced_ensemble: f64,
    /// `use_prediction` is set when confidence reaches this threshold.
    pub use_prediction_threshold: f64,
    pub weekday_mood_divisor: f64,
    pub weekday_mood_ceiling: f64,
    pub overall_mood_divisor: f64,
    pub overall_mood_ceiling: f64,
    pub habit_baseline_divisor: f64,
    pub habit_baseline_ceiling: f64,
    pub habit_history_divisor: f64,
    pub habit_ceiling: f64,
    pub energy_divisor: f64,
    pub energy_ceiling: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            baseline: defaults::BASELINE_CONFIDENCE,
            default_mood: defaults::DEFAULT_MOOD_CONFIDENCE,
            ensemble: defaults::ENSEMBLE_CONFIDENCE,
            advanced_ensemble: defaults::ADVANCED_ENSEMBLE_CONFIDENCE,
            use_prediction_threshold: defaults::USE_PREDICTION_THRESHOLD,
            weekday_mood_divisor: defaults::WEEKDAY_MOOD_DIVISOR,
            weekday_mood_ceiling: defaults::WEEKDAY_MOOD_CEILING,
            overall_mood_divisor: defaults::OVERALL_MOOD_DIVISOR,
            overall_mood_ceiling: defaults::OVERALL_MOOD_CEILING,
            habit_baseline_divisor: defaults::HABIT_BASELINE_DIVISOR,
            habit_baseline_ceiling: defaults::HABIT_BASELINE_CEILING,
            habit_history_divisor: defaults::HABIT_HISTORY_DIVISOR,
            habit_ceiling: defaults::HABIT_CEILING,
            energy_divisor: defaults::ENERGY_DIVISOR,
            energy_ceiling: defaults::ENERGY_CEILING,
        }
    }
}

impl ConfidenceConfig {
    /// Sample-size-scaled confidence: `min(n / divisor, ceiling)`.
    pub fn scaled(&self, n: usize, divisor: f64, ceiling: f64) -> f64 {
        (n as f64 / divisor).min(ceiling)
    }
}
