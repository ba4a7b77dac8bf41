use serde::{Deserialize, Serialize};

use super::defaults;

/// Correlation analysis thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Minimum paired (mood, feature) samples for a feature to be scored.
    pub min_pairs: usize,
    /// Minimum daily records for any correlation output at all.
    pub min_dataset: usize,
    /// |t| threshold for the significance flag (≈ p < 0.05 for moderate n).
    pub significance_t: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_pairs: defaults::CORRELATION_MIN_PAIRS,
            min_dataset: defaults::CORRELATION_MIN_DATASET,
            significance_t: defaults::SIGNIFICANCE_T,
        }
    }
}

/// Causal estimation thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalConfig {
    /// Minimum daily records before any causal analysis is attempted.
    pub min_dataset: usize,
    /// Minimum rows with both treatment and outcome present.
    pub min_valid_pairs: usize,
    /// Attempt the backdoor-adjusted estimator before stratification.
    pub backdoor_enabled: bool,
    /// A numeric column qualifies as a confounder when at least this
    /// fraction of rows has a value for it.
    pub confounder_coverage: f64,
}

impl Default for CausalConfig {
    fn default() -> Self {
        Self {
            min_dataset: defaults::CAUSAL_MIN_DATASET,
            min_valid_pairs: defaults::CAUSAL_MIN_VALID_PAIRS,
            backdoor_enabled: defaults::BACKDOOR_ENABLED,
            confounder_coverage: defaults::CONFOUNDER_COVERAGE,
        }
    }
}

/// Counterfactual projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterfactualConfig {
    pub min_dataset: usize,
    pub min_pairs: usize,
    /// Fixed reference point: "what if you slept this much".
    pub sleep_target_hours: f64,
    /// Fixed reference point: "what if you did this much deep work".
    pub deep_work_target_minutes: f64,
    /// Slope cutoff below which a scale-valued scenario is not emitted.
    pub scale_slope_epsilon: f64,
    /// Slope cutoff for minute-valued treatments (larger treatment scale).
    pub minutes_slope_epsilon: f64,
    /// Pairs required for the "moderate" (vs "low") confidence label.
    pub moderate_confidence_pairs: usize,
}

impl Default for CounterfactualConfig {
    fn default() -> Self {
        Self {
            min_dataset: defaults::COUNTERFACTUAL_MIN_DATASET,
            min_pairs: defaults::COUNTERFACTUAL_MIN_PAIRS,
            sleep_target_hours: defaults::SLEEP_TARGET_HOURS,
            deep_work_target_minutes: defaults::DEEP_WORK_TARGET_MINUTES,
            scale_slope_epsilon: defaults::SCALE_SLOPE_EPSILON,
            minutes_slope_epsilon: defaults::MINUTES_SLOPE_EPSILON,
            moderate_confidence_pairs: defaults::MODERATE_CONFIDENCE_PAIRS,
        }
    }
}
