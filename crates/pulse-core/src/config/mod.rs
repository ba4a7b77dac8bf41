//! Configuration for all Pulse subsystems.
//!
//! Every threshold the engines consult lives here with a serde default, so
//! deployments can override any of them from a TOML file. Several of the
//! confidence divisors and slope epsilons are empirical calibration
//! constants; they are named, not derived.

mod causal_config;
mod prediction_config;
mod training_config;

pub use causal_config::{CausalConfig, CorrelationConfig, CounterfactualConfig};
pub use prediction_config::{ConfidenceConfig, MinSamples, WindowConfig};
pub use training_config::{ForestConfig, TrainingConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{PulseError, PulseResult};

/// Top-level configuration aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub min_samples: MinSamples,
    pub windows: WindowConfig,
    pub confidence: ConfidenceConfig,
    pub correlation: CorrelationConfig,
    pub causal: CausalConfig,
    pub counterfactual: CounterfactualConfig,
    pub forest: ForestConfig,
    pub training: TrainingConfig,
}

impl PulseConfig {
    /// Parse a config from TOML text. Missing sections and fields fall back
    /// to defaults.
    pub fn from_toml(text: &str) -> PulseResult<Self> {
        toml::from_str(text).map_err(|e| PulseError::Config(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: &std::path::Path) -> PulseResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PulseError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }
}

/// Default values for every tunable.
pub mod defaults {
    // Per-domain minimum sample counts.
    pub const MIN_SAMPLES_MOOD: usize = 30;
    pub const MIN_SAMPLES_HABIT: usize = 20;
    pub const MIN_SAMPLES_ENERGY: usize = 40;
    /// Configured but consumed by no prediction path; reserved.
    pub const MIN_SAMPLES_DECISION: usize = 10;

    // Lookback windows (days) and limits.
    pub const RECENT_MOOD_DAYS: u32 = 7;
    pub const CORRELATION_DAYS: u32 = 90;
    pub const CAUSAL_DAYS: u32 = 90;
    pub const COUNTERFACTUAL_DAYS: u32 = 60;
    pub const EXPERIMENT_DAYS: u32 = 60;
    pub const ENERGY_HISTORY_LIMIT: usize = 90;
    pub const FORECAST_HORIZON_DAYS: u32 = 7;

    // Confidence constants and sample-size divisors.
    pub const BASELINE_CONFIDENCE: f64 = 0.3;
    pub const DEFAULT_MOOD_CONFIDENCE: f64 = 0.1;
    pub const ENSEMBLE_CONFIDENCE: f64 = 0.7;
    pub const ADVANCED_ENSEMBLE_CONFIDENCE: f64 = 0.8;
    pub const USE_PREDICTION_THRESHOLD: f64 = 0.5;
    pub const WEEKDAY_MOOD_DIVISOR: f64 = 10.0;
    pub const WEEKDAY_MOOD_CEILING: f64 = 0.8;
    pub const OVERALL_MOOD_DIVISOR: f64 = 20.0;
    pub const OVERALL_MOOD_CEILING: f64 = 0.6;
    pub const HABIT_BASELINE_DIVISOR: f64 = 30.0;
    pub const HABIT_BASELINE_CEILING: f64 = 0.8;
    pub const HABIT_HISTORY_DIVISOR: f64 = 50.0;
    pub const HABIT_CEILING: f64 = 0.9;
    pub const ENERGY_DIVISOR: f64 = 90.0;
    pub const ENERGY_CEILING: f64 = 0.9;

    // Correlation analysis.
    pub const CORRELATION_MIN_PAIRS: usize = 5;
    pub const CORRELATION_MIN_DATASET: usize = 10;
    pub const SIGNIFICANCE_T: f64 = 2.0;

    // Causal analysis.
    pub const CAUSAL_MIN_DATASET: usize = 15;
    pub const CAUSAL_MIN_VALID_PAIRS: usize = 10;
    pub const BACKDOOR_ENABLED: bool = true;
    pub const CONFOUNDER_COVERAGE: f64 = 0.5;

    // Counterfactuals.
    pub const COUNTERFACTUAL_MIN_DATASET: usize = 10;
    pub const COUNTERFACTUAL_MIN_PAIRS: usize = 5;
    pub const SLEEP_TARGET_HOURS: f64 = 8.0;
    pub const DEEP_WORK_TARGET_MINUTES: f64 = 120.0;
    /// Slope cutoff for scale-valued treatments (sleep, habits).
    pub const SCALE_SLOPE_EPSILON: f64 = 0.05;
    /// Slope cutoff for minute-valued treatments; smaller because the
    /// treatment scale is two orders of magnitude larger.
    pub const MINUTES_SLOPE_EPSILON: f64 = 0.01;
    pub const MODERATE_CONFIDENCE_PAIRS: usize = 20;

    // Ensemble model.
    pub const FOREST_ESTIMATORS: usize = 50;
    pub const FOREST_MAX_DEPTH: usize = 5;
    pub const FOREST_MIN_SAMPLES_SPLIT: usize = 5;
    pub const FOREST_SEED: u64 = 42;

    // Training.
    pub const RETRAIN_DEADLINE_SECS: u64 = 30;
    pub const MAX_CV_FOLDS: usize = 5;
}
