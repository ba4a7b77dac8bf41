use serde::{Deserialize, Serialize};

use super::defaults;

/// Hyperparameters for the bagged regression-tree ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Bootstrap seed; fixed so repeated fits on the same data agree.
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: defaults::FOREST_ESTIMATORS,
            max_depth: defaults::FOREST_MAX_DEPTH,
            min_samples_split: defaults::FOREST_MIN_SAMPLES_SPLIT,
            seed: defaults::FOREST_SEED,
        }
    }
}

/// Offline training settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Default wall-clock budget for a retrain before it aborts.
    pub retrain_deadline_secs: u64,
    /// Upper bound on cross-validation folds (actual k = min(this, n/5)).
    pub max_cv_folds: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            retrain_deadline_secs: defaults::RETRAIN_DEADLINE_SECS,
            max_cv_folds: defaults::MAX_CV_FOLDS,
        }
    }
}
