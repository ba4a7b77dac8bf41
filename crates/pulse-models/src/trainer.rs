//! Offline model training.
//!
//! One trainer instance serves all users. A retrain for a given
//! (user, model) pair is exclusive: a second request while one is in
//! flight fails fast with `AlreadyRunning` instead of queueing, and the
//! previously active artifact stays untouched until the new version is
//! fully persisted.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use dashmap::DashMap;
use tracing::{info, warn};

use pulse_core::config::PulseConfig;
use pulse_core::errors::{PulseResult, TrainingError};
use pulse_core::models::{
    ArtifactSpec, ModelPerformance, RetrainSummary, TrainOutcome, TrainStatus, TrainingReport,
};
use pulse_core::records::UserId;
use pulse_core::traits::{ArtifactStore, DataStore, EnsembleLearner};
use pulse_prediction::strategies::mood::feature_row;

/// Artifact name of the mood model.
pub const MOOD_MODEL: &str = "mood_predictor";

/// Trains and persists per-user models.
pub struct ModelTrainer {
    store: Arc<dyn DataStore>,
    artifacts: Arc<dyn ArtifactStore>,
    learner: Arc<dyn EnsembleLearner>,
    config: PulseConfig,
    locks: DashMap<String, ()>,
}

/// Releases the per-(user, model) training lock on every exit path.
struct TrainLock<'a> {
    locks: &'a DashMap<String, ()>,
    key: String,
}

impl Drop for TrainLock<'_> {
    fn drop(&mut self) {
        self.locks.remove(&self.key);
    }
}

impl ModelTrainer {
    pub fn new(
        store: Arc<dyn DataStore>,
        artifacts: Arc<dyn ArtifactStore>,
        learner: Arc<dyn EnsembleLearner>,
        config: PulseConfig,
    ) -> Self {
        Self {
            store,
            artifacts,
            learner,
            config,
            locks: DashMap::new(),
        }
    }

    fn acquire(&self, user: UserId, model: &str) -> Result<TrainLock<'_>, TrainingError> {
        let key = format!("{user}/{model}");
        use dashmap::mapref::entry::Entry;
        match self.locks.entry(key.clone()) {
            Entry::Occupied(_) => Err(TrainingError::AlreadyRunning { key }),
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(TrainLock {
                    locks: &self.locks,
                    key,
                })
            }
        }
    }

    /// Train, evaluate, and persist a new version of the mood model.
    pub fn train_mood(&self, user: UserId) -> PulseResult<TrainingReport> {
        let _lock = self.acquire(user, MOOD_MODEL)?;

        let logs = self.store.all_mood_logs(user)?;
        let n = logs.len();
        let required = self.config.min_samples.mood;
        if n < required {
            return Err(TrainingError::InsufficientSamples {
                required,
                available: n,
            }
            .into());
        }

        let features: Vec<Vec<f64>> = logs.iter().map(feature_row).collect();
        let targets: Vec<f64> = logs.iter().map(|m| m.mood_value).collect();
        let deadline =
            Instant::now() + Duration::from_secs(self.config.training.retrain_deadline_secs);

        let mae = self.cross_validate(&features, &targets, deadline)?;
        let model = self.learner.fit(&features, &targets, Some(deadline))?;
        let blob = model.to_bytes()?;

        let spec = ArtifactSpec {
            model_type: self.learner.name().to_string(),
            training_date: Utc::now(),
            training_samples: n,
            mae: Some(mae),
        };
        let artifact = self.artifacts.put(user, MOOD_MODEL, &blob, &spec)?;

        info!(
            %user,
            model = MOOD_MODEL,
            version = artifact.version,
            samples = n,
            mae,
            "trained mood model"
        );
        Ok(TrainingReport {
            model: MOOD_MODEL.to_string(),
            version: artifact.version,
            samples: n,
            mae: Some(mae),
        })
    }

    /// Train every model for a user, reporting per-model outcomes rather
    /// than failing the whole request on the first error.
    pub fn retrain(&self, user: UserId) -> RetrainSummary {
        let results = vec![self.outcome(MOOD_MODEL, self.train_mood(user))];
        RetrainSummary {
            trained_at: Utc::now(),
            results,
        }
    }

    /// Active-model inventory for a user.
    pub fn model_performance(&self, user: UserId) -> PulseResult<ModelPerformance> {
        let models = self.artifacts.list_active(user)?;
        let total_models = models.len();
        Ok(ModelPerformance {
            models,
            total_models,
        })
    }

    fn outcome(
        &self,
        model: &str,
        result: PulseResult<TrainingReport>,
    ) -> TrainOutcome {
        match result {
            Ok(report) => TrainOutcome {
                model: model.to_string(),
                status: TrainStatus::Success,
                report: Some(report),
                message: None,
            },
            Err(error) => {
                warn!(model, %error, "model training failed");
                TrainOutcome {
                    model: model.to_string(),
                    status: TrainStatus::Error,
                    report: None,
                    message: Some(error.to_string()),
                }
            }
        }
    }

    /// Contiguous k-fold mean absolute error. The deadline is checked
    /// between folds through the learner's own estimator boundaries.
    fn cross_validate(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        deadline: Instant,
    ) -> Result<f64, TrainingError> {
        let n = features.len();
        let k = if n >= 10 {
            self.config.training.max_cv_folds.min(n / 5)
        } else {
            2
        };

        let mut total_abs_error = 0.0;
        for fold in 0..k {
            let start = fold * n / k;
            let end = (fold + 1) * n / k;

            let mut train_x = Vec::with_capacity(n - (end - start));
            let mut train_y = Vec::with_capacity(n - (end - start));
            for i in (0..n).filter(|i| *i < start || *i >= end) {
                train_x.push(features[i].clone());
                train_y.push(targets[i]);
            }

            let model = self.learner.fit(&train_x, &train_y, Some(deadline))?;
            for i in start..end {
                total_abs_error += (model.predict(&features[i]) - targets[i]).abs();
            }
        }

        Ok(total_abs_error / n as f64)
    }
}
