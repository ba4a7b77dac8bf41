//! Learner resolution for the ensemble tier.
//!
//! Callers never probe for the ensemble capability; they hold an
//! `Arc<dyn EnsembleLearner>` resolved here once at startup. When the
//! `forest` feature is off, the resolved learner fails every fit with
//! `LearnerUnavailable` and the prediction path degrades a tier.

use std::sync::Arc;
use std::time::Instant;

use pulse_core::config::ForestConfig;
use pulse_core::errors::TrainingError;
use pulse_core::traits::{EnsembleLearner, FittedRegressor};

#[cfg(feature = "forest")]
use crate::forest::RandomForest;

const FOREST_NAME: &str = "random_forest";

/// Fits [`RandomForest`] models with fixed hyperparameters.
#[cfg(feature = "forest")]
#[derive(Debug, Clone)]
pub struct ForestLearner {
    config: ForestConfig,
}

#[cfg(feature = "forest")]
impl ForestLearner {
    pub fn new(config: ForestConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "forest")]
impl EnsembleLearner for ForestLearner {
    fn name(&self) -> &'static str {
        FOREST_NAME
    }

    fn fit(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError> {
        let forest = RandomForest::fit(features, targets, &self.config, deadline)?;
        Ok(Box::new(forest))
    }
}

/// Registered when the ensemble capability is compiled out.
#[derive(Debug, Clone, Default)]
pub struct NoopLearner;

impl EnsembleLearner for NoopLearner {
    fn name(&self) -> &'static str {
        FOREST_NAME
    }

    fn fit(
        &self,
        _features: &[Vec<f64>],
        _targets: &[f64],
        _deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError> {
        Err(TrainingError::LearnerUnavailable { name: FOREST_NAME })
    }
}

/// Resolve the learner the build supports.
#[cfg(feature = "forest")]
pub fn resolve_learner(config: &ForestConfig) -> Arc<dyn EnsembleLearner> {
    Arc::new(ForestLearner::new(config.clone()))
}

#[cfg(not(feature = "forest"))]
pub fn resolve_learner(_config: &ForestConfig) -> Arc<dyn EnsembleLearner> {
    Arc::new(NoopLearner)
}
