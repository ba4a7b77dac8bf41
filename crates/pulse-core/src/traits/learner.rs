use std::time::Instant;

use crate::errors::{PulseResult, TrainingError};

/// A trained regression model ready to serve predictions.
pub trait FittedRegressor: Send + Sync {
    /// Predict from one feature row (training column order).
    fn predict(&self, features: &[f64]) -> f64;

    /// Per-feature importance, training column order, summing to 1 when
    /// any split occurred.
    fn feature_importances(&self) -> Vec<f64>;

    /// Serialize to the versioned artifact blob format.
    fn to_bytes(&self) -> PulseResult<Vec<u8>>;
}

/// Capability seam for the ensemble tier.
///
/// Resolved once at startup by a factory; when the ensemble capability is
/// not compiled in, a no-op learner is registered whose `fit` fails with
/// `LearnerUnavailable`, so the prediction path falls back a tier without
/// ever checking availability itself.
pub trait EnsembleLearner: Send + Sync {
    /// Model type label recorded in artifacts (e.g. "random_forest").
    fn name(&self) -> &'static str;

    /// Fit on the given rows. `deadline` is checked at estimator
    /// boundaries; on expiry the fit aborts with `DeadlineExceeded`.
    fn fit(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError>;
}
