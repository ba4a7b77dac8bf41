use super::ArtifactError;

/// Errors from model training and retraining.
///
/// A training failure is distinct from a successful low-confidence
/// prediction: the caller always receives an explicit status, and the
/// previously active artifact is never touched.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("need {required}+ samples to train, currently {available}")]
    InsufficientSamples { required: usize, available: usize },

    #[error("retrain already in flight for {key}")]
    AlreadyRunning { key: String },

    #[error("retrain deadline exceeded")]
    DeadlineExceeded,

    #[error("learner '{name}' is unavailable")]
    LearnerUnavailable { name: &'static str },

    #[error("model fit failed: {reason}")]
    Fit { reason: String },

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
