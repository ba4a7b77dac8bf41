//! Error taxonomy for the Pulse workspace.
//!
//! Every analytics call recovers locally; no unhandled fault reaches the
//! boundary. These types exist for the seams where an error is the honest
//! answer: store I/O, artifact persistence, training.

mod artifact_error;
mod causal_error;
mod store_error;
mod training_error;

pub use artifact_error::ArtifactError;
pub use causal_error::CausalError;
pub use store_error::StoreError;
pub use training_error::TrainingError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Causal(#[from] CausalError),

    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("config error: {0}")]
    Config(String),
}

/// Workspace-wide result alias.
pub type PulseResult<T> = Result<T, PulseError>;
