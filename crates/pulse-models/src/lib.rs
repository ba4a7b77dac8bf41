//! # pulse-models
//!
//! The ensemble tier's model machinery: a deterministic bagged
//! regression-tree forest, a capability-detection learner factory, a
//! filesystem artifact store with atomic version swaps, and the offline
//! [`ModelTrainer`] that ties them together.

#[cfg(feature = "forest")]
pub mod forest;
pub mod learner;
pub mod store;
pub mod trainer;

pub use learner::resolve_learner;
pub use store::FsArtifactStore;
pub use trainer::ModelTrainer;
