//! Trait seams between the analytics core and its collaborators.

mod artifact_store;
mod data_store;
mod learner;
mod result_sink;

pub use artifact_store::ArtifactStore;
pub use data_store::DataStore;
pub use learner::{EnsembleLearner, FittedRegressor};
pub use result_sink::ResultSink;
