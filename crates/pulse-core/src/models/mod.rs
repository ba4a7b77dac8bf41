//! Result objects produced by the analytics engines.
//!
//! These serialize to the exact JSON shapes the ResultSink contract
//! promises; key names are part of the external interface.

mod artifact;
mod causal;
mod correlation;
mod counterfactual;
mod data_status;
mod experiment;
mod forecast;
mod prediction;

pub use artifact::{
    ArtifactSpec, ModelArtifact, ModelPerformance, RetrainSummary, TrainOutcome, TrainStatus,
    TrainingReport,
};
pub use causal::{CausalAnalysis, CausalEstimate, CausalFailure, CausalMethod, EffectMagnitude};
pub use correlation::{CorrelationRecord, CorrelationSet, CorrelationStrength, Direction};
pub use counterfactual::{ConfidenceLabel, Counterfactual, CounterfactualKind};
pub use data_status::{ConfidenceLevel, DataStatus, StrategyLabel};
pub use experiment::ExperimentSuggestion;
pub use forecast::{EnergyForecast, ForecastDay};
pub use prediction::{PredictionMethod, PredictionResult};
