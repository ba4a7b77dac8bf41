use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata the trainer supplies when persisting a model; the store fills
/// in version, locator, and the active flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSpec {
    pub model_type: String,
    pub training_date: DateTime<Utc>,
    pub training_samples: usize,
    /// Cross-validated mean absolute error, when evaluated.
    pub mae: Option<f64>,
}

/// A versioned, persisted model. Superseded, never mutated, by later
/// versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: u32,
    pub model_type: String,
    pub training_date: DateTime<Utc>,
    pub training_samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mae: Option<f64>,
    /// Where the model blob lives (store-specific).
    pub locator: String,
    pub active: bool,
}

/// Result of training one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub model: String,
    pub version: u32,
    pub samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mae: Option<f64>,
}

/// Outcome of training one model within a retrain request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOutcome {
    pub model: String,
    pub status: TrainStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<TrainingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    Success,
    Error,
}

/// Result of a retrain request covering one or more models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrainSummary {
    pub trained_at: DateTime<Utc>,
    pub results: Vec<TrainOutcome>,
}

/// Active-model inventory for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub models: Vec<ModelArtifact>,
    pub total_models: usize,
}
