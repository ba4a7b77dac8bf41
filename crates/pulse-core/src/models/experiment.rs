use serde::{Deserialize, Serialize};

use crate::records::Feature;

/// A standardized two-week self-experiment derived from a significant
/// correlation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentSuggestion {
    pub variable: Feature,
    pub correlation_with_mood: f64,
    pub hypothesis: String,
    pub protocol: String,
    pub duration_days: u32,
    pub measurement: String,
}
