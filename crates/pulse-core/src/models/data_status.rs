use serde::{Deserialize, Serialize};

use crate::config::MinSamples;

/// Which strategy band the user's journal history currently supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyLabel {
    DataCollection,
    SimpleModels,
    MlModels,
    AdvancedMl,
}

/// Qualitative confidence band for the data status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    None,
    Low,
    Moderate,
    High,
}

/// Data availability status for the adaptive prediction paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStatus {
    pub strategy: StrategyLabel,
    pub mood_entries: usize,
    pub journal_entries: usize,
    pub habit_logs: usize,
    pub min_samples: MinSamples,
    pub predictions_available: bool,
    pub confidence_level: ConfidenceLevel,
}
