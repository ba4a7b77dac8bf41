use serde::{Deserialize, Serialize};

use crate::records::Feature;

/// Correlation strength classes over |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Negligible,
    Weak,
    Moderate,
    Strong,
}

impl CorrelationStrength {
    /// Classify |r|: ≥0.7 strong, ≥0.4 moderate, ≥0.2 weak, else negligible.
    pub fn classify(r: f64) -> Self {
        let r_abs = r.abs();
        if r_abs >= 0.7 {
            Self::Strong
        } else if r_abs >= 0.4 {
            Self::Moderate
        } else if r_abs >= 0.2 {
            Self::Weak
        } else {
            Self::Negligible
        }
    }
}

/// Sign of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn of(r: f64) -> Self {
        if r > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Pairwise association between one feature and mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationRecord {
    pub feature: Feature,
    /// Pearson r in [-1, 1].
    pub correlation: f64,
    pub strength: CorrelationStrength,
    pub direction: Direction,
    /// |t| above the configured threshold (≈ p < 0.05).
    pub significant: bool,
    /// Paired samples this coefficient was computed from.
    pub sample_size: usize,
}

/// Full correlation table, sorted by |r| descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationSet {
    pub correlations: Vec<CorrelationRecord>,
    /// Daily records in the analysis window.
    pub sample_size: usize,
    pub period_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
