use serde::{Deserialize, Serialize};

use crate::records::Feature;

/// Estimation method that produced a causal estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausalMethod {
    /// Median-split comparison of outcome means.
    StratifiedAnalysis,
    /// OLS regression of outcome on treatment plus measured confounders.
    BackdoorAdjustment,
}

/// Cohen's d magnitude classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectMagnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectMagnitude {
    /// Classify |d|: ≥0.8 large, ≥0.5 medium, ≥0.2 small, else negligible.
    pub fn classify(d: f64) -> Self {
        let d_abs = d.abs();
        if d_abs >= 0.8 {
            Self::Large
        } else if d_abs >= 0.5 {
            Self::Medium
        } else if d_abs >= 0.2 {
            Self::Small
        } else {
            Self::Negligible
        }
    }
}

/// A quasi-causal effect estimate for one (treatment, outcome) pair.
///
/// Both methods report the median-split descriptive block; for the
/// backdoor method `estimated_effect` is the adjusted treatment
/// coefficient rather than the raw group difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalEstimate {
    pub method: CausalMethod,
    pub treatment: Feature,
    pub outcome: Feature,
    pub median_split: f64,
    pub estimated_effect: f64,
    pub effect_size_cohens_d: f64,
    pub effect_magnitude: EffectMagnitude,
    pub high_group_mean: f64,
    pub low_group_mean: f64,
    pub high_group_n: usize,
    pub low_group_n: usize,
    /// Confounders controlled by the backdoor adjustment, when used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confounders_controlled: Option<Vec<Feature>>,
    pub interpretation: String,
    /// Always present: this is observational, not a controlled experiment.
    pub caution: String,
}

/// Structured causal failure — insufficient data, a degenerate split, or a
/// structurally invalid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,
}

/// Outcome of a causal analysis call. Serializes to either the estimate
/// shape or the `{error, message}` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CausalAnalysis {
    Estimate(Box<CausalEstimate>),
    Failure(CausalFailure),
}

impl CausalAnalysis {
    pub fn estimate(&self) -> Option<&CausalEstimate> {
        match self {
            Self::Estimate(e) => Some(e),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&CausalFailure> {
        match self {
            Self::Estimate(_) => None,
            Self::Failure(f) => Some(f),
        }
    }
}
