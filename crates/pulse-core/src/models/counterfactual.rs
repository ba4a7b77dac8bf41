use serde::{Deserialize, Serialize};

/// Which fixed scenario a counterfactual projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterfactualKind {
    Sleep,
    Habits,
    DeepWork,
}

/// Qualitative confidence label for a counterfactual projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    Low,
    Moderate,
}

/// A "what if X were different" mood projection from a univariate linear
/// relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterfactual {
    #[serde(rename = "type")]
    pub kind: CounterfactualKind,
    pub scenario: String,
    pub current_avg: f64,
    /// Clamped to the mood scale [1, 10].
    pub predicted_avg: f64,
    pub change: f64,
    pub confidence: ConfidenceLabel,
}
