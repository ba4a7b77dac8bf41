use serde::{Deserialize, Serialize};

/// How a prediction was produced, from cheapest fallback to full ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    /// Fixed neutral value; no history at all.
    Default,
    /// Short-window arithmetic mean.
    SimpleAverage,
    /// Mean restricted to the target weekday.
    DayOfWeekAverage,
    /// Mean over all history (weekday had no matches).
    OverallAverage,
    /// Combined overall / weekday / hour habit baseline.
    HistoricalBaseline,
    /// Bagged regression-tree ensemble.
    RandomForest,
    /// Overall habit completion rate (below the habit minimum).
    OverallHistorical,
    /// Nothing to predict from.
    NoData,
}

/// A point prediction with a sample-size-calibrated confidence score.
/// Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: f64,
    /// In [0, 1]; primarily a function of sample size.
    pub confidence: f64,
    pub method: PredictionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable factors behind the prediction, most important first.
    pub factors: Vec<String>,
    /// Whether the caller should act on this prediction.
    pub use_prediction: bool,
    /// Current consecutive-completion streak (habit predictions only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
}
