use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PredictionMethod;

/// One forecast day with its uncertainty band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Full weekday name.
    pub day: String,
    pub energy: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence: f64,
}

/// Multi-day energy forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyForecast {
    pub forecast: Vec<ForecastDay>,
    pub method: PredictionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Two highest-energy weekdays (abbreviated), ascending by mean.
    pub peak_days: Vec<String>,
    /// Two lowest-energy weekdays (abbreviated), ascending by mean.
    pub low_days: Vec<String>,
    pub overall_average: f64,
}
