use crate::errors::PulseResult;
use crate::models::{
    CausalAnalysis, CorrelationSet, Counterfactual, DataStatus, EnergyForecast,
    ExperimentSuggestion, PredictionResult,
};
use crate::records::UserId;

/// Receives the shaped result objects this core produces, for HTTP
/// serialization or persistence. Implementations must not mutate results.
pub trait ResultSink: Send + Sync {
    fn accept_prediction(
        &self,
        user: UserId,
        kind: &str,
        result: &PredictionResult,
    ) -> PulseResult<()>;

    fn accept_forecast(&self, user: UserId, forecast: &EnergyForecast) -> PulseResult<()>;

    fn accept_correlations(&self, user: UserId, set: &CorrelationSet) -> PulseResult<()>;

    fn accept_causal(&self, user: UserId, analysis: &CausalAnalysis) -> PulseResult<()>;

    fn accept_counterfactuals(
        &self,
        user: UserId,
        counterfactuals: &[Counterfactual],
    ) -> PulseResult<()>;

    fn accept_experiments(
        &self,
        user: UserId,
        suggestions: &[ExperimentSuggestion],
    ) -> PulseResult<()>;

    fn accept_data_status(&self, user: UserId, status: &DataStatus) -> PulseResult<()>;
}
