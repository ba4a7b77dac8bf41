//! AnalyticsEngine — the single entry point over all analyses.
//!
//! Each operation follows the same control flow: pull the raw window from
//! the `DataStore`, merge it into daily records where the analysis needs
//! them, run the engine, hand the shaped result to the `ResultSink`, and
//! return it. Analyses never fail on data problems; only store and sink
//! faults propagate.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use pulse_causal::{CausalEstimator, CorrelationEngine, CounterfactualGenerator, ExperimentAdvisor};
use pulse_core::config::PulseConfig;
use pulse_core::errors::PulseResult;
use pulse_core::models::{
    CausalAnalysis, CausalFailure, CorrelationSet, Counterfactual, DataStatus, EnergyForecast,
    ExperimentSuggestion, PredictionResult,
};
use pulse_core::records::{DailyRecord, Feature, UserId};
use pulse_core::traits::{DataStore, EnsembleLearner, ResultSink};
use pulse_dataset::DatasetBuilder;
use pulse_models::resolve_learner;
use pulse_prediction::PredictionEngine;

pub struct AnalyticsEngine {
    store: Arc<dyn DataStore>,
    sink: Arc<dyn ResultSink>,
    predictions: PredictionEngine,
    config: PulseConfig,
}

impl AnalyticsEngine {
    pub fn new(
        store: Arc<dyn DataStore>,
        learner: Arc<dyn EnsembleLearner>,
        sink: Arc<dyn ResultSink>,
        config: PulseConfig,
    ) -> Self {
        let predictions = PredictionEngine::new(Arc::clone(&store), learner, config.clone());
        Self {
            store,
            sink,
            predictions,
            config,
        }
    }

    /// Construct with the learner the build supports.
    pub fn with_resolved_learner(
        store: Arc<dyn DataStore>,
        sink: Arc<dyn ResultSink>,
        config: PulseConfig,
    ) -> Self {
        let learner = resolve_learner(&config.forest);
        Self::new(store, learner, sink, config)
    }

    pub fn predict_mood(
        &self,
        user: UserId,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> PulseResult<PredictionResult> {
        let result = self.predictions.predict_mood(user, target_date, today)?;
        self.sink.accept_prediction(user, "mood", &result)?;
        Ok(result)
    }

    pub fn predict_habit(
        &self,
        user: UserId,
        habit_name: &str,
        target_date: NaiveDate,
        target_hour: Option<u32>,
    ) -> PulseResult<PredictionResult> {
        let result = self
            .predictions
            .predict_habit(user, habit_name, target_date, target_hour)?;
        self.sink.accept_prediction(user, "habit", &result)?;
        Ok(result)
    }

    /// Energy forecast over the configured horizon.
    pub fn forecast_energy(&self, user: UserId, today: NaiveDate) -> PulseResult<EnergyForecast> {
        let horizon = self.config.windows.forecast_horizon_days;
        let forecast = self.predictions.forecast_energy(user, today, horizon)?;
        self.sink.accept_forecast(user, &forecast)?;
        Ok(forecast)
    }

    pub fn data_status(&self, user: UserId) -> PulseResult<DataStatus> {
        let status = self.predictions.data_status(user)?;
        self.sink.accept_data_status(user, &status)?;
        Ok(status)
    }

    pub fn correlations(&self, user: UserId, today: NaiveDate) -> PulseResult<CorrelationSet> {
        let days = self.config.windows.correlation_days;
        let dataset = self.dataset(user, days, today)?;
        let set = CorrelationEngine::new(&self.config.correlation).analyze(&dataset, days);
        self.sink.accept_correlations(user, &set)?;
        Ok(set)
    }

    /// Causal effect estimate for a named treatment/outcome pair.
    ///
    /// Variable names arrive as strings from the outer layer; an unknown
    /// name is a structured failure, not a fault.
    pub fn causal_analysis(
        &self,
        user: UserId,
        treatment: &str,
        outcome: &str,
        today: NaiveDate,
    ) -> PulseResult<CausalAnalysis> {
        let analysis = match (parse_variable(treatment), parse_variable(outcome)) {
            (Ok(treatment), Ok(outcome)) => {
                let dataset = self.dataset(user, self.config.windows.causal_days, today)?;
                CausalEstimator::new(&self.config.causal).analyze(&dataset, treatment, outcome)
            }
            (Err(failure), _) | (_, Err(failure)) => {
                warn!(user = %user, treatment, outcome, "causal analysis requested for unknown variable");
                CausalAnalysis::Failure(failure)
            }
        };
        self.sink.accept_causal(user, &analysis)?;
        Ok(analysis)
    }

    pub fn counterfactuals(
        &self,
        user: UserId,
        today: NaiveDate,
    ) -> PulseResult<Vec<Counterfactual>> {
        let dataset = self.dataset(user, self.config.windows.counterfactual_days, today)?;
        let counterfactuals = CounterfactualGenerator::new(&self.config.counterfactual)
            .generate(&dataset);
        self.sink.accept_counterfactuals(user, &counterfactuals)?;
        Ok(counterfactuals)
    }

    /// Self-experiment suggestions derived from the experiment-window
    /// correlation table.
    pub fn experiments(
        &self,
        user: UserId,
        today: NaiveDate,
    ) -> PulseResult<Vec<ExperimentSuggestion>> {
        let days = self.config.windows.experiment_days;
        let dataset = self.dataset(user, days, today)?;
        let correlations = CorrelationEngine::new(&self.config.correlation).analyze(&dataset, days);
        let suggestions = ExperimentAdvisor::suggest(&correlations);
        self.sink.accept_experiments(user, &suggestions)?;
        Ok(suggestions)
    }

    fn dataset(
        &self,
        user: UserId,
        days: u32,
        today: NaiveDate,
    ) -> PulseResult<Vec<DailyRecord>> {
        DatasetBuilder::new(self.store.as_ref()).build(user, days, today)
    }
}

fn parse_variable(name: &str) -> Result<Feature, CausalFailure> {
    name.parse().map_err(|_| CausalFailure {
        error: "Unknown variable".to_string(),
        message: Some(format!("'{name}' is not a tracked variable.")),
        sample_size: None,
    })
}
