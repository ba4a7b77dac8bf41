//! PredictionEngine — tier dispatch over the per-domain strategies.
//!
//! The engine owns the only `DataStore` queries in this crate and the only
//! fallback policy: an ensemble failure degrades to the Simple tier with a
//! warning, it never surfaces to the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use pulse_core::config::PulseConfig;
use pulse_core::errors::PulseResult;
use pulse_core::models::{
    ConfidenceLevel, DataStatus, EnergyForecast, PredictionMethod, PredictionResult, StrategyLabel,
};
use pulse_core::records::UserId;
use pulse_core::traits::{DataStore, EnsembleLearner};

use crate::selector::{Domain, StrategySelector, Tier, ADVANCED_MIN, ENSEMBLE_MIN};
use crate::strategies::energy::EnergyForecaster;
use crate::strategies::habit::{HistoricalBaselineStrategy, OverallRateStrategy};
use crate::strategies::mood::{EnsembleStrategy, RecentAverageStrategy, WeekdayBaselineStrategy};

pub struct PredictionEngine {
    store: Arc<dyn DataStore>,
    learner: Arc<dyn EnsembleLearner>,
    config: PulseConfig,
    selector: StrategySelector,
}

impl PredictionEngine {
    pub fn new(
        store: Arc<dyn DataStore>,
        learner: Arc<dyn EnsembleLearner>,
        config: PulseConfig,
    ) -> Self {
        let selector = StrategySelector::new(config.min_samples.clone());
        Self {
            store,
            learner,
            config,
            selector,
        }
    }

    /// Mood prediction for `target_date`, with `today` anchoring the
    /// recent-history window.
    pub fn predict_mood(
        &self,
        user: UserId,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> PulseResult<PredictionResult> {
        let n = self.store.mood_log_count(user)?;
        let minimum = self.selector.minimum(Domain::Mood);

        match self.selector.select(Domain::Mood, n) {
            Tier::Baseline => {
                let avg = RecentAverageStrategy::predict(
                    self.store.as_ref(),
                    user,
                    today,
                    &self.config.windows,
                )?;
                Ok(PredictionResult {
                    prediction: avg,
                    confidence: self.config.confidence.baseline,
                    method: PredictionMethod::SimpleAverage,
                    message: Some(format!("Need {minimum} entries. Currently: {n}")),
                    factors: vec!["Insufficient data - using average".to_string()],
                    use_prediction: false,
                    streak: None,
                })
            }
            Tier::Simple => {
                let logs = self.store.all_mood_logs(user)?;
                Ok(self.thresholded(WeekdayBaselineStrategy::predict(
                    &logs,
                    target_date,
                    &self.config.confidence,
                )))
            }
            tier @ (Tier::Ensemble | Tier::AdvancedEnsemble) => {
                let logs = self.store.all_mood_logs(user)?;
                let confidence = if tier == Tier::AdvancedEnsemble {
                    self.config.confidence.advanced_ensemble
                } else {
                    self.config.confidence.ensemble
                };
                match EnsembleStrategy::predict(
                    self.learner.as_ref(),
                    &logs,
                    target_date,
                    confidence,
                ) {
                    Ok(result) => Ok(result),
                    Err(error) => {
                        warn!(user = %user, %error, "ensemble mood prediction failed, using weekday baseline");
                        Ok(self.thresholded(WeekdayBaselineStrategy::predict(
                            &logs,
                            target_date,
                            &self.config.confidence,
                        )))
                    }
                }
            }
        }
    }

    /// Habit success probability for a named habit on `target_date`,
    /// optionally conditioned on an hour of day.
    pub fn predict_habit(
        &self,
        user: UserId,
        habit_name: &str,
        target_date: NaiveDate,
        target_hour: Option<u32>,
    ) -> PulseResult<PredictionResult> {
        let Some(logs) = self.store.habit_logs(user, habit_name)? else {
            return Ok(no_data(0.5, format!("No habit found: {habit_name}")));
        };

        let minimum = self.selector.minimum(Domain::Habit);
        match self.selector.select(Domain::Habit, logs.len()) {
            Tier::Baseline if logs.is_empty() => Ok(no_data(
                0.5,
                format!("Need {minimum} logs. Currently: 0"),
            )),
            Tier::Baseline => Ok(self.thresholded(OverallRateStrategy::predict(
                &logs,
                &self.config.confidence,
            ))),
            _ => Ok(self.thresholded(HistoricalBaselineStrategy::predict(
                &logs,
                target_date,
                target_hour,
                &self.config.confidence,
            ))),
        }
    }

    /// Energy forecast for the `days_ahead` days after `today`.
    pub fn forecast_energy(
        &self,
        user: UserId,
        today: NaiveDate,
        days_ahead: u32,
    ) -> PulseResult<EnergyForecast> {
        let entries = self
            .store
            .recent_energy_entries(user, self.config.windows.energy_history_limit)?;
        let minimum = self.selector.minimum(Domain::Energy);

        if entries.len() < minimum {
            Ok(EnergyForecaster::sparse(
                &entries,
                today,
                days_ahead,
                minimum,
                &self.config.confidence,
            ))
        } else {
            Ok(EnergyForecaster::weekday_pattern(
                &entries,
                today,
                days_ahead,
                &self.config.confidence,
            ))
        }
    }

    /// Data availability report, banded by journal entry count.
    pub fn data_status(&self, user: UserId) -> PulseResult<DataStatus> {
        let mood_entries = self.store.mood_log_count(user)?;
        let journal_entries = self.store.journal_entry_count(user)?;
        let habit_logs = self.store.habit_log_count(user)?;
        let minimum = self.selector.minimum(Domain::Mood);

        let (strategy, confidence_level) = if journal_entries >= ADVANCED_MIN {
            (StrategyLabel::AdvancedMl, ConfidenceLevel::High)
        } else if journal_entries >= ENSEMBLE_MIN {
            (StrategyLabel::MlModels, ConfidenceLevel::Moderate)
        } else if journal_entries >= minimum {
            (StrategyLabel::SimpleModels, ConfidenceLevel::Low)
        } else {
            (StrategyLabel::DataCollection, ConfidenceLevel::None)
        };

        Ok(DataStatus {
            strategy,
            mood_entries,
            journal_entries,
            habit_logs,
            min_samples: self.config.min_samples.clone(),
            predictions_available: journal_entries >= minimum,
            confidence_level,
        })
    }

    fn thresholded(&self, mut result: PredictionResult) -> PredictionResult {
        result.use_prediction =
            result.confidence >= self.config.confidence.use_prediction_threshold;
        result
    }
}

fn no_data(prediction: f64, message: String) -> PredictionResult {
    PredictionResult {
        prediction,
        confidence: 0.0,
        method: PredictionMethod::NoData,
        message: Some(message),
        factors: Vec::new(),
        use_prediction: false,
        streak: None,
    }
}
