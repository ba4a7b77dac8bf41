//! CausalEstimator — dispatches between the backdoor-adjusted and
//! stratified estimators and shapes every failure as a structured result.

use tracing::warn;

use pulse_core::config::CausalConfig;
use pulse_core::errors::CausalError;
use pulse_core::models::{CausalAnalysis, CausalFailure};
use pulse_core::records::{DailyRecord, Feature};

use crate::{backdoor, stratified};

pub struct CausalEstimator<'a> {
    config: &'a CausalConfig,
}

impl<'a> CausalEstimator<'a> {
    pub fn new(config: &'a CausalConfig) -> Self {
        Self { config }
    }

    /// Effect estimate for `treatment -> outcome` over a dataset snapshot.
    ///
    /// Never errors: data problems come back as the `{error, message}`
    /// failure shape, and a backdoor failure degrades to stratification
    /// with a warning.
    pub fn analyze(
        &self,
        dataset: &[DailyRecord],
        treatment: Feature,
        outcome: Feature,
    ) -> CausalAnalysis {
        if dataset.len() < self.config.min_dataset {
            return CausalAnalysis::Failure(CausalFailure {
                error: "Insufficient data".to_string(),
                message: Some(format!(
                    "Need at least {} days of data for causal analysis.",
                    self.config.min_dataset
                )),
                sample_size: Some(dataset.len()),
            });
        }

        let valid: Vec<&DailyRecord> = dataset
            .iter()
            .filter(|r| r.feature(treatment).is_some() && r.feature(outcome).is_some())
            .collect();
        if valid.len() < self.config.min_valid_pairs {
            return CausalAnalysis::Failure(CausalFailure {
                error: "Insufficient valid data".to_string(),
                message: Some(format!(
                    "Only {} days have both '{treatment}' and '{outcome}' data.",
                    valid.len()
                )),
                sample_size: None,
            });
        }

        if self.config.backdoor_enabled {
            match backdoor::estimate(&valid, treatment, outcome, self.config) {
                Ok(estimate) => return CausalAnalysis::Estimate(Box::new(estimate)),
                Err(error) => {
                    warn!(%treatment, %outcome, %error, "backdoor adjustment failed, falling back to stratified");
                }
            }
        }

        let pairs: Vec<(f64, f64)> = valid
            .iter()
            .filter_map(|r| Some((r.feature(treatment)?, r.feature(outcome)?)))
            .collect();

        match stratified::estimate(&pairs, treatment, outcome) {
            Ok(estimate) => CausalAnalysis::Estimate(Box::new(estimate)),
            Err(CausalError::CannotStratify) => CausalAnalysis::Failure(CausalFailure {
                error: "Cannot stratify data — all values on one side of median.".to_string(),
                message: None,
                sample_size: None,
            }),
            Err(error) => CausalAnalysis::Failure(CausalFailure {
                error: error.to_string(),
                message: None,
                sample_size: None,
            }),
        }
    }
}
