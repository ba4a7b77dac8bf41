//! Fixed "what if" scenarios projected from univariate linear fits.
//!
//! Each scenario regresses mood on one treatment via the correlation
//! slope r·σ_mood/σ_treatment and extrapolates to a fixed reference point.
//! Scenarios with too few pairs, a degenerate treatment series, or a
//! near-zero slope are simply not emitted.

use pulse_core::config::CounterfactualConfig;
use pulse_core::constants::{SCALE_MAX, SCALE_MIN};
use pulse_core::models::{ConfidenceLabel, Counterfactual, CounterfactualKind};
use pulse_core::records::DailyRecord;
use pulse_core::stats;

pub struct CounterfactualGenerator<'a> {
    config: &'a CounterfactualConfig,
}

struct LinearFit {
    slope: f64,
    avg_treatment: f64,
    avg_mood: f64,
    pairs: usize,
}

impl<'a> CounterfactualGenerator<'a> {
    pub fn new(config: &'a CounterfactualConfig) -> Self {
        Self { config }
    }

    /// All emittable scenarios for a dataset snapshot, in the fixed order
    /// sleep, habits, deep work.
    pub fn generate(&self, dataset: &[DailyRecord]) -> Vec<Counterfactual> {
        if dataset.len() < self.config.min_dataset {
            return Vec::new();
        }

        [
            self.sleep(dataset),
            self.habits(dataset),
            self.deep_work(dataset),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn sleep(&self, dataset: &[DailyRecord]) -> Option<Counterfactual> {
        // Days with zero recorded sleep are treated as unrecorded.
        let pairs: Vec<(f64, f64)> = dataset
            .iter()
            .filter_map(|r| {
                let sleep = r.sleep_hours.filter(|s| *s != 0.0)?;
                Some((sleep, r.mood))
            })
            .collect();

        let fit = self.fit(&pairs, self.config.scale_slope_epsilon)?;
        let target = self.config.sleep_target_hours;
        let predicted = self.project(&fit, target);

        Some(Counterfactual {
            kind: CounterfactualKind::Sleep,
            scenario: format!(
                "If you consistently slept {target:.0} hours instead of your average {:.1} hours",
                fit.avg_treatment
            ),
            current_avg: fit.avg_mood,
            predicted_avg: predicted,
            change: predicted - fit.avg_mood,
            confidence: self.label(fit.pairs),
        })
    }

    fn habits(&self, dataset: &[DailyRecord]) -> Option<Counterfactual> {
        let pairs: Vec<(f64, f64)> = dataset
            .iter()
            .map(|r| (f64::from(r.habits_completed), r.mood))
            .collect();

        let fit = self.fit(&pairs, self.config.scale_slope_epsilon)?;
        let max_habits = pairs
            .iter()
            .map(|(h, _)| *h)
            .fold(f64::NEG_INFINITY, f64::max);
        if max_habits <= fit.avg_treatment {
            return None;
        }
        let predicted = self.project(&fit, max_habits);

        Some(Counterfactual {
            kind: CounterfactualKind::Habits,
            scenario: format!(
                "If you completed {max_habits:.0} habits daily instead of your average {:.1}",
                fit.avg_treatment
            ),
            current_avg: fit.avg_mood,
            predicted_avg: predicted,
            change: predicted - fit.avg_mood,
            confidence: self.label(fit.pairs),
        })
    }

    fn deep_work(&self, dataset: &[DailyRecord]) -> Option<Counterfactual> {
        // Zero-minute days count as "no deep work tracked", not as data.
        let pairs: Vec<(f64, f64)> = dataset
            .iter()
            .filter(|r| r.deep_work_minutes > 0)
            .map(|r| (f64::from(r.deep_work_minutes), r.mood))
            .collect();

        let fit = self.fit(&pairs, self.config.minutes_slope_epsilon)?;
        let target = self.config.deep_work_target_minutes;
        let predicted = self.project(&fit, target);

        Some(Counterfactual {
            kind: CounterfactualKind::DeepWork,
            scenario: format!(
                "If you did {target:.0} min of deep work daily instead of {:.0} min",
                fit.avg_treatment
            ),
            current_avg: fit.avg_mood,
            predicted_avg: predicted,
            change: predicted - fit.avg_mood,
            confidence: self.label(fit.pairs),
        })
    }

    /// Univariate fit of mood on one treatment; `None` when the scenario
    /// should not be emitted.
    fn fit(&self, pairs: &[(f64, f64)], epsilon: f64) -> Option<LinearFit> {
        if pairs.len() < self.config.min_pairs {
            return None;
        }
        let treatments: Vec<f64> = pairs.iter().map(|(t, _)| *t).collect();
        let moods: Vec<f64> = pairs.iter().map(|(_, m)| *m).collect();

        let r = stats::pearson(&treatments, &moods)?;
        let slope = r * stats::std_dev(&moods) / stats::std_dev(&treatments);
        if slope.abs() < epsilon {
            return None;
        }

        Some(LinearFit {
            slope,
            avg_treatment: stats::mean(&treatments)?,
            avg_mood: stats::mean(&moods)?,
            pairs: pairs.len(),
        })
    }

    fn project(&self, fit: &LinearFit, target: f64) -> f64 {
        (fit.avg_mood + fit.slope * (target - fit.avg_treatment)).clamp(SCALE_MIN, SCALE_MAX)
    }

    fn label(&self, pairs: usize) -> ConfidenceLabel {
        if pairs >= self.config.moderate_confidence_pairs {
            ConfidenceLabel::Moderate
        } else {
            ConfidenceLabel::Low
        }
    }
}
