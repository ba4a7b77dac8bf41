//! Pairwise correlation of every tracked feature against mood.

use pulse_core::config::CorrelationConfig;
use pulse_core::models::{CorrelationRecord, CorrelationSet, CorrelationStrength, Direction};
use pulse_core::records::{DailyRecord, Feature};
use pulse_core::stats;

pub struct CorrelationEngine<'a> {
    config: &'a CorrelationConfig,
}

impl<'a> CorrelationEngine<'a> {
    pub fn new(config: &'a CorrelationConfig) -> Self {
        Self { config }
    }

    /// Correlation table for a dataset snapshot, sorted by |r| descending.
    ///
    /// Features are skipped silently when they have too few paired samples
    /// or zero variance; they never appear with a placeholder entry. Ties
    /// in |r| keep the candidate evaluation order (the sort is stable).
    pub fn analyze(&self, dataset: &[DailyRecord], period_days: u32) -> CorrelationSet {
        if dataset.len() < self.config.min_dataset {
            return CorrelationSet {
                correlations: Vec::new(),
                sample_size: dataset.len(),
                period_days,
                message: Some(format!(
                    "Need at least {} days of data for correlation analysis.",
                    self.config.min_dataset
                )),
            };
        }

        let mut correlations = Vec::new();
        for feature in Feature::MOOD_CANDIDATES {
            if let Some(record) = self.score(dataset, feature) {
                correlations.push(record);
            }
        }

        correlations.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));

        CorrelationSet {
            correlations,
            sample_size: dataset.len(),
            period_days,
            message: None,
        }
    }

    fn score(&self, dataset: &[DailyRecord], feature: Feature) -> Option<CorrelationRecord> {
        let mut moods = Vec::new();
        let mut values = Vec::new();
        for record in dataset {
            if let Some(value) = record.feature(feature) {
                moods.push(record.mood);
                values.push(value);
            }
        }

        if moods.len() < self.config.min_pairs {
            return None;
        }

        // `pearson` rejects zero variance and non-finite results.
        let r = stats::pearson(&moods, &values)?;
        let t = t_statistic(r, moods.len());

        Some(CorrelationRecord {
            feature,
            correlation: r,
            strength: CorrelationStrength::classify(r),
            direction: Direction::of(r),
            significant: t.abs() > self.config.significance_t,
            sample_size: moods.len(),
        })
    }
}

/// t ≈ r·√((n−2)/(1−r²)); infinite for |r| = 1 so perfect correlations are
/// always significant.
fn t_statistic(r: f64, n: usize) -> f64 {
    if r.abs() < 1.0 {
        r * ((n as f64 - 2.0) / (1.0 - r * r)).sqrt()
    } else {
        f64::INFINITY
    }
}
