//! StrategySelector — total mapping from (domain, sample count) to a
//! prediction tier. The single place where `n < threshold` branching
//! lives; predictors never compare sample counts themselves.

use pulse_core::config::MinSamples;

/// Prediction domains with independent minimum-sample thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Mood,
    Habit,
    Energy,
    /// Reserved: threshold configured but consumed by no prediction path.
    Decision,
}

/// A named strategy band selected by available sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Baseline,
    Simple,
    Ensemble,
    AdvancedEnsemble,
}

/// Sample count at which the ensemble tier starts.
pub const ENSEMBLE_MIN: usize = 100;

/// Sample count at which the advanced-ensemble tier starts.
pub const ADVANCED_MIN: usize = 365;

/// Maps (domain, n) to a tier using the configured per-domain minimums.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    min_samples: MinSamples,
}

impl StrategySelector {
    pub fn new(min_samples: MinSamples) -> Self {
        Self { min_samples }
    }

    /// The domain's minimum sample count for leaving the Baseline tier.
    pub fn minimum(&self, domain: Domain) -> usize {
        match domain {
            Domain::Mood => self.min_samples.mood,
            Domain::Habit => self.min_samples.habit,
            Domain::Energy => self.min_samples.energy,
            Domain::Decision => self.min_samples.decision,
        }
    }

    /// Total: every `n` maps to exactly one tier.
    pub fn select(&self, domain: Domain, n: usize) -> Tier {
        if n < self.minimum(domain) {
            Tier::Baseline
        } else if n < ENSEMBLE_MIN {
            Tier::Simple
        } else if n < ADVANCED_MIN {
            Tier::Ensemble
        } else {
            Tier::AdvancedEnsemble
        }
    }
}
