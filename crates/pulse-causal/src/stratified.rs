//! Median-split stratified effect estimation.

use pulse_core::errors::CausalError;
use pulse_core::models::{CausalEstimate, CausalMethod, EffectMagnitude};
use pulse_core::records::Feature;
use pulse_core::stats;

use crate::interpret;

/// Outcome values split on the treatment median.
pub(crate) struct MedianSplit {
    pub median: f64,
    /// Outcomes where treatment >= median.
    pub high: Vec<f64>,
    /// Outcomes where treatment < median.
    pub low: Vec<f64>,
}

/// Splits (treatment, outcome) pairs on the treatment median. Errors when
/// every value lands on one side, which a degenerate (constant) treatment
/// series always does.
pub(crate) fn median_split(pairs: &[(f64, f64)]) -> Result<MedianSplit, CausalError> {
    let treatments: Vec<f64> = pairs.iter().map(|(t, _)| *t).collect();
    let median = stats::median(&treatments).ok_or(CausalError::CannotStratify)?;

    let high: Vec<f64> = pairs
        .iter()
        .filter(|(t, _)| *t >= median)
        .map(|(_, o)| *o)
        .collect();
    let low: Vec<f64> = pairs
        .iter()
        .filter(|(t, _)| *t < median)
        .map(|(_, o)| *o)
        .collect();

    if high.is_empty() || low.is_empty() {
        return Err(CausalError::CannotStratify);
    }
    Ok(MedianSplit { median, high, low })
}

/// Stratified estimate: effect is the difference of group outcome means,
/// standardized by the pooled within-group deviation.
pub(crate) fn estimate(
    pairs: &[(f64, f64)],
    treatment: Feature,
    outcome: Feature,
) -> Result<CausalEstimate, CausalError> {
    let split = median_split(pairs)?;

    // Both groups are non-empty here, so the means exist.
    let high_mean = stats::mean(&split.high).unwrap_or(0.0);
    let low_mean = stats::mean(&split.low).unwrap_or(0.0);
    let effect = high_mean - low_mean;

    let pooled_std = ((stats::std_dev(&split.high).powi(2)
        + stats::std_dev(&split.low).powi(2))
        / 2.0)
        .sqrt();
    let cohens_d = if pooled_std > 0.0 {
        effect / pooled_std
    } else {
        0.0
    };

    Ok(CausalEstimate {
        method: CausalMethod::StratifiedAnalysis,
        treatment,
        outcome,
        median_split: split.median,
        estimated_effect: effect,
        effect_size_cohens_d: cohens_d,
        effect_magnitude: EffectMagnitude::classify(cohens_d),
        high_group_mean: high_mean,
        low_group_mean: low_mean,
        high_group_n: split.high.len(),
        low_group_n: split.low.len(),
        confounders_controlled: None,
        interpretation: interpret::interpret_effect(treatment, outcome, effect, cohens_d),
        caution: interpret::STRATIFIED_CAUTION.to_string(),
    })
}
