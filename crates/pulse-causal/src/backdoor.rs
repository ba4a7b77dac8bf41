//! Backdoor-adjusted effect estimation: OLS of the outcome on the
//! treatment plus every well-covered measured confounder.

use pulse_core::config::CausalConfig;
use pulse_core::errors::CausalError;
use pulse_core::models::{CausalEstimate, CausalMethod, EffectMagnitude};
use pulse_core::records::{DailyRecord, Feature};
use pulse_core::stats;

use crate::interpret;
use crate::stratified;

/// Adjusted estimate for `treatment -> outcome`, controlling for every
/// other feature with enough coverage in the valid rows.
///
/// Any structural problem (no usable rows, collinear design) is an error;
/// the caller decides whether to fall back to stratification.
pub(crate) fn estimate(
    rows: &[&DailyRecord],
    treatment: Feature,
    outcome: Feature,
    config: &CausalConfig,
) -> Result<CausalEstimate, CausalError> {
    let confounders = select_confounders(rows, treatment, outcome, config);

    // Regression needs every selected column present on a row.
    let usable: Vec<&&DailyRecord> = rows
        .iter()
        .filter(|r| confounders.iter().all(|c| r.feature(*c).is_some()))
        .collect();

    let coefficients = confounders.len() + 2;
    if usable.len() < coefficients.max(config.min_valid_pairs) {
        return Err(CausalError::BackdoorFailed {
            reason: format!(
                "only {} rows have all {} adjustment columns",
                usable.len(),
                confounders.len()
            ),
        });
    }

    let mut design = Vec::with_capacity(usable.len());
    let mut outcomes = Vec::with_capacity(usable.len());
    let mut pairs = Vec::with_capacity(usable.len());
    for row in &usable {
        // Presence of treatment/outcome is guaranteed by the valid-row
        // filter upstream; confounders by the filter above.
        let (Some(t), Some(o)) = (row.feature(treatment), row.feature(outcome)) else {
            continue;
        };
        let mut x = Vec::with_capacity(coefficients);
        x.push(1.0);
        x.push(t);
        for c in &confounders {
            if let Some(v) = row.feature(*c) {
                x.push(v);
            }
        }
        design.push(x);
        outcomes.push(o);
        pairs.push((t, o));
    }

    let beta = ols(&design, &outcomes).ok_or_else(|| CausalError::BackdoorFailed {
        reason: "singular design matrix".to_string(),
    })?;
    let effect = beta[1];

    let split = stratified::median_split(&pairs).map_err(|_| CausalError::BackdoorFailed {
        reason: "treatment has no variation".to_string(),
    })?;
    let high_mean = stats::mean(&split.high).unwrap_or(0.0);
    let low_mean = stats::mean(&split.low).unwrap_or(0.0);
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
        method: CausalMethod::BackdoorAdjustment,
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
        confounders_controlled: Some(confounders),
        interpretation: interpret::interpret_effect(treatment, outcome, effect, cohens_d),
        caution: interpret::BACKDOOR_CAUTION.to_string(),
    })
}

/// Features other than treatment/outcome whose coverage in the valid rows
/// exceeds the configured fraction. Constant columns are dropped too: they
/// carry no adjustment information and would singularize the design.
fn select_confounders(
    rows: &[&DailyRecord],
    treatment: Feature,
    outcome: Feature,
    config: &CausalConfig,
) -> Vec<Feature> {
    std::iter::once(Feature::Mood)
        .chain(Feature::MOOD_CANDIDATES)
        .filter(|f| *f != treatment && *f != outcome)
        .filter(|f| {
            let values: Vec<f64> = rows.iter().filter_map(|r| r.feature(*f)).collect();
            values.len() as f64 > rows.len() as f64 * config.confounder_coverage
                && stats::variance(&values) > 0.0
        })
        .collect()
}

/// Ordinary least squares via the normal equations. `None` when the
/// design is singular.
fn ols(design: &[Vec<f64>], outcomes: &[f64]) -> Option<Vec<f64>> {
    let k = design.first()?.len();

    // XtX and Xty.
    let mut a = vec![vec![0.0; k + 1]; k];
    for (x, y) in design.iter().zip(outcomes) {
        for i in 0..k {
            for j in 0..k {
                a[i][j] += x[i] * x[j];
            }
            a[i][k] += x[i] * y;
        }
    }

    // Gaussian elimination with partial pivoting on the augmented system.
    for col in 0..k {
        let pivot_row = (col..k).max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))?;
        if a[pivot_row][col].abs() < 1e-10 {
            return None;
        }
        a.swap(col, pivot_row);
        for row in 0..k {
            if row == col {
                continue;
            }
            let factor = a[row][col] / a[col][col];
            for j in col..=k {
                a[row][j] -= factor * a[col][j];
            }
        }
    }

    Some((0..k).map(|i| a[i][k] / a[i][i]).collect())
}
