//! Shared interpretation text for causal estimates.

use pulse_core::models::EffectMagnitude;
use pulse_core::records::Feature;

pub(crate) const STRATIFIED_CAUTION: &str =
    "This is an observational analysis, not a controlled experiment. Confounding variables may exist.";

pub(crate) const BACKDOOR_CAUTION: &str =
    "Causal estimate assumes no unmeasured confounders.";

pub(crate) fn magnitude_word(magnitude: EffectMagnitude) -> &'static str {
    match magnitude {
        EffectMagnitude::Negligible => "negligible",
        EffectMagnitude::Small => "small",
        EffectMagnitude::Medium => "medium",
        EffectMagnitude::Large => "large",
    }
}

/// Human-readable summary of an effect estimate.
pub(crate) fn interpret_effect(
    treatment: Feature,
    outcome: Feature,
    effect: f64,
    effect_size: f64,
) -> String {
    let direction = if effect > 0.0 { "higher" } else { "lower" };
    let magnitude = magnitude_word(EffectMagnitude::classify(effect_size));
    let treatment_label = treatment.label();
    let outcome_label = outcome.label();

    format!(
        "Higher {treatment_label} is associated with {direction} {outcome_label} \
         ({magnitude} effect). \
         When {treatment_label} is above median, {outcome_label} is on average \
         {:.1} points {direction}.",
        effect.abs()
    )
}
