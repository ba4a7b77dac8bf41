//! Self-experiment suggestions derived from significant correlations.

use pulse_core::models::{
    CorrelationSet, CorrelationStrength, Direction, ExperimentSuggestion,
};
use pulse_core::records::Feature;

/// Fixed two-week protocol length.
const DURATION_DAYS: u32 = 14;

/// At most this many suggestions per run.
const MAX_SUGGESTIONS: usize = 3;

const MEASUREMENT: &str = "Track daily mood (1-10) throughout the experiment.";

pub struct ExperimentAdvisor;

impl ExperimentAdvisor {
    /// Walks a correlation table (already sorted by |r|) and emits a
    /// protocol for each significant, non-negligible feature, capped at
    /// three suggestions.
    pub fn suggest(correlations: &CorrelationSet) -> Vec<ExperimentSuggestion> {
        let mut suggestions = Vec::new();

        for record in &correlations.correlations {
            if !record.significant || record.strength == CorrelationStrength::Negligible {
                continue;
            }

            suggestions.push(ExperimentSuggestion {
                variable: record.feature,
                correlation_with_mood: record.correlation,
                hypothesis: hypothesis(record.feature, record.direction),
                protocol: protocol(record.feature).to_string(),
                duration_days: DURATION_DAYS,
                measurement: MEASUREMENT.to_string(),
            });

            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
        }

        suggestions
    }
}

fn hypothesis(feature: Feature, direction: Direction) -> String {
    let label = feature.label();
    match direction {
        Direction::Positive => format!("Increasing {label} will improve mood."),
        Direction::Negative => format!("Decreasing {label} will improve mood."),
    }
}

/// Canned protocol per feature. Every correlatable feature has an entry;
/// mood itself never appears as a candidate.
fn protocol(feature: Feature) -> &'static str {
    match feature {
        Feature::SleepHours => {
            "Week 1: Sleep your normal amount (baseline). Week 2: Aim for 8+ hours every night. Compare average mood between weeks."
        }
        Feature::HabitsCompleted => {
            "Week 1: Normal routine (baseline). Week 2: Focus on completing all tracked habits daily. Compare average mood."
        }
        Feature::DeepWorkMinutes => {
            "Week 1: Normal work routine (baseline). Week 2: Schedule 2 hours of uninterrupted deep work daily. Compare mood and productivity."
        }
        Feature::SocialInteractions => {
            "Week 1: Normal social activity (baseline). Week 2: Intentionally schedule one more social interaction per day. Compare mood."
        }
        Feature::Interruptions => {
            "Week 1: Normal work (baseline). Week 2: Block all notifications during work hours. Compare mood and focus."
        }
        Feature::ContextSwitches => {
            "Week 1: Normal work (baseline). Week 2: Batch similar tasks together, limit switches to max 4/day. Compare mood."
        }
        Feature::Energy => {
            "Track energy levels — this is more of an outcome than a treatment. Consider what causes energy changes."
        }
        Feature::Stress => {
            "Week 1: Normal routine (baseline). Week 2: Add 15 min daily stress-reduction activity (meditation, walk). Compare mood."
        }
        Feature::AvgSocialImpact => {
            "Week 1: Normal social activity. Week 2: Prioritize interactions with people who are energizing (positive impact). Compare mood."
        }
        Feature::Mood => "Week 1: Baseline. Week 2: Modify mood. Compare mood.",
    }
}
