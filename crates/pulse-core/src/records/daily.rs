use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One day's merged snapshot of all tracked variables — the unit of
/// analysis for correlation and causal work.
///
/// `mood` is non-optional by construction: the dataset builder only emits
/// days where a mood value could be resolved, so the "participates only if
/// mood is present" invariant is encoded in the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub mood: f64,
    pub energy: Option<f64>,
    pub stress: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub habits_completed: u32,
    pub habits_total: u32,
    pub context_switches: u32,
    pub deep_work_minutes: u32,
    pub interruptions: u32,
    pub social_interactions: u32,
    pub avg_social_impact: Option<f64>,
}

impl DailyRecord {
    /// Value of a named feature for this day, if present.
    /// Count-valued features are always present; scale-valued ones may not be.
    pub fn feature(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Mood => Some(self.mood),
            Feature::Energy => self.energy,
            Feature::Stress => self.stress,
            Feature::SleepHours => self.sleep_hours,
            Feature::HabitsCompleted => Some(f64::from(self.habits_completed)),
            Feature::ContextSwitches => Some(f64::from(self.context_switches)),
            Feature::DeepWorkMinutes => Some(f64::from(self.deep_work_minutes)),
            Feature::Interruptions => Some(f64::from(self.interruptions)),
            Feature::SocialInteractions => Some(f64::from(self.social_interactions)),
            Feature::AvgSocialImpact => self.avg_social_impact,
        }
    }
}

/// A tracked variable that can appear in correlation, causal, and
/// counterfactual analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Mood,
    Energy,
    Stress,
    SleepHours,
    HabitsCompleted,
    ContextSwitches,
    DeepWorkMinutes,
    Interruptions,
    SocialInteractions,
    AvgSocialImpact,
}

impl Feature {
    /// Candidate features correlated against mood, in evaluation order.
    /// The order is the stable tie-break for equal |r| in correlation output.
    pub const MOOD_CANDIDATES: [Feature; 9] = [
        Feature::Energy,
        Feature::Stress,
        Feature::SleepHours,
        Feature::HabitsCompleted,
        Feature::ContextSwitches,
        Feature::DeepWorkMinutes,
        Feature::Interruptions,
        Feature::SocialInteractions,
        Feature::AvgSocialImpact,
    ];

    /// Snake-case wire name.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Mood => "mood",
            Feature::Energy => "energy",
            Feature::Stress => "stress",
            Feature::SleepHours => "sleep_hours",
            Feature::HabitsCompleted => "habits_completed",
            Feature::ContextSwitches => "context_switches",
            Feature::DeepWorkMinutes => "deep_work_minutes",
            Feature::Interruptions => "interruptions",
            Feature::SocialInteractions => "social_interactions",
            Feature::AvgSocialImpact => "avg_social_impact",
        }
    }

    /// Human-readable label (underscores replaced by spaces).
    pub fn label(self) -> String {
        self.name().replace('_', " ")
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = crate::errors::CausalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all = [
            Feature::Mood,
            Feature::Energy,
            Feature::Stress,
            Feature::SleepHours,
            Feature::HabitsCompleted,
            Feature::ContextSwitches,
            Feature::DeepWorkMinutes,
            Feature::Interruptions,
            Feature::SocialInteractions,
            Feature::AvgSocialImpact,
        ];
        all.into_iter()
            .find(|f| f.name() == s)
            .ok_or(crate::errors::CausalError::UnknownVariable {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            mood: 7.5,
            energy: Some(6.0),
            stress: None,
            sleep_hours: Some(7.25),
            habits_completed: 3,
            habits_total: 5,
            context_switches: 4,
            deep_work_minutes: 90,
            interruptions: 2,
            social_interactions: 1,
            avg_social_impact: None,
        }
    }

    #[test]
    fn feature_accessor_covers_all_variables() {
        let r = record();
        assert_eq!(r.feature(Feature::Mood), Some(7.5));
        assert_eq!(r.feature(Feature::Energy), Some(6.0));
        assert_eq!(r.feature(Feature::Stress), None);
        assert_eq!(r.feature(Feature::SleepHours), Some(7.25));
        assert_eq!(r.feature(Feature::HabitsCompleted), Some(3.0));
        assert_eq!(r.feature(Feature::DeepWorkMinutes), Some(90.0));
        assert_eq!(r.feature(Feature::AvgSocialImpact), None);
    }

    #[test]
    fn feature_names_round_trip() {
        for feature in Feature::MOOD_CANDIDATES {
            assert_eq!(feature.name().parse::<Feature>().unwrap(), feature);
        }
        assert_eq!("mood".parse::<Feature>().unwrap(), Feature::Mood);
        assert!("caffeine".parse::<Feature>().is_err());
    }

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(Feature::SleepHours.label(), "sleep hours");
        assert_eq!(Feature::DeepWorkMinutes.label(), "deep work minutes");
    }
}
