use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One mood log entry. Multiple entries on the same day are averaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLog {
    pub log_date: NaiveDate,
    /// Mood on the 1–10 scale.
    pub mood_value: f64,
    pub energy_level: Option<f64>,
    pub stress_level: Option<f64>,
}

/// A journal entry. Used as the mood fallback when no mood log exists for
/// a day, and as the only source of sleep hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry_date: NaiveDate,
    pub mood: Option<f64>,
    pub energy_level: Option<f64>,
    pub stress_level: Option<f64>,
    pub sleep_hours: Option<f64>,
}

/// One habit completion log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub log_date: NaiveDate,
    /// Hour of day the habit was logged at, if recorded.
    pub log_hour: Option<u32>,
    pub completed: bool,
}

/// Category of a context-switch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    DeepWork,
    Coding,
    Writing,
    Meeting,
    Communication,
    Admin,
    Other,
}

impl ContextKind {
    /// Sessions of these kinds count toward deep-work minutes.
    pub fn is_deep_work(self) -> bool {
        matches!(self, Self::DeepWork | Self::Coding | Self::Writing)
    }
}

/// One work-context session (a context switch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSession {
    pub started_on: NaiveDate,
    pub kind: ContextKind,
    pub duration_minutes: Option<u32>,
    pub is_interruption: bool,
}

/// One social interaction, with an optional draining-vs-energizing score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialInteraction {
    pub interaction_date: NaiveDate,
    /// Negative = draining, positive = energizing.
    pub impact: Option<f64>,
}
