use chrono::NaiveDate;

use crate::errors::PulseResult;
use crate::records::{ContextSession, HabitLog, JournalEntry, MoodLog, SocialInteraction, UserId};

/// Read-only, date-ranged access to the durable stores this core consumes.
///
/// Ranges are half-open on neither side: `[from, to]` inclusive. The store
/// may block or suspend inside these calls; everything downstream of them
/// is pure CPU work.
pub trait DataStore: Send + Sync {
    // --- Mood ---
    fn mood_logs(&self, user: UserId, from: NaiveDate, to: NaiveDate)
        -> PulseResult<Vec<MoodLog>>;
    fn all_mood_logs(&self, user: UserId) -> PulseResult<Vec<MoodLog>>;
    fn mood_log_count(&self, user: UserId) -> PulseResult<usize>;

    // --- Journal ---
    fn journal_entries(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<JournalEntry>>;
    fn journal_entry_count(&self, user: UserId) -> PulseResult<usize>;
    /// Most recent entries with a non-null energy level, newest first,
    /// at most `limit`.
    fn recent_energy_entries(&self, user: UserId, limit: usize) -> PulseResult<Vec<JournalEntry>>;

    // --- Habits ---
    /// Full log history for one named habit. `None` when the habit does
    /// not exist (distinct from an existing habit with no logs).
    fn habit_logs(&self, user: UserId, habit_name: &str) -> PulseResult<Option<Vec<HabitLog>>>;
    fn habit_logs_in_range(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<HabitLog>>;
    fn habit_log_count(&self, user: UserId) -> PulseResult<usize>;

    // --- Context switching ---
    fn context_sessions(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<ContextSession>>;

    // --- Social ---
    fn social_interactions(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<SocialInteraction>>;
}
