//! DatasetBuilder — merges per-day values from all raw sources into a
//! date-ascending sequence of `DailyRecord`s.
//!
//! A day contributes a record only when a mood value could be resolved,
//! either from mood logs (same-day entries averaged) or from a journal
//! entry fallback. Days without mood are dropped, never zero-filled.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use pulse_core::errors::PulseResult;
use pulse_core::records::{
    ContextSession, DailyRecord, HabitLog, JournalEntry, MoodLog, SocialInteraction, UserId,
};
use pulse_core::stats;
use pulse_core::traits::DataStore;

/// Builds the daily analysis dataset from a `DataStore`.
pub struct DatasetBuilder<'a> {
    store: &'a dyn DataStore,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        Self { store }
    }

    /// Build records for the `days`-day window ending yesterday
    /// (`[today - days, today - 1]`), date ascending.
    pub fn build(&self, user: UserId, days: u32, today: NaiveDate) -> PulseResult<Vec<DailyRecord>> {
        let start = today - Duration::days(i64::from(days));
        let end = today - Duration::days(1);
        if end < start {
            return Ok(Vec::new());
        }

        // One range query per source, bucketed by day in memory.
        let moods = bucket(self.store.mood_logs(user, start, end)?, |m: &MoodLog| {
            m.log_date
        });
        let journal = bucket(
            self.store.journal_entries(user, start, end)?,
            |e: &JournalEntry| e.entry_date,
        );
        let habits = bucket(
            self.store.habit_logs_in_range(user, start, end)?,
            |l: &HabitLog| l.log_date,
        );
        let contexts = bucket(
            self.store.context_sessions(user, start, end)?,
            |c: &ContextSession| c.started_on,
        );
        let social = bucket(
            self.store.social_interactions(user, start, end)?,
            |s: &SocialInteraction| s.interaction_date,
        );

        let mut dataset = Vec::new();
        let mut date = start;
        while date <= end {
            if let Some(record) = merge_day(
                date,
                moods.get(&date).map(Vec::as_slice).unwrap_or(&[]),
                journal.get(&date).map(Vec::as_slice).unwrap_or(&[]),
                habits.get(&date).map(Vec::as_slice).unwrap_or(&[]),
                contexts.get(&date).map(Vec::as_slice).unwrap_or(&[]),
                social.get(&date).map(Vec::as_slice).unwrap_or(&[]),
            ) {
                dataset.push(record);
            }
            date += Duration::days(1);
        }

        tracing::debug!(
            user = %user,
            days,
            records = dataset.len(),
            "daily dataset built"
        );
        Ok(dataset)
    }
}

fn bucket<T>(items: Vec<T>, date_of: impl Fn(&T) -> NaiveDate) -> BTreeMap<NaiveDate, Vec<T>> {
    let mut map: BTreeMap<NaiveDate, Vec<T>> = BTreeMap::new();
    for item in items {
        map.entry(date_of(&item)).or_default().push(item);
    }
    map
}

/// Merge one day's raw records. `None` when no mood could be resolved.
fn merge_day(
    date: NaiveDate,
    moods: &[MoodLog],
    journal: &[JournalEntry],
    habits: &[HabitLog],
    contexts: &[ContextSession],
    social: &[SocialInteraction],
) -> Option<DailyRecord> {
    let first_entry = journal.first();

    // Mood logs win; the journal entry is the fallback source for the
    // whole mood/energy/stress block.
    let (mood, energy, stress) = if !moods.is_empty() {
        let mood_values: Vec<f64> = moods.iter().map(|m| m.mood_value).collect();
        let energies: Vec<f64> = moods.iter().filter_map(|m| m.energy_level).collect();
        let stresses: Vec<f64> = moods.iter().filter_map(|m| m.stress_level).collect();
        (
            stats::mean(&mood_values),
            stats::mean(&energies),
            stats::mean(&stresses),
        )
    } else if let Some(entry) = first_entry {
        (entry.mood, entry.energy_level, entry.stress_level)
    } else {
        (None, None, None)
    };

    let mood = mood?;

    let completed = habits.iter().filter(|l| l.completed).count() as u32;
    let switches = contexts.len() as u32;
    let deep_work: u32 = contexts
        .iter()
        .filter(|c| c.kind.is_deep_work())
        .map(|c| c.duration_minutes.unwrap_or(0))
        .sum();
    let interruptions = contexts.iter().filter(|c| c.is_interruption).count() as u32;
    let impacts: Vec<f64> = social.iter().filter_map(|s| s.impact).collect();

    Some(DailyRecord {
        date,
        mood,
        energy,
        stress,
        sleep_hours: first_entry.and_then(|e| e.sleep_hours),
        habits_completed: completed,
        habits_total: habits.len() as u32,
        context_switches: switches,
        deep_work_minutes: deep_work,
        interruptions,
        social_interactions: social.len() as u32,
        avg_social_impact: stats::mean(&impacts),
    })
}
