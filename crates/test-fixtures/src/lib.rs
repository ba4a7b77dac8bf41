//! Shared fixtures for Pulse tests: an in-memory `DataStore`, a collecting
//! `ResultSink`, scripted learners, and synthetic day-series seeding.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};

use pulse_core::errors::{PulseResult, TrainingError};
use pulse_core::models::{
    CausalAnalysis, CorrelationSet, Counterfactual, DataStatus, EnergyForecast,
    ExperimentSuggestion, PredictionResult,
};
use pulse_core::records::{
    ContextKind, ContextSession, HabitLog, JournalEntry, MoodLog, SocialInteraction, UserId,
};
use pulse_core::traits::{DataStore, EnsembleLearner, FittedRegressor, ResultSink};

/// Habit name used by the day-series seeder.
pub const FIXTURE_HABIT: &str = "morning_run";

/// `n` days before today (UTC).
pub fn days_ago(n: u32) -> NaiveDate {
    Utc::now().date_naive() - chrono::Duration::days(i64::from(n))
}

// =============================================================================
// In-memory DataStore
// =============================================================================

/// In-memory `DataStore` backed by plain vectors. Build it up mutably,
/// then hand it to the engines by reference or `Arc`.
#[derive(Default)]
pub struct MemoryDataStore {
    mood_logs: Vec<(UserId, MoodLog)>,
    journal: Vec<(UserId, JournalEntry)>,
    habits: HashMap<(UserId, String), Vec<HabitLog>>,
    contexts: Vec<(UserId, ContextSession)>,
    social: Vec<(UserId, SocialInteraction)>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mood(&mut self, user: UserId, log: MoodLog) {
        self.mood_logs.push((user, log));
    }

    pub fn add_journal(&mut self, user: UserId, entry: JournalEntry) {
        self.journal.push((user, entry));
    }

    /// Register a habit (possibly with no logs yet).
    pub fn add_habit(&mut self, user: UserId, name: &str) {
        self.habits.entry((user, name.to_string())).or_default();
    }

    pub fn add_habit_log(&mut self, user: UserId, name: &str, log: HabitLog) {
        self.habits
            .entry((user, name.to_string()))
            .or_default()
            .push(log);
    }

    pub fn add_context(&mut self, user: UserId, session: ContextSession) {
        self.contexts.push((user, session));
    }

    pub fn add_social(&mut self, user: UserId, interaction: SocialInteraction) {
        self.social.push((user, interaction));
    }
}

fn in_range(date: NaiveDate, from: NaiveDate, to: NaiveDate) -> bool {
    date >= from && date <= to
}

impl DataStore for MemoryDataStore {
    fn mood_logs(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<MoodLog>> {
        Ok(self
            .mood_logs
            .iter()
            .filter(|(u, m)| *u == user && in_range(m.log_date, from, to))
            .map(|(_, m)| m.clone())
            .collect())
    }

    fn all_mood_logs(&self, user: UserId) -> PulseResult<Vec<MoodLog>> {
        let mut logs: Vec<MoodLog> = self
            .mood_logs
            .iter()
            .filter(|(u, _)| *u == user)
            .map(|(_, m)| m.clone())
            .collect();
        logs.sort_by_key(|m| m.log_date);
        Ok(logs)
    }

    fn mood_log_count(&self, user: UserId) -> PulseResult<usize> {
        Ok(self.mood_logs.iter().filter(|(u, _)| *u == user).count())
    }

    fn journal_entries(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<JournalEntry>> {
        Ok(self
            .journal
            .iter()
            .filter(|(u, e)| *u == user && in_range(e.entry_date, from, to))
            .map(|(_, e)| e.clone())
            .collect())
    }

    fn journal_entry_count(&self, user: UserId) -> PulseResult<usize> {
        Ok(self.journal.iter().filter(|(u, _)| *u == user).count())
    }

    fn recent_energy_entries(&self, user: UserId, limit: usize) -> PulseResult<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self
            .journal
            .iter()
            .filter(|(u, e)| *u == user && e.energy_level.is_some())
            .map(|(_, e)| e.clone())
            .collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.entry_date));
        entries.truncate(limit);
        Ok(entries)
    }

    fn habit_logs(&self, user: UserId, habit_name: &str) -> PulseResult<Option<Vec<HabitLog>>> {
        Ok(self
            .habits
            .get(&(user, habit_name.to_string()))
            .cloned())
    }

    fn habit_logs_in_range(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<HabitLog>> {
        Ok(self
            .habits
            .iter()
            .filter(|((u, _), _)| *u == user)
            .flat_map(|(_, logs)| logs.iter())
            .filter(|l| in_range(l.log_date, from, to))
            .cloned()
            .collect())
    }

    fn habit_log_count(&self, user: UserId) -> PulseResult<usize> {
        Ok(self
            .habits
            .iter()
            .filter(|((u, _), _)| *u == user)
            .map(|(_, logs)| logs.len())
            .sum())
    }

    fn context_sessions(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<ContextSession>> {
        Ok(self
            .contexts
            .iter()
            .filter(|(u, c)| *u == user && in_range(c.started_on, from, to))
            .map(|(_, c)| c.clone())
            .collect())
    }

    fn social_interactions(
        &self,
        user: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> PulseResult<Vec<SocialInteraction>> {
        Ok(self
            .social
            .iter()
            .filter(|(u, s)| *u == user && in_range(s.interaction_date, from, to))
            .map(|(_, s)| s.clone())
            .collect())
    }
}

// =============================================================================
// Day-series seeding
// =============================================================================

/// Everything one synthetic day can carry. Fields left at default are
/// simply absent from the store.
#[derive(Debug, Clone, Default)]
pub struct DaySpec {
    pub mood: Option<f64>,
    pub energy: Option<f64>,
    pub stress: Option<f64>,
    pub sleep_hours: Option<f64>,
    /// Journal energy, used by the forecaster (separate from mood-log energy).
    pub journal_energy: Option<f64>,
    pub habits_completed: u32,
    pub habits_missed: u32,
    pub deep_work_sessions: Vec<u32>,
    pub shallow_sessions: u32,
    pub interruptions: u32,
    pub social_impacts: Vec<Option<f64>>,
}

/// Seed `days` synthetic days ending yesterday: offset `i` maps to the
/// date `today - days + i`, matching the dataset builder's window.
pub fn seed_days(
    store: &mut MemoryDataStore,
    user: UserId,
    days: u32,
    spec_for: impl Fn(u32, NaiveDate) -> DaySpec,
) {
    let today = Utc::now().date_naive();
    for i in 0..days {
        let date = today - chrono::Duration::days(i64::from(days - i));
        let spec = spec_for(i, date);

        if let Some(mood) = spec.mood {
            store.add_mood(
                user,
                MoodLog {
                    log_date: date,
                    mood_value: mood,
                    energy_level: spec.energy,
                    stress_level: spec.stress,
                },
            );
        }
        if spec.sleep_hours.is_some() || spec.journal_energy.is_some() {
            store.add_journal(
                user,
                JournalEntry {
                    entry_date: date,
                    mood: None,
                    energy_level: spec.journal_energy,
                    stress_level: None,
                    sleep_hours: spec.sleep_hours,
                },
            );
        }
        for _ in 0..spec.habits_completed {
            store.add_habit_log(
                user,
                FIXTURE_HABIT,
                HabitLog {
                    log_date: date,
                    log_hour: None,
                    completed: true,
                },
            );
        }
        for _ in 0..spec.habits_missed {
            store.add_habit_log(
                user,
                FIXTURE_HABIT,
                HabitLog {
                    log_date: date,
                    log_hour: None,
                    completed: false,
                },
            );
        }
        for minutes in &spec.deep_work_sessions {
            store.add_context(
                user,
                ContextSession {
                    started_on: date,
                    kind: ContextKind::Coding,
                    duration_minutes: Some(*minutes),
                    is_interruption: false,
                },
            );
        }
        for _ in 0..spec.shallow_sessions {
            store.add_context(
                user,
                ContextSession {
                    started_on: date,
                    kind: ContextKind::Meeting,
                    duration_minutes: Some(30),
                    is_interruption: false,
                },
            );
        }
        for _ in 0..spec.interruptions {
            store.add_context(
                user,
                ContextSession {
                    started_on: date,
                    kind: ContextKind::Other,
                    duration_minutes: None,
                    is_interruption: true,
                },
            );
        }
        for impact in &spec.social_impacts {
            store.add_social(
                user,
                SocialInteraction {
                    interaction_date: date,
                    impact: *impact,
                },
            );
        }
    }
}

// =============================================================================
// Collecting ResultSink
// =============================================================================

/// Sink that records every accepted result as labeled JSON.
#[derive(Default)]
pub struct CollectingSink {
    accepted: Mutex<Vec<(String, serde_json::Value)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push<T: serde::Serialize>(&self, label: &str, value: &T) -> PulseResult<()> {
        let json = serde_json::to_value(value).expect("fixture results serialize");
        self.accepted
            .lock()
            .expect("sink lock")
            .push((label.to_string(), json));
        Ok(())
    }

    /// All accepted payloads, in acceptance order.
    pub fn accepted(&self) -> Vec<(String, serde_json::Value)> {
        self.accepted.lock().expect("sink lock").clone()
    }

    /// Payloads accepted under one label.
    pub fn labeled(&self, label: &str) -> Vec<serde_json::Value> {
        self.accepted()
            .into_iter()
            .filter(|(l, _)| l == label)
            .map(|(_, v)| v)
            .collect()
    }
}

impl ResultSink for CollectingSink {
    fn accept_prediction(
        &self,
        _user: UserId,
        kind: &str,
        result: &PredictionResult,
    ) -> PulseResult<()> {
        self.push(&format!("prediction:{kind}"), result)
    }

    fn accept_forecast(&self, _user: UserId, forecast: &EnergyForecast) -> PulseResult<()> {
        self.push("forecast", forecast)
    }

    fn accept_correlations(&self, _user: UserId, set: &CorrelationSet) -> PulseResult<()> {
        self.push("correlations", set)
    }

    fn accept_causal(&self, _user: UserId, analysis: &CausalAnalysis) -> PulseResult<()> {
        self.push("causal", analysis)
    }

    fn accept_counterfactuals(
        &self,
        _user: UserId,
        counterfactuals: &[Counterfactual],
    ) -> PulseResult<()> {
        self.push("counterfactuals", &counterfactuals.to_vec())
    }

    fn accept_experiments(
        &self,
        _user: UserId,
        suggestions: &[ExperimentSuggestion],
    ) -> PulseResult<()> {
        self.push("experiments", &suggestions.to_vec())
    }

    fn accept_data_status(&self, _user: UserId, status: &DataStatus) -> PulseResult<()> {
        self.push("data_status", status)
    }
}

// =============================================================================
// Scripted learners
// =============================================================================

/// Learner whose fitted model always predicts a constant.
pub struct ConstantLearner {
    pub value: f64,
    pub importances: Vec<f64>,
}

struct FittedConstant {
    value: f64,
    importances: Vec<f64>,
}

impl FittedRegressor for FittedConstant {
    fn predict(&self, _features: &[f64]) -> f64 {
        self.value
    }

    fn feature_importances(&self) -> Vec<f64> {
        self.importances.clone()
    }

    fn to_bytes(&self) -> PulseResult<Vec<u8>> {
        Ok(self.value.to_le_bytes().to_vec())
    }
}

impl EnsembleLearner for ConstantLearner {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn fit(
        &self,
        _features: &[Vec<f64>],
        _targets: &[f64],
        _deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError> {
        Ok(Box::new(FittedConstant {
            value: self.value,
            importances: self.importances.clone(),
        }))
    }
}

/// Learner that is never available; forces the ensemble→simple fallback.
pub struct UnavailableLearner;

impl EnsembleLearner for UnavailableLearner {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn fit(
        &self,
        _features: &[Vec<f64>],
        _targets: &[f64],
        _deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError> {
        Err(TrainingError::LearnerUnavailable {
            name: "unavailable",
        })
    }
}

/// Learner that sleeps before fitting; used to exercise deadlines and the
/// per-key retrain lock.
pub struct SlowLearner {
    pub delay: Duration,
    pub value: f64,
}

impl EnsembleLearner for SlowLearner {
    fn name(&self) -> &'static str {
        "slow_constant"
    }

    fn fit(
        &self,
        _features: &[Vec<f64>],
        _targets: &[f64],
        deadline: Option<Instant>,
    ) -> Result<Box<dyn FittedRegressor>, TrainingError> {
        std::thread::sleep(self.delay);
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(TrainingError::DeadlineExceeded);
            }
        }
        Ok(Box::new(FittedConstant {
            value: self.value,
            importances: Vec::new(),
        }))
    }
}
