//! Raw per-source records as returned by the `DataStore` collaborator,
//! plus the merged per-day analysis unit (`DailyRecord`).

mod daily;
mod raw;

pub use daily::{DailyRecord, Feature};
pub use raw::{ContextKind, ContextSession, HabitLog, JournalEntry, MoodLog, SocialInteraction};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the tracked user. Threaded explicitly through every call;
/// there is no process-wide default tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
