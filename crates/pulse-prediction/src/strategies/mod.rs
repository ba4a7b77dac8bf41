//! Per-domain prediction strategies. Each strategy is a pure function of
//! the records handed to it; the engine owns tier dispatch and fallbacks.

pub mod energy;
pub mod habit;
pub mod mood;

use chrono::{Datelike, NaiveDate, Weekday};

use pulse_core::constants::{WEEKDAY_ABBREV, WEEKDAY_NAMES};

/// Full weekday name ("Monday").
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Abbreviated weekday name ("Mon") by days-from-Monday index.
pub(crate) fn weekday_abbrev(index: usize) -> &'static str {
    WEEKDAY_ABBREV[index]
}

/// Days-from-Monday index of a date.
pub(crate) fn dow_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}
