//! # pulse-dataset
//!
//! Builds the per-day analysis dataset: one `DailyRecord` per day with a
//! resolvable mood, merged from mood logs (journal fallback), habit logs,
//! context sessions, and social interactions.

pub mod builder;

pub use builder::DatasetBuilder;
