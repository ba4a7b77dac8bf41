//! # pulse-core
//!
//! Foundation crate for the Pulse analytics engine.
//! Defines all types, traits, errors, config, constants, and the shared
//! statistics helpers. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod records;
pub mod stats;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PulseConfig;
pub use errors::{PulseError, PulseResult};
pub use records::{DailyRecord, Feature, UserId};
