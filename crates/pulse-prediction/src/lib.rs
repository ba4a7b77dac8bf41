//! # pulse-prediction
//!
//! Adaptive predictions that scale statistical sophistication with the
//! amount of available history.
//!
//! ## Tiers
//!
//! | Tier | Samples | Strategy |
//! |------|---------|----------|
//! | Baseline | `n < min(domain)` | short-window average, fixed low confidence |
//! | Simple | `min ≤ n < 100` | day-of-week / overall baselines |
//! | Ensemble | `100 ≤ n < 365` | bagged regression trees |
//! | AdvancedEnsemble | `n ≥ 365` | same model, higher confidence ceiling |
//!
//! Tier selection is a total function of (domain, sample count); every
//! ensemble failure falls back to the Simple tier, never to an error.

pub mod engine;
pub mod selector;
pub mod strategies;

pub use engine::PredictionEngine;
pub use selector::{Domain, StrategySelector, Tier};
