//! # pulse-causal
//!
//! From correlation toward causation over merged daily records:
//!
//! - [`CorrelationEngine`] scores every tracked feature against mood.
//! - [`CausalEstimator`] produces a quasi-causal effect estimate for one
//!   (treatment, outcome) pair, backdoor-adjusted when possible and
//!   median-split stratified otherwise.
//! - [`CounterfactualGenerator`] projects fixed "what if" scenarios from
//!   univariate linear relationships.
//! - [`ExperimentAdvisor`] converts significant correlations into
//!   standardized two-week self-experiment protocols.
//!
//! All entry points are pure functions of a dataset snapshot; re-running
//! any of them on unchanged input yields identical output.

pub mod backdoor;
pub mod correlation;
pub mod counterfactual;
pub mod estimator;
pub mod experiments;
mod interpret;
pub mod stratified;

pub use correlation::CorrelationEngine;
pub use counterfactual::CounterfactualGenerator;
pub use estimator::CausalEstimator;
pub use experiments::ExperimentAdvisor;
