//! # pulse-engine
//!
//! The facade the outer layers talk to. One [`AnalyticsEngine`] per
//! process wires the dataset builder and the prediction/causal engines to
//! a [`ResultSink`](pulse_core::traits::ResultSink): every operation
//! computes its result object, delivers it to the sink, and returns it.

pub mod engine;

pub use engine::AnalyticsEngine;
