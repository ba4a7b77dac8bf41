/// Causal analysis errors. All of these map to structured result shapes at
/// the boundary rather than propagating as faults.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("insufficient data: have {available} days, need {required}")]
    InsufficientData { available: usize, required: usize },

    #[error("cannot stratify: all treatment values on one side of the median")]
    CannotStratify,

    #[error("backdoor adjustment failed: {reason}")]
    BackdoorFailed { reason: String },
}
