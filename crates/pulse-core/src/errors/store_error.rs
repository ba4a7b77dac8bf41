/// Errors surfaced by a `DataStore` implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {message}")]
    Query { message: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
