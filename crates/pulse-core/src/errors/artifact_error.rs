/// Errors from the versioned model artifact store.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact encode failed: {reason}")]
    Encode { reason: String },

    #[error("artifact decode failed for {locator}: {reason}")]
    Decode { locator: String, reason: String },

    #[error("active pointer references missing version {version} for {name}")]
    DanglingPointer { name: String, version: u32 },
}
