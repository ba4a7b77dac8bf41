use crate::errors::PulseResult;
use crate::models::{ArtifactSpec, ModelArtifact};
use crate::records::UserId;

/// Versioned persistence for trained models, keyed by (user, model name).
///
/// `put` must be atomic from a reader's perspective: the blob and metadata
/// are fully written before the active pointer is swapped, so `get_active`
/// never observes a partially written artifact.
pub trait ArtifactStore: Send + Sync {
    /// Persist a new version and make it active. Returns the stored
    /// artifact with its assigned version and locator.
    fn put(
        &self,
        user: UserId,
        name: &str,
        blob: &[u8],
        spec: &ArtifactSpec,
    ) -> PulseResult<ModelArtifact>;

    /// Blob and metadata of the currently active version, if any.
    fn get_active(&self, user: UserId, name: &str) -> PulseResult<Option<(Vec<u8>, ModelArtifact)>>;

    /// All active artifacts for a user, one per model name.
    fn list_active(&self, user: UserId) -> PulseResult<Vec<ModelArtifact>>;
}
