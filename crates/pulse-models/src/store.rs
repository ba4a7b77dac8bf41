//! Filesystem-backed versioned artifact store.
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/<user_id>/<model_name>/v<N>.bin     model blob
//! <root>/<user_id>/<model_name>/v<N>.json    artifact metadata
//! <root>/<user_id>/<model_name>/active.json  pointer to the live version
//! ```
//!
//! Every file is written to a temporary sibling and renamed into place,
//! and the active pointer is swapped last, so a concurrent reader sees
//! either the previous version or the new one fully written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use pulse_core::errors::{ArtifactError, PulseResult};
use pulse_core::models::{ArtifactSpec, ModelArtifact};
use pulse_core::records::UserId;
use pulse_core::traits::ArtifactStore;

#[derive(Debug, Serialize, Deserialize)]
struct ActivePointer {
    version: u32,
}

/// Stores model artifacts as files under a root directory.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn model_dir(&self, user: UserId, name: &str) -> PathBuf {
        self.root.join(user.to_string()).join(name)
    }

    /// Highest version already present in a model directory.
    fn latest_version(dir: &Path) -> Result<u32, ArtifactError> {
        let mut latest = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(version) = name
                .strip_prefix('v')
                .and_then(|rest| rest.strip_suffix(".json"))
                .and_then(|digits| digits.parse::<u32>().ok())
            {
                latest = latest.max(version);
            }
        }
        Ok(latest)
    }

    fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ArtifactError> {
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ArtifactError> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Decode {
            locator: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ArtifactError> {
        serde_json::to_vec_pretty(value).map_err(|e| ArtifactError::Encode {
            reason: e.to_string(),
        })
    }

    fn put_inner(
        &self,
        user: UserId,
        name: &str,
        blob: &[u8],
        spec: &ArtifactSpec,
    ) -> Result<ModelArtifact, ArtifactError> {
        let dir = self.model_dir(user, name);
        fs::create_dir_all(&dir)?;

        let version = Self::latest_version(&dir)? + 1;
        let blob_path = dir.join(format!("v{version}.bin"));
        let meta_path = dir.join(format!("v{version}.json"));

        let artifact = ModelArtifact {
            name: name.to_string(),
            version,
            model_type: spec.model_type.clone(),
            training_date: spec.training_date,
            training_samples: spec.training_samples,
            mae: spec.mae,
            locator: blob_path.display().to_string(),
            active: true,
        };

        Self::write_atomic(&blob_path, blob)?;
        Self::write_atomic(&meta_path, &Self::to_json(&artifact)?)?;
        Self::write_atomic(
            &dir.join("active.json"),
            &Self::to_json(&ActivePointer { version })?,
        )?;

        debug!(%user, model = name, version, "stored model artifact");
        Ok(artifact)
    }

    fn get_active_inner(
        &self,
        user: UserId,
        name: &str,
    ) -> Result<Option<(Vec<u8>, ModelArtifact)>, ArtifactError> {
        let dir = self.model_dir(user, name);
        let pointer_path = dir.join("active.json");
        if !pointer_path.exists() {
            return Ok(None);
        }

        let pointer: ActivePointer = Self::read_json(&pointer_path)?;
        let meta_path = dir.join(format!("v{}.json", pointer.version));
        let blob_path = dir.join(format!("v{}.bin", pointer.version));
        if !meta_path.exists() || !blob_path.exists() {
            return Err(ArtifactError::DanglingPointer {
                name: name.to_string(),
                version: pointer.version,
            });
        }

        let mut artifact: ModelArtifact = Self::read_json(&meta_path)?;
        artifact.active = true;
        let blob = fs::read(&blob_path)?;
        Ok(Some((blob, artifact)))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn put(
        &self,
        user: UserId,
        name: &str,
        blob: &[u8],
        spec: &ArtifactSpec,
    ) -> PulseResult<ModelArtifact> {
        Ok(self.put_inner(user, name, blob, spec)?)
    }

    fn get_active(&self, user: UserId, name: &str) -> PulseResult<Option<(Vec<u8>, ModelArtifact)>> {
        Ok(self.get_active_inner(user, name)?)
    }

    fn list_active(&self, user: UserId) -> PulseResult<Vec<ModelArtifact>> {
        let user_dir = self.root.join(user.to_string());
        if !user_dir.exists() {
            return Ok(Vec::new());
        }

        let mut artifacts = Vec::new();
        let entries = fs::read_dir(&user_dir).map_err(ArtifactError::from)?;
        for entry in entries {
            let entry = entry.map_err(ArtifactError::from)?;
            if !entry.path().is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some((_, artifact)) = self.get_active_inner(user, name)? {
                artifacts.push(artifact);
            }
        }

        artifacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(artifacts)
    }
}
