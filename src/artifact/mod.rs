//! Model artifact provisioning.
//!
//! Artifacts are fetched from the Hugging Face Hub into a local directory as a
//! separate startup step, before any backend is constructed. Provisioning is
//! idempotent: an artifact already present on disk is left untouched, so
//! repeated startups hit the network at most once per file. Failures here are
//! fatal; there is no fallback artifact.

use crate::core::errors::{SignError, SignResult};
use hf_hub::api::sync::Api;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single remote model artifact.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Hub repository id, e.g. `"user/handsign-models"`.
    pub repo_id: String,
    /// File name within the repository.
    pub filename: String,
}

impl ArtifactSpec {
    pub fn new(repo_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            filename: filename.into(),
        }
    }

    /// Destination path of this artifact under `dir`.
    pub fn local_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }
}

/// Ensures `spec` is present under `dir`, downloading it when missing.
///
/// Returns the local path of the artifact. The containing directory is
/// created if needed. A download lands in the hub cache first and is then
/// copied into place, so a failed transfer never leaves a truncated file at
/// the destination.
pub fn ensure_artifact(spec: &ArtifactSpec, dir: &Path) -> SignResult<PathBuf> {
    let dest = spec.local_path(dir);
    if dest.is_file() {
        debug!(path = %dest.display(), "artifact already present, skipping download");
        return Ok(dest);
    }

    std::fs::create_dir_all(dir)?;

    info!(repo = %spec.repo_id, file = %spec.filename, "downloading model artifact");
    let api = Api::new().map_err(|e| {
        SignError::model_load(&dest, "failed to initialize hub client", e)
    })?;
    let cached = api.model(spec.repo_id.clone()).get(&spec.filename).map_err(|e| {
        SignError::model_load(
            &dest,
            format!("failed to download {} from {}", spec.filename, spec.repo_id),
            e,
        )
    })?;

    std::fs::copy(&cached, &dest)?;
    info!(path = %dest.display(), "artifact ready");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_artifact_is_not_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let spec = ArtifactSpec::new("user/handsign-models", "sign_classifier.onnx");
        let dest = spec.local_path(dir.path());
        std::fs::write(&dest, b"fake model bytes").unwrap();

        // No network involved when the file exists.
        let resolved = ensure_artifact(&spec, dir.path()).unwrap();
        assert_eq!(resolved, dest);
        assert_eq!(std::fs::read(&resolved).unwrap(), b"fake model bytes");
    }

    #[test]
    fn local_path_joins_dir_and_filename() {
        let spec = ArtifactSpec::new("user/repo", "model.onnx");
        assert_eq!(
            spec.local_path(Path::new("/tmp/models")),
            PathBuf::from("/tmp/models/model.onnx")
        );
    }
}
