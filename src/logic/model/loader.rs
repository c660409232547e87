//! Model Loader
//!
//! Never fails from the caller's point of view: a missing or unreadable
//! artifact is logged and reported as `None`. Each call stands alone, so a
//! failed reload replaces a previously good artifact with nothing.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::artifact::ModelArtifact;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse an artifact, keeping the failure reason
pub fn try_load(path: &Path) -> Result<ModelArtifact, ModelLoadError> {
    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    ModelArtifact::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an artifact; failures are logged and become `None`
pub fn load(path: &Path) -> Option<ModelArtifact> {
    match try_load(path) {
        Ok(artifact) => {
            tracing::info!(
                model_type = artifact.model_type(),
                "Model loaded from {}",
                path.display()
            );
            Some(artifact)
        }
        Err(e @ ModelLoadError::NotFound(_)) => {
            tracing::warn!("{}", e);
            None
        }
        Err(e) => {
            tracing::error!("Error loading model: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const LINEAR: &str = r#"{"kind":"linear","coefficients":[0,0,0,0,0,0,0,0,0],"intercept":120}"#;

    #[test]
    fn test_load_valid_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, LINEAR).unwrap();

        let artifact = load(&path).unwrap();
        assert_eq!(artifact.model_type(), "linear");
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(load(&path).is_none());
        assert!(matches!(try_load(&path), Err(ModelLoadError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load(&path).is_none());
        assert!(matches!(try_load(&path), Err(ModelLoadError::Parse { .. })));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(try_load(dir.path()), Err(ModelLoadError::Io { .. })));
    }

    #[test]
    fn test_reload_after_delete_drops_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, LINEAR).unwrap();
        assert!(load(&path).is_some());

        fs::remove_file(&path).unwrap();
        assert!(load(&path).is_none());
    }
}
