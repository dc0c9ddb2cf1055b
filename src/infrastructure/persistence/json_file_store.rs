//! JSON-file implementation of the link store.

use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::entities::LinkMapping;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Link store backed by a single JSON file on disk.
///
/// The file holds the entire mapping as one flat object. Saves go through a
/// temp file in the same directory followed by a rename, so a concurrent
/// `load` observes either the old or the new snapshot, never a torn write.
///
/// Corrupt file content is reported as a storage error rather than reset to
/// an empty store; resetting would silently drop every existing link.
pub struct JsonFileLinkStore {
    path: PathBuf,
}

impl JsonFileLinkStore {
    /// Creates a store over the given file path. Nothing is touched on disk
    /// until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// First-run bootstrap: creates the parent directory and an empty `{}`
    /// file. Uses `create_new` so a file written by a concurrent caller in
    /// the meantime is left untouched.
    async fn bootstrap(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("Failed to create data directory", parent, &e))?;
        }

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(mut file) => {
                file.write_all(b"{}")
                    .await
                    .map_err(|e| storage_error("Failed to initialize data file", &self.path, &e))?;
                file.flush()
                    .await
                    .map_err(|e| storage_error("Failed to initialize data file", &self.path, &e))?;
                tracing::info!("Initialized empty link store at {}", self.path.display());
                Ok(())
            }
            // Someone else initialized (or saved) first; their content wins.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(storage_error(
                "Failed to initialize data file",
                &self.path,
                &e,
            )),
        }
    }
}

#[async_trait]
impl LinkStore for JsonFileLinkStore {
    async fn load(&self) -> Result<LinkMapping, AppError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::storage(
                    "Link data file is corrupt",
                    json!({
                        "path": self.path.display().to_string(),
                        "reason": e.to_string(),
                    }),
                )
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.bootstrap().await?;
                Ok(LinkMapping::new())
            }
            Err(e) => Err(storage_error("Failed to read data file", &self.path, &e)),
        }
    }

    async fn save(&self, mapping: &LinkMapping) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(mapping).map_err(|e| {
            AppError::storage(
                "Failed to encode link mapping",
                json!({ "reason": e.to_string() }),
            )
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("Failed to create data directory", parent, &e))?;
        }

        // Temp file lives next to the target so the rename stays on one
        // filesystem and is atomic.
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| storage_error("Failed to write data file", &tmp_path, &e))?;

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| storage_error("Failed to replace data file", &self.path, &e))
    }
}

fn storage_error(message: &str, path: &Path, e: &std::io::Error) -> AppError {
    AppError::storage(
        message,
        json!({
            "path": path.display().to_string(),
            "reason": e.to_string(),
        }),
    )
}
