//! Local Export Sink - Writes exports into a directory.
//!
//! Uses a write-to-temp-then-rename pattern so a crash mid-write never
//! leaves a truncated export behind:
//! 1. Write content to `{filename}.tmp`
//! 2. Sync to disk
//! 3. Rename to `{filename}`
//!
//! If any step fails the temp file is removed before the error is returned.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{ExportError, ExportSink, ExportedDocument, SavedExport};

/// Writes exports under a base directory, creating it on first use.
///
/// # Usage
///
/// ```rust,ignore
/// let sink = LocalExportSink::new("./exports");
/// let saved = sink.save(&document).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalExportSink {
    base_path: PathBuf,
}

impl LocalExportSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Rejects names that would escape the base directory.
    fn target_path(&self, filename: &str) -> Result<PathBuf, ExportError> {
        let plain = !filename.is_empty()
            && !filename.contains(['/', '\\'])
            && filename != "."
            && filename != "..";
        if !plain {
            return Err(ExportError::InvalidFilename(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }

    async fn write_temp(temp_path: &Path, content: &[u8]) -> Result<(), ExportError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            ExportError::write_failed(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            ExportError::write_failed(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            ExportError::write_failed(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }

    async fn ensure_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            ExportError::write_failed(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ExportSink for LocalExportSink {
    async fn save(&self, document: &ExportedDocument) -> Result<SavedExport, ExportError> {
        let final_path = self.target_path(&document.filename)?;
        let temp_path = self.base_path.join(format!("{}.tmp", document.filename));

        self.ensure_dir().await?;

        let written = match Self::write_temp(&temp_path, &document.content).await {
            Ok(()) => fs::rename(&temp_path, &final_path).await.map_err(|e| {
                ExportError::write_failed(format!(
                    "Failed to rename {} to {}: {}",
                    temp_path.display(),
                    final_path.display(),
                    e
                ))
            }),
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        tracing::info!(
            path = %final_path.display(),
            format = %document.format,
            size_bytes = document.content.len(),
            "Export saved"
        );

        Ok(SavedExport {
            location: final_path,
            size_bytes: document.content.len() as u64,
        })
    }
}
