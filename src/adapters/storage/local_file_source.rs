//! Local File Source - Reads documents from the local filesystem.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{DocumentSource, SourceDocument, SourceError};

/// Reads whole files as UTF-8 text, refusing anything over a size limit.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    max_file_bytes: u64,
}

impl LocalFileSource {
    pub fn new(max_file_bytes: u64) -> Self {
        Self { max_file_bytes }
    }

    fn map_io(location: &str, e: std::io::Error) -> SourceError {
        match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(location.to_string()),
            _ => SourceError::io(location, e.to_string()),
        }
    }
}

#[async_trait]
impl DocumentSource for LocalFileSource {
    async fn read(&self, location: &str) -> Result<SourceDocument, SourceError> {
        let meta = fs::metadata(location)
            .await
            .map_err(|e| Self::map_io(location, e))?;

        if meta.len() > self.max_file_bytes {
            return Err(SourceError::TooLarge {
                location: location.to_string(),
                size_bytes: meta.len(),
                limit_bytes: self.max_file_bytes,
            });
        }

        let bytes = fs::read(location)
            .await
            .map_err(|e| Self::map_io(location, e))?;
        let size_bytes = bytes.len() as u64;
        let content =
            String::from_utf8(bytes).map_err(|_| SourceError::NotText(location.to_string()))?;

        let file_name = Path::new(location)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.to_string());

        tracing::debug!(file = %file_name, size_bytes, "Read document");

        Ok(SourceDocument {
            file_name,
            content,
            size_bytes,
        })
    }
}
