//! Document Source Port - Reading uploaded files.

use async_trait::async_trait;
use thiserror::Error;

/// A file read to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name without directories, used in notifications and exports.
    pub file_name: String,
    pub content: String,
    pub size_bytes: u64,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            file_name: file_name.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }

    /// Size in kilobytes, one decimal place.
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 10.0).round() / 10.0
    }
}

/// Port for reading documents to completion.
///
/// Each read is independent; one failing read must not affect others.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read the document at `location`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the document cannot be read as text.
    async fn read(&self, location: &str) -> Result<SourceDocument, SourceError>;
}

/// Errors that can occur while reading a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File too large: {location} is {size_bytes} bytes (limit {limit_bytes})")]
    TooLarge {
        location: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("File is not valid UTF-8 text: {0}")]
    NotText(String),

    #[error("I/O error reading {location}: {reason}")]
    Io { location: String, reason: String },
}

impl SourceError {
    pub fn io(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Io {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
