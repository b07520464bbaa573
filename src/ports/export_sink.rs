//! Export Sink Port - Saving export payloads.
//!
//! The viewer builds export payloads in memory; this port decides where they
//! end up (a directory on disk, an in-memory buffer in tests).

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for persisting generated exports.
///
/// # Contract
///
/// Implementations must:
/// - Write the payload under the document's `filename`
/// - Never leave a partially written file behind on failure
/// - Report clear errors for write failures
///
/// # Usage
///
/// ```rust,ignore
/// let sink: &dyn ExportSink = get_sink();
/// let saved = sink.save(&ExportedDocument::new(bytes, ExportFormat::Csv, "indicator-1-1-1-data")).await?;
/// println!("wrote {}", saved.location.display());
/// ```
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Save an exported document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the payload cannot be written.
    async fn save(&self, document: &ExportedDocument) -> Result<SavedExport, ExportError>;

    /// Save a document meant to be viewed right away, such as the HTML report.
    ///
    /// Sinks that can open a viewing surface override this; the default just saves.
    async fn present(&self, document: &ExportedDocument) -> Result<SavedExport, ExportError> {
        self.save(document).await
    }
}

/// Export formats produced by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma separated rows for a single indicator.
    Csv,
    /// Full analytics snapshot.
    Json,
    /// Printable report.
    Html,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename, extension included.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document named `{base_filename}.{extension}`.
    pub fn new(content: impl Into<Vec<u8>>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content: content.into(),
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Get the content as a UTF-8 string.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    pub location: PathBuf,
    pub size_bytes: u64,
}

/// Errors that can occur while saving an export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid export filename: {0}")]
    InvalidFilename(String),

    #[error("Export write failed: {0}")]
    WriteFailed(String),
}

impl ExportError {
    pub fn write_failed(reason: impl Into<String>) -> Self {
        Self::WriteFailed(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_content_types() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
        assert_eq!(ExportFormat::Html.content_type(), "text/html; charset=utf-8");
    }

    #[test]
    fn export_format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("htm".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn exported_document_appends_extension() {
        let doc = ExportedDocument::new("a,b\n1,2", ExportFormat::Csv, "indicator-1-1-1-data");
        assert_eq!(doc.filename, "indicator-1-1-1-data.csv");
        assert_eq!(doc.content_type, "text/csv");
        assert_eq!(doc.as_str(), Some("a,b\n1,2"));
    }

    #[test]
    fn export_sink_is_object_safe() {
        fn check<T: ExportSink + ?Sized>() {}
        check::<dyn ExportSink>();
    }
}
