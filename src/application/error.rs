//! Errors surfaced by the viewer's commands and queries.
//!
//! Every variant is scoped to the document or request that triggered it;
//! none of them leaves the registry in a broken state.

use thiserror::Error;

use crate::domain::foundation::{DocumentId, ErrorCode, IndicatorKey};
use crate::ports::{ExportError, SourceError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    #[error("Error parsing {file}: {reason}")]
    InvalidFormat { file: String, reason: String },

    #[error("No StratML content found in {file}")]
    NoPlanContent { file: String },

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Indicator not found: {0}")]
    IndicatorNotFound(IndicatorKey),

    #[error("No document loaded")]
    NoDocumentsLoaded,

    #[error("No document has been processed yet")]
    NoActiveDocument,

    #[error("No data available for {0}")]
    NoDataForIndicator(IndicatorKey),

    #[error("Upload at least 2 documents to compare ({loaded} loaded)")]
    ComparisonRequiresTwoDocuments { loaded: usize },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ViewerError {
    pub fn invalid_format(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ViewerError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ViewerError::NoPlanContent { .. } => ErrorCode::NoPlanContent,
            ViewerError::DocumentNotFound(_) => ErrorCode::DocumentNotFound,
            ViewerError::IndicatorNotFound(_) => ErrorCode::IndicatorNotFound,
            ViewerError::NoDocumentsLoaded | ViewerError::NoActiveDocument => {
                ErrorCode::NoDocumentsLoaded
            }
            ViewerError::NoDataForIndicator(_) => ErrorCode::NoData,
            ViewerError::ComparisonRequiresTwoDocuments { .. } => ErrorCode::ComparisonUnavailable,
            ViewerError::Source(_) => ErrorCode::SourceUnavailable,
            ViewerError::Export(_) => ErrorCode::ExportFailed,
            ViewerError::Serialization(_) => ErrorCode::InternalError,
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Serialization(err.to_string())
    }
}
