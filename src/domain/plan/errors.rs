//! Errors raised while extracting a plan from an element tree.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Well-formed markup without any recognized plan root.
    #[error("No StratML content found in the document (expected one of: {expected})")]
    NoPlanContent { expected: String },
}

impl ExtractionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExtractionError::NoPlanContent { .. } => ErrorCode::NoPlanContent,
        }
    }
}
