//! Error types shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
///
/// Every user-facing failure maps to exactly one code so notifications can
/// be rendered without matching on error internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    InvalidFormat,
    NoPlanContent,
    SourceUnavailable,

    // Lookup errors
    DocumentNotFound,
    IndicatorNotFound,
    NoDocumentsLoaded,
    NoData,

    // Capability errors
    ComparisonUnavailable,

    // Output errors
    ExportFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::NoPlanContent => "NO_PLAN_CONTENT",
            ErrorCode::SourceUnavailable => "SOURCE_UNAVAILABLE",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::IndicatorNotFound => "INDICATOR_NOT_FOUND",
            ErrorCode::NoDocumentsLoaded => "NO_DOCUMENTS_LOADED",
            ErrorCode::NoData => "NO_DATA",
            ErrorCode::ComparisonUnavailable => "COMPARISON_UNAVAILABLE",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("indicator key");
        assert_eq!(format!("{}", err), "Field 'indicator key' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("indicator key", "expected three indices");
        assert_eq!(
            format!("{}", err),
            "Field 'indicator key' has invalid format: expected three indices"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::NoPlanContent), "NO_PLAN_CONTENT");
        assert_eq!(format!("{}", ErrorCode::InvalidFormat), "INVALID_FORMAT");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
