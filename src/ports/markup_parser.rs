//! Markup Parser Port - Raw text to element tree.
//!
//! The domain never sees parser-specific node types; adapters convert their
//! own representation into an owned [`ElementTree`].

use thiserror::Error;

use crate::domain::markup::ElementTree;

/// Port for turning raw markup into a navigable element tree.
///
/// # Contract
///
/// Implementations must:
/// - Return the whole document as one tree rooted at the document element
/// - Keep element and text order exactly as written
/// - Report malformed input as `ParseError`, never panic
///
/// # Usage
///
/// ```rust,ignore
/// let parser: &dyn MarkupParser = get_parser();
/// let tree = parser.parse(&content)?;
/// let plan = PlanExtractor::extract(&tree)?;
/// ```
pub trait MarkupParser: Send + Sync {
    /// Parse a full document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the text is not well-formed markup.
    fn parse(&self, content: &str) -> Result<ElementTree, ParseError>;
}

/// Errors that can occur while parsing markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("Document is empty")]
    Empty,

    /// Input is not well-formed.
    #[error("Invalid XML format at line {line}, column {column}: {message}")]
    Malformed {
        line: u32,
        column: u32,
        message: String,
    },
}

impl ParseError {
    /// Create a malformed input error.
    pub fn malformed(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            column,
            message: message.into(),
        }
    }
}
