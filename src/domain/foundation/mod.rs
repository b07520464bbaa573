//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the vocabulary
//! of the plan viewer domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{DocumentId, IndicatorKey, ObjectiveKey};
pub use timestamp::Timestamp;
