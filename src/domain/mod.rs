//! Domain layer containing the plan model and its computations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `markup` - Owned element tree and the element accessor
//! - `plan` - Plan data model and the extraction layer
//! - `analysis` - Performance metrics, trends and document analytics
//! - `dashboard` - View model, charts, exports, report, search and comparison

pub mod analysis;
pub mod dashboard;
pub mod foundation;
pub mod markup;
pub mod plan;
