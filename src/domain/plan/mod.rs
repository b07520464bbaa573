//! Plan module - Hierarchical planning model and its extraction from markup.
//!
//! # Components
//!
//! - `PlanDocument` and children - plan → goals → objectives → indicators → measurements
//! - `PlanExtractor` - walks an element tree into the model, counting as it goes
//! - `parse_number` - lenient numeric parsing for target/actual text

mod document;
mod errors;
mod extraction;
mod number;

pub use document::{
    CoreValue, Goal, Indicator, Measurement, MeasurementSource, Objective, PlanDocument, PlanTally,
    RoleCategory, Stakeholder, Statement, DEFAULT_INDICATOR_TYPE, DEFAULT_PLAN_NAME,
    DEFAULT_VERSION,
};
pub use errors::ExtractionError;
pub use extraction::{Extraction, PlanExtractor, RootKind};
pub use number::parse_number;
