//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The registry is the only shared mutable state; everything else is derived
//! per document by the pipeline.

mod error;
pub mod handlers;
mod notification;
pub mod pipeline;
mod registry;
mod service;

pub use error::ViewerError;
pub use notification::{Notification, NotificationLevel};
pub use pipeline::{process_tree, ProcessedDocument};
pub use registry::{DocumentRegistry, DocumentSummary, RegisteredDocument};
pub use service::{PlanViewerService, ViewerOptions, ViewerPorts};
