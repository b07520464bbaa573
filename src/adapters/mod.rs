//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `markup` - XML parsing into the domain element tree
//! - `storage` - Local filesystem reads and export writes, plus in-memory sinks
//! - `chart` - Chart renderers (JSON chart files, recording renderer for tests)

pub mod chart;
pub mod markup;
pub mod storage;

pub use chart::{JsonChartRenderer, RecordingChartRenderer};
pub use markup::XmlMarkupParser;
pub use storage::{InMemoryDocumentSource, InMemoryExportSink, LocalExportSink, LocalFileSource};
