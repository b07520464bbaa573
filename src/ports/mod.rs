//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MarkupParser` - raw text to element tree
//! - `DocumentSource` - reading uploaded files
//! - `ExportSink` - saving export payloads and opening generated reports
//! - `ChartRenderer` - drawing declarative chart descriptions

mod chart_renderer;
mod document_source;
mod export_sink;
mod markup_parser;

pub use chart_renderer::{ChartError, ChartRenderer};
pub use document_source::{DocumentSource, SourceDocument, SourceError};
pub use export_sink::{ExportError, ExportFormat, ExportSink, ExportedDocument, SavedExport};
pub use markup_parser::{MarkupParser, ParseError};
