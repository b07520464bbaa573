//! Storage Adapters
//!
//! Implementations of the DocumentSource and ExportSink ports.
//!
//! ## Available Adapters
//!
//! - **LocalFileSource** - Reads documents from the local filesystem
//! - **LocalExportSink** - Writes exports into a directory with atomic renames
//! - **InMemoryDocumentSource** - Serves documents from memory (testing/development)
//! - **InMemoryExportSink** - Keeps exports in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{LocalExportSink, LocalFileSource};
//!
//! let source = LocalFileSource::new(10 * 1024 * 1024);
//! let sink = LocalExportSink::new("./exports");
//! ```

mod in_memory_document_source;
mod in_memory_export_sink;
mod local_export_sink;
mod local_file_source;

pub use in_memory_document_source::InMemoryDocumentSource;
pub use in_memory_export_sink::InMemoryExportSink;
pub use local_export_sink::LocalExportSink;
pub use local_file_source::LocalFileSource;
