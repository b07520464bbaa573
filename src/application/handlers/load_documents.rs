//! LoadDocumentsHandler - Reads, parses and registers a batch of files.
//!
//! Files are read and parsed concurrently and each one succeeds or fails on
//! its own. Registration happens afterwards in batch order, so the registry
//! lists files in the order they were given. When enabled, the first file of the batch that parsed is processed right
//! away, which makes it the active document.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::application::{DocumentRegistry, Notification, ProcessedDocument, ViewerError};
use crate::domain::foundation::DocumentId;
use crate::domain::markup::ElementTree;
use crate::ports::{DocumentSource, MarkupParser, SourceDocument};

use super::process_document::{ProcessDocumentCommand, ProcessDocumentHandler};

/// Command to load a batch of files.
#[derive(Debug, Clone)]
pub struct LoadDocumentsCommand {
    /// Locations understood by the configured document source.
    pub locations: Vec<String>,
    /// Process the first successfully parsed file of the batch.
    pub auto_process_first: bool,
}

/// A file that made it into the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFile {
    pub document_id: DocumentId,
    pub file_name: String,
    pub size_kb: f64,
}

/// A file that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub location: String,
    pub error: ViewerError,
}

/// Outcome of a batch, in batch order.
#[derive(Debug, Clone, Default)]
pub struct LoadDocumentsResult {
    pub loaded: Vec<LoadedFile>,
    pub failures: Vec<LoadFailure>,
    /// The auto-processed document, if any.
    pub processed: Option<Arc<ProcessedDocument>>,
    /// One notification per file, plus one for a failed auto-process.
    pub notifications: Vec<Notification>,
}

/// Handler for loading files into the registry.
pub struct LoadDocumentsHandler {
    source: Arc<dyn DocumentSource>,
    parser: Arc<dyn MarkupParser>,
    registry: DocumentRegistry,
    processor: Arc<ProcessDocumentHandler>,
}

impl LoadDocumentsHandler {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        parser: Arc<dyn MarkupParser>,
        registry: DocumentRegistry,
        processor: Arc<ProcessDocumentHandler>,
    ) -> Self {
        Self {
            source,
            parser,
            registry,
            processor,
        }
    }

    pub async fn handle(&self, cmd: LoadDocumentsCommand) -> LoadDocumentsResult {
        let outcomes = join_all(cmd.locations.iter().map(|location| self.read_one(location))).await;

        let mut result = LoadDocumentsResult::default();
        for (location, outcome) in cmd.locations.into_iter().zip(outcomes) {
            match outcome {
                Ok((document, tree)) => {
                    let file = self.register(document, tree).await;
                    result
                        .notifications
                        .push(Notification::success(format!("Successfully loaded {}", file.file_name)));
                    result.loaded.push(file);
                }
                Err(error) => {
                    warn!(location = %location, error = %error, "Failed to load document");
                    result.notifications.push(Notification::from(&error));
                    result.failures.push(LoadFailure { location, error });
                }
            }
        }

        if cmd.auto_process_first {
            if let Some(first) = result.loaded.first() {
                let command = ProcessDocumentCommand {
                    document_id: first.document_id,
                };
                match self.processor.handle(command).await {
                    Ok(processed) => result.processed = Some(processed),
                    Err(error) => result.notifications.push(Notification::from(&error)),
                }
            }
        }

        result
    }

    async fn read_one(&self, location: &str) -> Result<(SourceDocument, ElementTree), ViewerError> {
        let document = self.source.read(location).await?;
        let tree = self
            .parser
            .parse(&document.content)
            .map_err(|e| ViewerError::invalid_format(&document.file_name, e.to_string()))?;
        Ok((document, tree))
    }

    async fn register(&self, document: SourceDocument, tree: ElementTree) -> LoadedFile {
        let size_kb = document.size_kb();
        let document_id = self
            .registry
            .append(document.file_name.clone(), document.size_bytes, tree)
            .await;

        info!(file = %document.file_name, size_kb, "Loaded document");
        LoadedFile {
            document_id,
            file_name: document.file_name,
            size_kb,
        }
    }
}
