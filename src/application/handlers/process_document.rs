//! ProcessDocumentHandler - Runs a loaded document through the pipeline.
//!
//! Processing makes the document active. When charts are enabled, rendering
//! is dispatched in the background and never affects the outcome.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::pipeline::process_tree;
use crate::application::{DocumentRegistry, ProcessedDocument, ViewerError};
use crate::domain::foundation::DocumentId;

use super::render_charts::{document_charts, ChartDispatcher};

/// Command to process (or re-process) a loaded document.
#[derive(Debug, Clone, Copy)]
pub struct ProcessDocumentCommand {
    pub document_id: DocumentId,
}

pub type ProcessDocumentResult = Arc<ProcessedDocument>;

/// Handler for processing a document selected from the registry.
pub struct ProcessDocumentHandler {
    registry: DocumentRegistry,
    charts: Option<ChartDispatcher>,
}

impl ProcessDocumentHandler {
    pub fn new(registry: DocumentRegistry, charts: Option<ChartDispatcher>) -> Self {
        Self { registry, charts }
    }

    pub async fn handle(
        &self,
        cmd: ProcessDocumentCommand,
    ) -> Result<ProcessDocumentResult, ViewerError> {
        let document = self
            .registry
            .get(cmd.document_id)
            .await
            .ok_or(ViewerError::DocumentNotFound(cmd.document_id))?;

        let processed = process_tree(document.id, &document.file_name, &document.tree)
            .map_err(|e| {
                warn!(file = %document.file_name, error = %e, "Document has no plan content");
                ViewerError::NoPlanContent {
                    file: document.file_name.clone(),
                }
            })?;
        let processed = Arc::new(processed);

        self.registry
            .record_processed(document.id, Arc::clone(&processed))
            .await?;

        info!(
            file = %document.file_name,
            indicators = processed.analytics.summary.total_indicators,
            avg_performance = processed.analytics.summary.avg_performance,
            "Processed document"
        );

        if let Some(charts) = &self.charts {
            charts.dispatch(document.file_name.clone(), document_charts(&processed));
        }

        Ok(processed)
    }
}
