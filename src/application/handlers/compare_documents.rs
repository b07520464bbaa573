//! CompareDocumentsHandler - Side-by-side comparison of loaded documents.
//!
//! Returns the document list with a preparing status; the detailed
//! comparison view is not built here.

use tracing::info;

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::dashboard::DocumentComparison;

pub const MIN_COMPARED_DOCUMENTS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompareDocumentsQuery;

pub struct CompareDocumentsHandler {
    registry: DocumentRegistry,
}

impl CompareDocumentsHandler {
    pub fn new(registry: DocumentRegistry) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        _query: CompareDocumentsQuery,
    ) -> Result<DocumentComparison, ViewerError> {
        let entries = self.registry.comparison_entries().await;
        if entries.len() < MIN_COMPARED_DOCUMENTS {
            return Err(ViewerError::ComparisonRequiresTwoDocuments {
                loaded: entries.len(),
            });
        }

        info!(documents = entries.len(), "Comparison requested");
        Ok(DocumentComparison::preparing(entries))
    }
}
