use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalyticsSummary;
use crate::domain::foundation::DocumentId;

/// Side-by-side view of loaded documents.
///
/// Only the document list is populated; the detailed comparison is rendered
/// by a collaborator that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentComparison {
    pub documents: Vec<ComparisonEntry>,
    pub status: ComparisonStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub document_id: DocumentId,
    pub name: String,
    pub processed: bool,
    /// Present once the document has been processed.
    pub summary: Option<AnalyticsSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    Preparing,
}

impl DocumentComparison {
    pub fn preparing(documents: Vec<ComparisonEntry>) -> Self {
        Self {
            documents,
            status: ComparisonStatus::Preparing,
            message: "Comparison feature is being prepared...".to_string(),
        }
    }
}
