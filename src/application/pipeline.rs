//! Extraction, analytics and view assembly for one parsed document.
//!
//! Synchronous and side-effect free: charts and exports happen elsewhere.

use crate::domain::analysis::{AnalyticsEngine, PlanAnalytics};
use crate::domain::dashboard::{PlanView, ViewAssembler};
use crate::domain::foundation::DocumentId;
use crate::domain::markup::ElementTree;
use crate::domain::plan::{Extraction, ExtractionError, PlanExtractor};

/// Everything derived from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub document_id: DocumentId,
    pub file_name: String,
    pub extraction: Extraction,
    pub analytics: PlanAnalytics,
    pub view: PlanView,
}

/// Runs the full pipeline. The model is rebuilt from scratch on every call.
pub fn process_tree(
    document_id: DocumentId,
    file_name: &str,
    tree: &ElementTree,
) -> Result<ProcessedDocument, ExtractionError> {
    let extraction = PlanExtractor::extract(tree)?;
    let analytics = AnalyticsEngine::analyze(&extraction);
    let view = ViewAssembler::assemble(&extraction, &analytics);
    Ok(ProcessedDocument {
        document_id,
        file_name: file_name.to_string(),
        extraction,
        analytics,
        view,
    })
}
