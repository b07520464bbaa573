//! Multi-Document Registry - Loaded documents and the active selection.
//!
//! Holds one parsed tree per loaded file for the lifetime of the session, in
//! load order. Appends and status changes take the write lock, so concurrent
//! loads are serialized and never interleave partially.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::dashboard::{ComparisonEntry, DocumentStatus};
use crate::domain::foundation::DocumentId;
use crate::domain::markup::ElementTree;

use super::{ProcessedDocument, ViewerError};

/// One loaded file.
#[derive(Debug, Clone)]
pub struct RegisteredDocument {
    pub id: DocumentId,
    pub file_name: String,
    pub size_bytes: u64,
    pub tree: Arc<ElementTree>,
    pub processed: Option<Arc<ProcessedDocument>>,
}

impl RegisteredDocument {
    pub fn is_processed(&self) -> bool {
        self.processed.is_some()
    }
}

/// Listing entry for a loaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub file_name: String,
    pub size_kb: f64,
    pub processed: bool,
    pub active: bool,
}

#[derive(Debug, Default)]
struct RegistryState {
    documents: Vec<RegisteredDocument>,
    active: Option<DocumentId>,
}

/// Shared, cloneable handle to the registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parsed document, unprocessed.
    pub async fn append(
        &self,
        file_name: impl Into<String>,
        size_bytes: u64,
        tree: ElementTree,
    ) -> DocumentId {
        let id = DocumentId::new();
        let mut state = self.state.write().await;
        state.documents.push(RegisteredDocument {
            id,
            file_name: file_name.into(),
            size_bytes,
            tree: Arc::new(tree),
            processed: None,
        });
        id
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.documents.is_empty()
    }

    pub async fn get(&self, id: DocumentId) -> Option<RegisteredDocument> {
        self.state
            .read()
            .await
            .documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Stores the pipeline result and makes the document active.
    pub async fn record_processed(
        &self,
        id: DocumentId,
        processed: Arc<ProcessedDocument>,
    ) -> Result<(), ViewerError> {
        let mut state = self.state.write().await;
        let document = state
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(ViewerError::DocumentNotFound(id))?;
        document.processed = Some(processed);
        state.active = Some(id);
        Ok(())
    }

    /// The processed result of the active document.
    pub async fn active(&self) -> Option<Arc<ProcessedDocument>> {
        let state = self.state.read().await;
        let id = state.active?;
        state
            .documents
            .iter()
            .find(|d| d.id == id)
            .and_then(|d| d.processed.clone())
    }

    /// Like [`active`](Self::active), but explains why nothing is active.
    pub async fn require_active(&self) -> Result<Arc<ProcessedDocument>, ViewerError> {
        if self.is_empty().await {
            return Err(ViewerError::NoDocumentsLoaded);
        }
        self.active().await.ok_or(ViewerError::NoActiveDocument)
    }

    pub async fn list(&self) -> Vec<DocumentSummary> {
        let state = self.state.read().await;
        state
            .documents
            .iter()
            .map(|d| DocumentSummary {
                id: d.id,
                file_name: d.file_name.clone(),
                size_kb: (d.size_bytes as f64 / 1024.0 * 10.0).round() / 10.0,
                processed: d.is_processed(),
                active: state.active == Some(d.id),
            })
            .collect()
    }

    /// Name and processed flag per document, for the JSON snapshot.
    pub async fn statuses(&self) -> Vec<DocumentStatus> {
        self.state
            .read()
            .await
            .documents
            .iter()
            .map(|d| DocumentStatus {
                name: d.file_name.clone(),
                processed: d.is_processed(),
            })
            .collect()
    }

    pub async fn comparison_entries(&self) -> Vec<ComparisonEntry> {
        self.state
            .read()
            .await
            .documents
            .iter()
            .map(|d| ComparisonEntry {
                document_id: d.id,
                name: d.file_name.clone(),
                processed: d.is_processed(),
                summary: d.processed.as_ref().map(|p| p.analytics.summary),
            })
            .collect()
    }
}
