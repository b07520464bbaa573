//! In-Memory Document Source
//!
//! Serves documents from memory. Useful for testing and for callers that
//! already hold the text.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{DocumentSource, SourceDocument, SourceError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentSource {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `content` under `location`, replacing any previous entry.
    pub async fn insert(&self, location: impl Into<String>, content: impl Into<String>) {
        self.documents
            .write()
            .await
            .insert(location.into(), content.into());
    }

    /// Builds a source holding `documents`, keyed by location.
    pub fn with_documents<I, L, C>(documents: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        let documents: HashMap<String, String> = documents
            .into_iter()
            .map(|(location, content)| (location.into(), content.into()))
            .collect();
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn read(&self, location: &str) -> Result<SourceDocument, SourceError> {
        let documents = self.documents.read().await;
        let content = documents
            .get(location)
            .ok_or_else(|| SourceError::NotFound(location.to_string()))?;
        let file_name = location.rsplit('/').next().unwrap_or(location);
        Ok(SourceDocument::new(file_name, content.clone()))
    }
}
