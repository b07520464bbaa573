//! In-Memory Export Sink
//!
//! Keeps exported documents in memory. Useful for testing and development.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{ExportError, ExportSink, ExportedDocument, SavedExport};

/// In-memory sink recording every saved and presented export.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExportSink {
    saved: Arc<RwLock<Vec<ExportedDocument>>>,
    presented: Arc<RwLock<Vec<String>>>,
}

impl InMemoryExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All saved documents in save order.
    pub async fn saved(&self) -> Vec<ExportedDocument> {
        self.saved.read().await.clone()
    }

    /// The most recently saved document with this filename.
    pub async fn find(&self, filename: &str) -> Option<ExportedDocument> {
        self.saved
            .read()
            .await
            .iter()
            .rev()
            .find(|doc| doc.filename == filename)
            .cloned()
    }

    /// Filenames passed to `present`.
    pub async fn presented(&self) -> Vec<String> {
        self.presented.read().await.clone()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.saved.write().await.clear();
        self.presented.write().await.clear();
    }
}

#[async_trait]
impl ExportSink for InMemoryExportSink {
    async fn save(&self, document: &ExportedDocument) -> Result<SavedExport, ExportError> {
        self.saved.write().await.push(document.clone());
        Ok(SavedExport {
            location: PathBuf::from(&document.filename),
            size_bytes: document.content.len() as u64,
        })
    }

    async fn present(&self, document: &ExportedDocument) -> Result<SavedExport, ExportError> {
        let saved = self.save(document).await?;
        self.presented.write().await.push(document.filename.clone());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;

    #[tokio::test]
    async fn records_saves_in_order() {
        let sink = InMemoryExportSink::new();
        sink.save(&ExportedDocument::new("1", ExportFormat::Csv, "a")).await.unwrap();
        sink.save(&ExportedDocument::new("2", ExportFormat::Csv, "b")).await.unwrap();

        let names: Vec<_> = sink.saved().await.into_iter().map(|d| d.filename).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[tokio::test]
    async fn find_returns_latest_with_name() {
        let sink = InMemoryExportSink::new();
        sink.save(&ExportedDocument::new("old", ExportFormat::Json, "x")).await.unwrap();
        sink.save(&ExportedDocument::new("new", ExportFormat::Json, "x")).await.unwrap();

        let found = sink.find("x.json").await.unwrap();
        assert_eq!(found.as_str(), Some("new"));
    }

    #[tokio::test]
    async fn present_records_and_saves() {
        let sink = InMemoryExportSink::new();
        sink.present(&ExportedDocument::new("<html/>", ExportFormat::Html, "r"))
            .await
            .unwrap();

        assert_eq!(sink.presented().await, vec!["r.html"]);
        assert_eq!(sink.saved().await.len(), 1);

        sink.clear().await;
        assert!(sink.saved().await.is_empty());
    }
}
