//! ExportSnapshotHandler - Analytics snapshot of the session as JSON.

use std::sync::Arc;

use tracing::info;

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::dashboard::{snapshot_base_name, ExportSnapshot};
use crate::domain::foundation::Timestamp;
use crate::ports::{ExportFormat, ExportSink, ExportedDocument, SavedExport};

#[derive(Debug, Clone, Copy)]
pub struct ExportSnapshotCommand {
    pub at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct ExportSnapshotResult {
    pub snapshot: ExportSnapshot,
    pub document: ExportedDocument,
    pub saved: SavedExport,
}

/// Handler for the JSON export.
///
/// Analytics come from the active document; with nothing processed yet the
/// snapshot still lists the loaded documents, with zeroed totals.
pub struct ExportSnapshotHandler {
    registry: DocumentRegistry,
    sink: Arc<dyn ExportSink>,
}

impl ExportSnapshotHandler {
    pub fn new(registry: DocumentRegistry, sink: Arc<dyn ExportSink>) -> Self {
        Self { registry, sink }
    }

    pub async fn handle(
        &self,
        cmd: ExportSnapshotCommand,
    ) -> Result<ExportSnapshotResult, ViewerError> {
        if self.registry.is_empty().await {
            return Err(ViewerError::NoDocumentsLoaded);
        }

        let analytics = self
            .registry
            .active()
            .await
            .map(|active| active.analytics.clone())
            .unwrap_or_default();
        let snapshot = ExportSnapshot::new(
            &cmd.at,
            analytics.summary,
            analytics.indicators,
            self.registry.statuses().await,
        );

        let document = ExportedDocument::new(
            snapshot.to_json_pretty()?,
            ExportFormat::Json,
            &snapshot_base_name(&cmd.at),
        );
        let saved = self.sink.save(&document).await?;

        info!(
            documents = snapshot.metadata.document_count,
            location = %saved.location.display(),
            "Exported analytics snapshot"
        );
        Ok(ExportSnapshotResult {
            snapshot,
            document,
            saved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::markup::XmlMarkupParser;
    use crate::adapters::storage::InMemoryExportSink;
    use crate::application::handlers::test_support::{registry_with_processed, LIBRARY_PLAN};
    use crate::ports::MarkupParser;
    use chrono::{TimeZone, Utc};

    fn at() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap())
    }

    #[tokio::test]
    async fn snapshot_carries_metadata_analytics_and_documents() {
        let (registry, _) = registry_with_processed(LIBRARY_PLAN).await;
        let tree = XmlMarkupParser::new().parse(LIBRARY_PLAN).unwrap();
        registry.append("second.xml", 1, tree).await;
        let sink = Arc::new(InMemoryExportSink::new());
        let handler = ExportSnapshotHandler::new(registry, sink.clone());

        let result = handler.handle(ExportSnapshotCommand { at: at() }).await.unwrap();

        assert_eq!(result.document.filename, "stratml-export-2024-03-09.json");
        let json: serde_json::Value =
            serde_json::from_str(result.document.as_str().unwrap()).unwrap();
        assert_eq!(json["metadata"]["exportDate"], "2024-03-09T14:30:00.000Z");
        assert_eq!(json["metadata"]["documentCount"], 2);
        assert_eq!(json["metadata"]["version"], "2.0");
        assert_eq!(json["analytics"]["totalIndicators"], 2);
        assert_eq!(json["performance"][0]["id"], "indicator-0-0-0");
        assert_eq!(json["performance"][0]["data"].as_array().unwrap().len(), 4);
        assert_eq!(json["documents"][0]["processed"], true);
        assert_eq!(json["documents"][1]["name"], "second.xml");
        assert_eq!(json["documents"][1]["processed"], false);
        assert_eq!(sink.saved().await.len(), 1);
    }

    #[tokio::test]
    async fn unprocessed_session_exports_zeroed_analytics() {
        let registry = DocumentRegistry::new();
        let tree = XmlMarkupParser::new().parse(LIBRARY_PLAN).unwrap();
        registry.append("only.xml", 1, tree).await;
        let handler = ExportSnapshotHandler::new(registry, Arc::new(InMemoryExportSink::new()));

        let result = handler.handle(ExportSnapshotCommand { at: at() }).await.unwrap();

        assert_eq!(result.snapshot.analytics.total_goals, 0);
        assert!(result.snapshot.performance.is_empty());
        assert_eq!(result.snapshot.documents.len(), 1);
    }

    #[tokio::test]
    async fn empty_session_cannot_export() {
        let handler =
            ExportSnapshotHandler::new(DocumentRegistry::new(), Arc::new(InMemoryExportSink::new()));

        let err = handler.handle(ExportSnapshotCommand { at: at() }).await.unwrap_err();

        assert_eq!(err, ViewerError::NoDocumentsLoaded);
    }
}
