//! GenerateReportHandler - Standalone HTML performance report.

use std::sync::Arc;

use tracing::info;

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::dashboard::{report_base_name, PerformanceReport};
use crate::domain::foundation::Timestamp;
use crate::ports::{ExportFormat, ExportSink, ExportedDocument, SavedExport};

pub const REPORT_TITLE: &str = "StratML Performance Report";

#[derive(Debug, Clone, Copy)]
pub struct GenerateReportCommand {
    pub at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub report: PerformanceReport,
    pub document: ExportedDocument,
    pub saved: SavedExport,
}

/// Builds the report from the active document and hands it to the sink for viewing.
pub struct GenerateReportHandler {
    registry: DocumentRegistry,
    sink: Arc<dyn ExportSink>,
}

impl GenerateReportHandler {
    pub fn new(registry: DocumentRegistry, sink: Arc<dyn ExportSink>) -> Self {
        Self { registry, sink }
    }

    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, ViewerError> {
        if self.registry.is_empty().await {
            return Err(ViewerError::NoDocumentsLoaded);
        }

        let analytics = self
            .registry
            .active()
            .await
            .map(|active| active.analytics.clone())
            .unwrap_or_default();
        let report =
            PerformanceReport::build(REPORT_TITLE, &cmd.at, analytics.summary, &analytics.indicators);

        let document = ExportedDocument::new(
            report.to_html(),
            ExportFormat::Html,
            &report_base_name(&cmd.at),
        );
        let saved = self.sink.present(&document).await?;

        info!(location = %saved.location.display(), "Generated performance report");
        Ok(GenerateReportResult {
            report,
            document,
            saved,
        })
    }
}
