//! ExportIndicatorCsvHandler - One indicator's series as a CSV file.

use std::sync::Arc;

use tracing::info;

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::dashboard::{indicator_csv_base_name, to_csv};
use crate::domain::foundation::IndicatorKey;
use crate::ports::{ExportFormat, ExportSink, ExportedDocument, SavedExport};

/// Command to export an indicator of the active document.
#[derive(Debug, Clone, Copy)]
pub struct ExportIndicatorCsvCommand {
    pub indicator: IndicatorKey,
}

#[derive(Debug, Clone)]
pub struct ExportIndicatorCsvResult {
    pub document: ExportedDocument,
    pub saved: SavedExport,
}

pub struct ExportIndicatorCsvHandler {
    registry: DocumentRegistry,
    sink: Arc<dyn ExportSink>,
}

impl ExportIndicatorCsvHandler {
    pub fn new(registry: DocumentRegistry, sink: Arc<dyn ExportSink>) -> Self {
        Self { registry, sink }
    }

    pub async fn handle(
        &self,
        cmd: ExportIndicatorCsvCommand,
    ) -> Result<ExportIndicatorCsvResult, ViewerError> {
        let active = self.registry.require_active().await?;
        if active.view.indicator(cmd.indicator).is_none() {
            return Err(ViewerError::IndicatorNotFound(cmd.indicator));
        }

        let series = active
            .analytics
            .indicator(cmd.indicator)
            .map(|ip| ip.data.as_slice())
            .unwrap_or_default();
        let csv = to_csv(series)?.ok_or(ViewerError::NoDataForIndicator(cmd.indicator))?;

        let document = ExportedDocument::new(
            csv,
            ExportFormat::Csv,
            &indicator_csv_base_name(cmd.indicator),
        );
        let saved = self.sink.save(&document).await?;

        info!(
            indicator = %cmd.indicator,
            rows = series.len(),
            location = %saved.location.display(),
            "Exported indicator CSV"
        );
        Ok(ExportIndicatorCsvResult { document, saved })
    }
}
