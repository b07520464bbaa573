//! PlanViewerService - The command/query surface of the viewer.
//!
//! Wires the handlers to one shared registry and a fixed set of ports. The
//! CLI and the integration tests drive the viewer through this type only.

use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::domain::analysis::TrendAnalysis;
use crate::domain::dashboard::{ChartDescription, ChartKind, DocumentComparison, SearchHit};
use crate::domain::foundation::{DocumentId, IndicatorKey, Timestamp};
use crate::ports::{ChartRenderer, DocumentSource, ExportSink, MarkupParser};

use super::handlers::{
    ChartDispatcher, CompareDocumentsHandler, CompareDocumentsQuery, ExportIndicatorCsvCommand,
    ExportIndicatorCsvHandler, ExportIndicatorCsvResult, ExportSnapshotCommand,
    ExportSnapshotHandler, ExportSnapshotResult, GenerateReportCommand, GenerateReportHandler,
    GenerateReportResult, GetIndicatorChartHandler, GetIndicatorChartQuery,
    GetIndicatorTrendHandler, GetIndicatorTrendQuery, LoadDocumentsCommand, LoadDocumentsHandler,
    LoadDocumentsResult, ProcessDocumentCommand, ProcessDocumentHandler, SearchPlanHandler,
    SearchPlanQuery,
};
use super::{DocumentRegistry, DocumentSummary, ProcessedDocument, ViewerError};

/// Behaviour switches taken from [`ViewerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub auto_process_first: bool,
    pub show_charts: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            auto_process_first: true,
            show_charts: true,
        }
    }
}

impl From<&ViewerConfig> for ViewerOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            auto_process_first: config.auto_process_first,
            show_charts: config.show_charts,
        }
    }
}

/// Ports the service depends on.
#[derive(Clone)]
pub struct ViewerPorts {
    pub source: Arc<dyn DocumentSource>,
    pub parser: Arc<dyn MarkupParser>,
    pub sink: Arc<dyn ExportSink>,
    pub renderer: Arc<dyn ChartRenderer>,
}

pub struct PlanViewerService {
    registry: DocumentRegistry,
    options: ViewerOptions,
    load: LoadDocumentsHandler,
    process: Arc<ProcessDocumentHandler>,
    export_csv: ExportIndicatorCsvHandler,
    export_snapshot: ExportSnapshotHandler,
    report: GenerateReportHandler,
    trend: GetIndicatorTrendHandler,
    chart: GetIndicatorChartHandler,
    search: SearchPlanHandler,
    compare: CompareDocumentsHandler,
    charts: Option<ChartDispatcher>,
}

impl PlanViewerService {
    pub fn new(ports: ViewerPorts, options: ViewerOptions) -> Self {
        let registry = DocumentRegistry::new();
        let charts = options
            .show_charts
            .then(|| ChartDispatcher::new(Arc::clone(&ports.renderer)));

        let process = Arc::new(ProcessDocumentHandler::new(registry.clone(), charts.clone()));
        Self {
            load: LoadDocumentsHandler::new(
                ports.source,
                ports.parser,
                registry.clone(),
                Arc::clone(&process),
            ),
            process,
            export_csv: ExportIndicatorCsvHandler::new(registry.clone(), Arc::clone(&ports.sink)),
            export_snapshot: ExportSnapshotHandler::new(registry.clone(), Arc::clone(&ports.sink)),
            report: GenerateReportHandler::new(registry.clone(), ports.sink),
            trend: GetIndicatorTrendHandler::new(registry.clone()),
            chart: GetIndicatorChartHandler::new(registry.clone(), charts.clone()),
            search: SearchPlanHandler::new(registry.clone()),
            compare: CompareDocumentsHandler::new(registry.clone()),
            registry,
            options,
            charts,
        }
    }

    pub fn options(&self) -> ViewerOptions {
        self.options
    }

    /// Loads a batch of files; see [`LoadDocumentsHandler`].
    pub async fn load_files<I, S>(&self, locations: I) -> LoadDocumentsResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load
            .handle(LoadDocumentsCommand {
                locations: locations.into_iter().map(Into::into).collect(),
                auto_process_first: self.options.auto_process_first,
            })
            .await
    }

    /// Processes a loaded document and makes it active.
    pub async fn select_document(
        &self,
        document_id: DocumentId,
    ) -> Result<Arc<ProcessedDocument>, ViewerError> {
        self.process
            .handle(ProcessDocumentCommand { document_id })
            .await
    }

    pub async fn documents(&self) -> Vec<DocumentSummary> {
        self.registry.list().await
    }

    pub async fn active_document(&self) -> Result<Arc<ProcessedDocument>, ViewerError> {
        self.registry.require_active().await
    }

    pub async fn export_indicator_csv(
        &self,
        indicator: IndicatorKey,
    ) -> Result<ExportIndicatorCsvResult, ViewerError> {
        self.export_csv
            .handle(ExportIndicatorCsvCommand { indicator })
            .await
    }

    pub async fn export_snapshot(&self) -> Result<ExportSnapshotResult, ViewerError> {
        self.export_snapshot
            .handle(ExportSnapshotCommand { at: Timestamp::now() })
            .await
    }

    pub async fn generate_report(&self) -> Result<GenerateReportResult, ViewerError> {
        self.report
            .handle(GenerateReportCommand { at: Timestamp::now() })
            .await
    }

    pub async fn indicator_trend(&self, indicator: IndicatorKey) -> Result<TrendAnalysis, ViewerError> {
        self.trend.handle(GetIndicatorTrendQuery { indicator }).await
    }

    pub async fn indicator_chart(
        &self,
        indicator: IndicatorKey,
        kind: Option<ChartKind>,
    ) -> Result<ChartDescription, ViewerError> {
        self.chart
            .handle(GetIndicatorChartQuery { indicator, kind })
            .await
    }

    pub async fn search(&self, text: &str) -> Result<Vec<SearchHit>, ViewerError> {
        self.search
            .handle(SearchPlanQuery {
                text: text.to_string(),
            })
            .await
    }

    pub async fn compare_documents(&self) -> Result<DocumentComparison, ViewerError> {
        self.compare.handle(CompareDocumentsQuery).await
    }

    /// Waits for chart rendering dispatched so far. Call before exiting.
    pub async fn wait_for_charts(&self) {
        if let Some(charts) = &self.charts {
            charts.wait().await;
        }
    }
}
