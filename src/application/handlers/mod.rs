//! Application handlers.
//!
//! Command and query handlers that orchestrate the registry, the pipeline
//! and the ports.

mod compare_documents;
mod export_indicator_csv;
mod export_snapshot;
mod generate_report;
mod indicator_queries;
mod load_documents;
mod process_document;
mod render_charts;
mod search_plan;

#[cfg(test)]
pub(crate) mod test_support;

pub use compare_documents::{CompareDocumentsHandler, CompareDocumentsQuery, MIN_COMPARED_DOCUMENTS};
pub use export_indicator_csv::{
    ExportIndicatorCsvCommand, ExportIndicatorCsvHandler, ExportIndicatorCsvResult,
};
pub use export_snapshot::{ExportSnapshotCommand, ExportSnapshotHandler, ExportSnapshotResult};
pub use generate_report::{
    GenerateReportCommand, GenerateReportHandler, GenerateReportResult, REPORT_TITLE,
};
pub use indicator_queries::{
    GetIndicatorChartHandler, GetIndicatorChartQuery, GetIndicatorTrendHandler,
    GetIndicatorTrendQuery,
};
pub use load_documents::{
    LoadDocumentsCommand, LoadDocumentsHandler, LoadDocumentsResult, LoadFailure, LoadedFile,
};
pub use process_document::{
    ProcessDocumentCommand, ProcessDocumentHandler, ProcessDocumentResult,
};
pub use render_charts::{indicator_chart_target, ChartDispatcher, STATUS_CHART_TARGET};
pub use search_plan::{SearchPlanHandler, SearchPlanQuery};
