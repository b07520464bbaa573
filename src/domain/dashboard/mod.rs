//! Dashboard module - View-Model Assembler.
//!
//! Merges extraction output and analytics into render-ready structures:
//! the plan view, chart descriptions, export payloads and the report.

pub mod chart;
pub mod comparison;
pub mod export;
pub mod format;
pub mod report;
pub mod search;
pub mod toc;
pub mod view;

pub use chart::{describe, status_chart, ChartDescription, ChartKind, ChartOptions, Dataset, RenderType};
pub use comparison::{ComparisonEntry, ComparisonStatus, DocumentComparison};
pub use export::{
    indicator_csv_base_name, snapshot_base_name, to_csv, DocumentStatus, ExportSnapshot,
    SnapshotMetadata, SNAPSHOT_VERSION,
};
pub use format::{format_percent, format_value, format_variance};
pub use report::{report_base_name, top_indicators, PerformanceReport, ReportEntry};
pub use search::{search, SearchHit, SectionKind};
pub use toc::{build_table_of_contents, TocEntry};
pub use view::{
    DocumentInfo, GoalView, IndicatorView, MeasurementView, ObjectiveView, PlanView, ProgressBar,
    SeriesPoint, StakeholderView, TrendArrow, VarianceSign, ViewAssembler,
};
