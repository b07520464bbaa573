//! Integration tests for the plan viewer.
//!
//! Drive `PlanViewerService` end to end with the filesystem adapters:
//! fixtures are read from `tests/fixtures`, exports and chart descriptions
//! are written into a temporary directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use stratml_insight::adapters::{JsonChartRenderer, LocalExportSink, LocalFileSource, XmlMarkupParser};
use stratml_insight::application::{
    NotificationLevel, PlanViewerService, ViewerError, ViewerOptions, ViewerPorts,
};
use stratml_insight::domain::analysis::{TrendAnalysis, TrendDirection};
use stratml_insight::domain::dashboard::{ChartKind, RenderType};
use stratml_insight::domain::foundation::{ErrorCode, IndicatorKey};
use stratml_insight::domain::plan::RoleCategory;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

struct Harness {
    service: PlanViewerService,
    dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    fn with_options(options: ViewerOptions) -> Self {
        let dir = TempDir::new().unwrap();
        let ports = ViewerPorts {
            source: Arc::new(LocalFileSource::new(1024 * 1024)),
            parser: Arc::new(XmlMarkupParser::new()),
            sink: Arc::new(LocalExportSink::new(dir.path().join("exports"))),
            renderer: Arc::new(JsonChartRenderer::new(dir.path().join("charts"))),
        };
        Self {
            service: PlanViewerService::new(ports, options),
            dir,
        }
    }

    fn exports(&self) -> PathBuf {
        self.dir.path().join("exports")
    }

    fn charts(&self) -> PathBuf {
        self.dir.path().join("charts")
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn loads_batch_and_processes_only_the_first_file() {
    let harness = Harness::new();

    let result = harness
        .service
        .load_files([fixture("water_report.xml"), fixture("transit_plan.xml")])
        .await;

    assert_eq!(result.loaded.len(), 2);
    assert!(result
        .notifications
        .iter()
        .all(|n| n.level == NotificationLevel::Success));
    assert_eq!(
        result.notifications[0].message,
        "Successfully loaded water_report.xml"
    );

    let documents = harness.service.documents().await;
    assert!(documents[0].processed && documents[0].active);
    assert!(!documents[1].processed);
}

#[tokio::test]
async fn bad_files_are_reported_without_affecting_good_ones() {
    let harness = Harness::new();

    let result = harness
        .service
        .load_files([
            fixture("malformed.xml"),
            fixture("missing.xml"),
            fixture("water_report.xml"),
        ])
        .await;

    assert_eq!(result.loaded.len(), 1);
    assert_eq!(result.failures.len(), 2);
    assert_eq!(result.failures[0].error.code(), ErrorCode::InvalidFormat);
    assert_eq!(result.failures[1].error.code(), ErrorCode::SourceUnavailable);

    let active = harness.service.active_document().await.unwrap();
    assert_eq!(active.file_name, "water_report.xml");
}

#[tokio::test]
async fn deeply_nested_file_fails_alone() {
    let harness = Harness::new();
    let deep = harness.dir.path().join("deep.xml");
    std::fs::write(
        &deep,
        format!(
            "<StrategicPlan>{}{}</StrategicPlan>",
            "<a>".repeat(5000),
            "</a>".repeat(5000)
        ),
    )
    .unwrap();

    let result = harness
        .service
        .load_files([deep.display().to_string(), fixture("transit_plan.xml")])
        .await;

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].error.code(), ErrorCode::InvalidFormat);
    let names: Vec<_> = harness
        .service
        .documents()
        .await
        .into_iter()
        .map(|d| d.file_name)
        .collect();
    assert_eq!(names, vec!["transit_plan.xml"]);
    assert!(result.processed.is_some());
}

#[tokio::test]
async fn registry_lists_files_in_the_order_given() {
    let harness = Harness::new();
    let batch = [
        fixture("transit_plan.xml"),
        fixture("water_report.xml"),
        fixture("inventory.xml"),
    ];

    harness.service.load_files(batch).await;

    let names: Vec<_> = harness
        .service
        .documents()
        .await
        .into_iter()
        .map(|d| d.file_name)
        .collect();
    assert_eq!(names, vec!["transit_plan.xml", "water_report.xml", "inventory.xml"]);
}

#[tokio::test]
async fn document_without_plan_root_is_loaded_but_not_processed() {
    let harness = Harness::new();

    let result = harness.service.load_files([fixture("inventory.xml")]).await;

    assert_eq!(result.loaded.len(), 1);
    assert!(result.processed.is_none());
    let last = result.notifications.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Error);
    assert_eq!(last.message, "No StratML content found in inventory.xml");
    assert_eq!(
        harness.service.active_document().await.unwrap_err(),
        ViewerError::NoActiveDocument
    );
}

// =============================================================================
// View and analytics
// =============================================================================

#[tokio::test]
async fn performance_report_view_and_analytics() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;

    let active = harness.service.active_document().await.unwrap();
    let view = &active.view;

    assert_eq!(view.info.name, "Water Utility Performance Report");
    assert_eq!(view.info.version, "3.0");
    assert_eq!(view.info.organization, "Riverside Water Authority");
    assert_eq!(view.info.period().as_deref(), Some("2022-01-01 - 2024-12-31"));
    assert_eq!(
        view.mission.as_deref(),
        Some("Safe, reliable water for every household")
    );

    let summary = view.summary;
    assert_eq!(summary.total_goals, 2);
    assert_eq!(summary.total_objectives, 3);
    assert_eq!(summary.total_indicators, 4);
    assert_eq!(summary.on_track_count, 5);
    assert_eq!(summary.at_risk_count, 1);
    let expected_avg = ((95.0 + 98.0 + 102.0) / 3.0 + 65.0 + 100.0) / 3.0;
    assert!(approx(summary.avg_performance, expected_avg));

    let compliance = view.indicator(IndicatorKey::new(0, 0, 0)).unwrap();
    let labels: Vec<&str> = compliance.series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["FY2022", "FY2023", "Period 3"]);
    assert_eq!(compliance.skipped_measurements, 1);
    assert_eq!(compliance.default_chart, Some(ChartKind::Line));

    let pipes = view.indicator(IndicatorKey::new(0, 0, 1)).unwrap();
    assert_eq!(pipes.indicator_type, "Output");

    let meetings = view.indicator(IndicatorKey::new(1, 0, 0)).unwrap();
    assert_eq!(meetings.measurements[0].heading, "Current");
    assert_eq!(meetings.default_chart, Some(ChartKind::Doughnut));

    let datasets = view.indicator(IndicatorKey::new(1, 1, 0)).unwrap();
    assert!(!datasets.has_series());
    assert!(datasets.available_charts.is_empty());

    assert_eq!(view.stakeholders[0].role_category, RoleCategory::Manager);
    assert_eq!(view.stakeholders[0].initials, "JD");
    assert_eq!(view.stakeholders[1].role.as_deref(), Some("Data Analyst"));
    assert_eq!(view.stakeholders[1].role_category, RoleCategory::Analyst);
}

#[tokio::test]
async fn table_of_contents_and_search() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;

    let active = harness.service.active_document().await.unwrap();
    let anchors: Vec<&str> = active
        .view
        .table_of_contents
        .iter()
        .map(|entry| entry.anchor.as_str())
        .collect();
    assert!(anchors.contains(&"goal-0"));
    assert!(anchors.contains(&"goal-1"));
    assert!(!anchors.contains(&"vision"));

    let hits = harness.service.search("open datasets").await.unwrap();
    let hit_anchors: Vec<&str> = hits.iter().map(|h| h.anchor.as_str()).collect();
    assert_eq!(hit_anchors, vec!["goal-1", "obj-1-1", "indicator-1-1-0"]);
}

#[tokio::test]
async fn trends_follow_series_endpoints() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;

    let rising = harness
        .service
        .indicator_trend(IndicatorKey::new(0, 0, 0))
        .await
        .unwrap();
    assert_eq!(rising.direction(), Some(TrendDirection::ModerateUpward));

    let falling = harness
        .service
        .indicator_trend(IndicatorKey::new(0, 0, 1))
        .await
        .unwrap();
    assert_eq!(falling.direction(), Some(TrendDirection::StrongDownward));

    let single = harness
        .service
        .indicator_trend(IndicatorKey::new(1, 0, 0))
        .await
        .unwrap();
    assert_eq!(single, TrendAnalysis::InsufficientData { points: 1 });
}

// =============================================================================
// Charts
// =============================================================================

#[tokio::test]
async fn processing_writes_chart_descriptions() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;
    harness.service.wait_for_charts().await;

    let charts = harness.charts();
    assert!(charts.join("canvas-indicator-0-0-0.json").exists());
    assert!(charts.join("canvas-indicator-1-0-0.json").exists());
    assert!(!charts.join("canvas-indicator-1-1-0.json").exists());

    let status: serde_json::Value = serde_json::from_str(&read(&charts.join("analyticsChart.json"))).unwrap();
    assert_eq!(status["renderType"], "pie");
    assert_eq!(status["datasets"][0]["data"], serde_json::json!([5.0, 1.0]));
}

#[tokio::test]
async fn gauge_chart_on_request() {
    let harness = Harness::new();
    harness.service.load_files([fixture("transit_plan.xml")]).await;

    let chart = harness
        .service
        .indicator_chart(IndicatorKey::new(0, 0, 0), Some(ChartKind::Gauge))
        .await
        .unwrap();

    assert_eq!(chart.render_type, RenderType::Doughnut);
    let data = &chart.datasets[0].data;
    assert!(approx(data[0], 60.0) && approx(data[1], 40.0));
    assert_eq!(chart.options.circumference, Some(180));
}

#[tokio::test]
async fn charts_can_be_disabled() {
    let harness = Harness::with_options(ViewerOptions {
        show_charts: false,
        ..ViewerOptions::default()
    });

    harness.service.load_files([fixture("water_report.xml")]).await;
    harness.service.wait_for_charts().await;

    assert!(!harness.charts().exists());
}

// =============================================================================
// Exports
// =============================================================================

#[tokio::test]
async fn indicator_csv_export() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;

    let exported = harness
        .service
        .export_indicator_csv(IndicatorKey::new(0, 0, 1))
        .await
        .unwrap();

    assert_eq!(
        exported.saved.location,
        harness.exports().join("indicator-0-0-1-data.csv")
    );
    let csv = read(&exported.saved.location);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,target,actual,variance,variancePercent,performance",
            "2023-06-30,50,40,-10,-20,80",
            "2024-06-30,50,25,-25,-50,50",
        ]
    );
}

#[tokio::test]
async fn csv_for_indicator_without_data_fails() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;
    let key = IndicatorKey::new(1, 1, 0);

    let err = harness.service.export_indicator_csv(key).await.unwrap_err();

    assert_eq!(err, ViewerError::NoDataForIndicator(key));
    assert!(!harness.exports().join("indicator-1-1-0-data.csv").exists());
}

#[tokio::test]
async fn json_snapshot_export() {
    let harness = Harness::new();
    harness
        .service
        .load_files([fixture("water_report.xml"), fixture("transit_plan.xml")])
        .await;

    let exported = harness.service.export_snapshot().await.unwrap();

    let file_name = exported.document.filename.clone();
    assert!(file_name.starts_with("stratml-export-") && file_name.ends_with(".json"));
    let json: serde_json::Value = serde_json::from_str(&read(&exported.saved.location)).unwrap();
    assert_eq!(json["metadata"]["documentCount"], 2);
    assert_eq!(json["metadata"]["version"], "2.0");
    assert_eq!(json["analytics"]["onTrackCount"], 5);
    assert_eq!(json["performance"].as_array().unwrap().len(), 3);
    assert_eq!(json["documents"][1]["name"], "transit_plan.xml");
    assert_eq!(json["documents"][1]["processed"], false);
}

#[tokio::test]
async fn html_report_ranks_top_indicators() {
    let harness = Harness::new();
    harness.service.load_files([fixture("water_report.xml")]).await;

    let generated = harness.service.generate_report().await.unwrap();

    let names: Vec<&str> = generated
        .report
        .top_indicators
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Public meetings", "Compliance rate", "Pipe replacements"]);

    let html = read(&generated.saved.location);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Public meetings"));
}

#[tokio::test]
async fn exports_require_a_loaded_document() {
    let harness = Harness::new();

    assert_eq!(
        harness.service.export_snapshot().await.unwrap_err(),
        ViewerError::NoDocumentsLoaded
    );
    assert_eq!(
        harness.service.generate_report().await.unwrap_err(),
        ViewerError::NoDocumentsLoaded
    );
}

// =============================================================================
// Multiple documents
// =============================================================================

#[tokio::test]
async fn selecting_and_comparing_documents() {
    let harness = Harness::new();
    assert_eq!(
        harness.service.compare_documents().await.unwrap_err(),
        ViewerError::ComparisonRequiresTwoDocuments { loaded: 0 }
    );

    harness
        .service
        .load_files([fixture("water_report.xml"), fixture("transit_plan.xml")])
        .await;
    let transit = harness.service.documents().await[1].id;
    let processed = harness.service.select_document(transit).await.unwrap();
    assert_eq!(processed.view.info.name, "Regional Transit Plan");
    assert_eq!(processed.view.vision.as_deref(), Some("A bus stop within ten minutes of every home"));

    let comparison = harness.service.compare_documents().await.unwrap();
    assert_eq!(comparison.documents.len(), 2);
    assert!(comparison.documents.iter().all(|d| d.processed));
    assert_eq!(comparison.message, "Comparison feature is being prepared...");
}
