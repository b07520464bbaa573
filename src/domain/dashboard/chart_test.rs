use crate::domain::analysis::AnalyticsSummary;
use crate::domain::dashboard::chart::*;
use crate::domain::dashboard::SeriesPoint;

fn point(label: &str, target: f64, actual: f64) -> SeriesPoint {
    SeriesPoint {
        label: label.to_string(),
        target,
        actual,
        performance: if target != 0.0 { actual / target * 100.0 } else { 0.0 },
    }
}

fn series() -> Vec<SeriesPoint> {
    vec![point("Q1", 100.0, 80.0), point("Q2", 100.0, 110.0)]
}

#[test]
fn default_kind_depends_on_point_count() {
    assert_eq!(ChartKind::default_for(2), ChartKind::Line);
    assert_eq!(ChartKind::default_for(1), ChartKind::Doughnut);
    assert_eq!(ChartKind::default_for(0), ChartKind::Doughnut);
}

#[test]
fn empty_series_has_no_chart() {
    for kind in ChartKind::ALL {
        assert!(describe(kind, &[]).is_none(), "{kind}");
    }
}

#[test]
fn line_chart_plots_target_and_actual() {
    let chart = describe(ChartKind::Line, &series()).unwrap();

    assert_eq!(chart.render_type, RenderType::Line);
    assert_eq!(chart.labels, vec!["Q1", "Q2"]);
    assert_eq!(chart.datasets[0].label, "Target");
    assert_eq!(chart.datasets[0].data, vec![100.0, 100.0]);
    assert_eq!(chart.datasets[1].label, "Actual");
    assert_eq!(chart.datasets[1].data, vec![80.0, 110.0]);
    assert!(chart.options.begin_at_zero);
}

#[test]
fn bar_chart_uses_bar_primitive() {
    let chart = describe(ChartKind::Bar, &series()).unwrap();
    assert_eq!(chart.render_type, RenderType::Bar);
    assert_eq!(chart.title, "Target vs Actual Comparison");
}

#[test]
fn radar_uses_latest_point_and_caps_derived_dimensions() {
    let chart = describe(ChartKind::Radar, &series()).unwrap();
    let data = &chart.datasets[0].data;

    assert_eq!(chart.labels.len(), 5);
    assert!((data[0] - 110.0).abs() < 1e-9);
    assert!((data[1] - 99.0).abs() < 1e-9);
    assert_eq!(data[2], 100.0);
    assert_eq!(data[3], 100.0);
    assert!((data[4] - 96.8).abs() < 1e-9);
    assert_eq!(chart.options.max, Some(100.0));
}

#[test]
fn doughnut_splits_achieved_and_remaining() {
    let chart = describe(ChartKind::Doughnut, &[point("Current", 100.0, 64.0)]).unwrap();
    let dataset = &chart.datasets[0];

    assert_eq!(dataset.data, vec![64.0, 36.0]);
    assert_eq!(dataset.colours[0], "#ffc107");
    assert_eq!(chart.options.center_text.as_deref(), Some("64.0%"));
}

#[test]
fn doughnut_over_target_has_no_remaining() {
    let chart = describe(ChartKind::Doughnut, &[point("Current", 50.0, 75.0)]).unwrap();
    assert_eq!(chart.datasets[0].data, vec![100.0, 0.0]);
    assert_eq!(chart.datasets[0].colours[0], "#28a745");
}

#[test]
fn gauge_is_half_circle_doughnut() {
    let chart = describe(ChartKind::Gauge, &[point("Current", 100.0, 85.0)]).unwrap();

    assert_eq!(chart.render_type, RenderType::Doughnut);
    assert_eq!(chart.options.circumference, Some(180));
    assert_eq!(chart.options.rotation, Some(270));
    assert_eq!(chart.datasets[0].data, vec![85.0, 15.0]);
    assert!(!chart.options.show_legend);
}

#[test]
fn status_chart_counts_buckets() {
    let summary = AnalyticsSummary {
        on_track_count: 7,
        at_risk_count: 3,
        ..AnalyticsSummary::default()
    };
    let chart = status_chart(&summary);

    assert_eq!(chart.render_type, RenderType::Pie);
    assert_eq!(chart.labels, vec!["On Track", "At Risk"]);
    assert_eq!(chart.datasets[0].data, vec![7.0, 3.0]);
}

#[test]
fn chart_kind_parses_case_insensitively() {
    assert_eq!("Radar".parse::<ChartKind>().unwrap(), ChartKind::Radar);
    assert!("pie".parse::<ChartKind>().is_err());
}

#[test]
fn description_serializes_without_unset_options() {
    let chart = describe(ChartKind::Line, &series()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["renderType"], "line");
    assert!(json["options"].get("circumference").is_none());
}
