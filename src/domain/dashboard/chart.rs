//! Chart descriptions - Declarative input for the chart collaborator.
//!
//! Every chart is produced by one pure function, [`describe`], from a closed
//! [`ChartKind`] and an indicator's series. Renderers never see the source
//! model, only the description.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalyticsSummary, PerformanceStatus};

use super::SeriesPoint;

const TARGET_COLOUR: &str = "#007bff";
const ACTUAL_COLOUR: &str = "#28a745";
const RADAR_COLOUR: &str = "#667eea";
const TRACK_COLOUR: &str = "#e9ecef";
const ON_TRACK_COLOUR: &str = "#28a745";
const AT_RISK_COLOUR: &str = "#dc3545";

/// Radar dimensions and the multiplier applied to the latest performance.
const RADAR_DIMENSIONS: [(&str, f64); 5] = [
    ("Achievement", 1.0),
    ("Consistency", 0.9),
    ("Efficiency", 0.95),
    ("Quality", 0.92),
    ("Timeliness", 0.88),
];

/// The chart views an indicator can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
    Doughnut,
    Gauge,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Radar,
        ChartKind::Doughnut,
        ChartKind::Gauge,
    ];

    /// Line for a series of two or more points, doughnut otherwise.
    pub fn default_for(points: usize) -> Self {
        if points > 1 {
            ChartKind::Line
        } else {
            ChartKind::Doughnut
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Radar => "radar",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Gauge => "gauge",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Line => "Performance Trend Analysis",
            ChartKind::Bar => "Target vs Actual Comparison",
            ChartKind::Radar => "Multi-Dimensional Performance",
            ChartKind::Doughnut => "Achievement Rate",
            ChartKind::Gauge => "Performance Gauge",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown chart kind '{s}'"))
    }
}

/// Drawing primitive the renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    Line,
    Bar,
    Radar,
    Doughnut,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub colours: Vec<String>,
}

impl Dataset {
    fn new(label: impl Into<String>, data: Vec<f64>, colours: &[&str]) -> Self {
        Self {
            label: label.into(),
            data,
            colours: colours.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Display options. Only the options a chart needs are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Arc span in degrees; gauges use a half circle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circumference: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u32>,
    /// Inner cut-out of ring charts, as a percentage of the radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout_percent: Option<u32>,
    /// Text drawn in the middle of ring charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_text: Option<String>,
    pub show_legend: bool,
}

/// A complete, renderer-agnostic chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    pub render_type: RenderType,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

/// Describes `series` as a chart of `kind`.
///
/// Line and bar charts plot every point; radar uses the latest point;
/// doughnut and gauge use the first point. Returns `None` for an empty series.
pub fn describe(kind: ChartKind, series: &[SeriesPoint]) -> Option<ChartDescription> {
    let first = series.first()?;
    let last = series.last()?;

    let description = match kind {
        ChartKind::Line | ChartKind::Bar => ChartDescription {
            render_type: if kind == ChartKind::Line {
                RenderType::Line
            } else {
                RenderType::Bar
            },
            title: kind.title().to_string(),
            labels: series.iter().map(|p| p.label.clone()).collect(),
            datasets: vec![
                Dataset::new("Target", series.iter().map(|p| p.target).collect(), &[TARGET_COLOUR]),
                Dataset::new("Actual", series.iter().map(|p| p.actual).collect(), &[ACTUAL_COLOUR]),
            ],
            options: ChartOptions {
                begin_at_zero: true,
                show_legend: true,
                ..ChartOptions::default()
            },
        },
        ChartKind::Radar => {
            let p = last.performance;
            let data = RADAR_DIMENSIONS
                .iter()
                .enumerate()
                .map(|(i, (_, factor))| if i == 0 { p } else { (p * factor).min(100.0) })
                .collect();
            ChartDescription {
                render_type: RenderType::Radar,
                title: kind.title().to_string(),
                labels: RADAR_DIMENSIONS.iter().map(|(name, _)| name.to_string()).collect(),
                datasets: vec![Dataset::new("Performance Score", data, &[RADAR_COLOUR])],
                options: ChartOptions {
                    begin_at_zero: true,
                    max: Some(100.0),
                    ..ChartOptions::default()
                },
            }
        }
        ChartKind::Doughnut => {
            let p = first.performance;
            let colour = PerformanceStatus::classify(p).colour();
            ChartDescription {
                render_type: RenderType::Doughnut,
                title: kind.title().to_string(),
                labels: vec!["Achieved".to_string(), "Remaining".to_string()],
                datasets: vec![Dataset::new(
                    "Achievement",
                    vec![p.min(100.0), (100.0 - p).max(0.0)],
                    &[colour, TRACK_COLOUR],
                )],
                options: ChartOptions {
                    cutout_percent: Some(70),
                    center_text: Some(format!("{p:.1}%")),
                    show_legend: true,
                    ..ChartOptions::default()
                },
            }
        }
        ChartKind::Gauge => {
            let p = first.performance;
            let colour = PerformanceStatus::classify(p).colour();
            ChartDescription {
                render_type: RenderType::Doughnut,
                title: kind.title().to_string(),
                labels: Vec::new(),
                datasets: vec![Dataset::new(
                    "Performance",
                    vec![p, 100.0 - p],
                    &[colour, TRACK_COLOUR],
                )],
                options: ChartOptions {
                    circumference: Some(180),
                    rotation: Some(270),
                    center_text: Some(format!("{p:.1}%")),
                    ..ChartOptions::default()
                },
            }
        }
    };

    Some(description)
}

/// Document-level pie of on-track versus at-risk measurements.
pub fn status_chart(summary: &AnalyticsSummary) -> ChartDescription {
    ChartDescription {
        render_type: RenderType::Pie,
        title: "Overall Performance Status".to_string(),
        labels: vec!["On Track".to_string(), "At Risk".to_string()],
        datasets: vec![Dataset::new(
            "Measurements",
            vec![summary.on_track_count as f64, summary.at_risk_count as f64],
            &[ON_TRACK_COLOUR, AT_RISK_COLOUR],
        )],
        options: ChartOptions {
            show_legend: true,
            ..ChartOptions::default()
        },
    }
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;
