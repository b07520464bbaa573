//! Plan view model - Extraction and analytics merged for presentation.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AnalyticsSummary, IndicatorPerformance, MeasurementMetrics, PerformanceStatus, PlanAnalytics,
};
use crate::domain::foundation::IndicatorKey;
use crate::domain::plan::{
    CoreValue, Extraction, Goal, Indicator, MeasurementSource, Objective, RoleCategory,
    Stakeholder,
};

use super::format::{format_percent, format_value, format_variance};
use super::toc::{build_table_of_contents, TocEntry};
use super::ChartKind;

/// Progress bars stop growing at this percentage.
pub const PROGRESS_CAP: f64 = 150.0;

/// The complete render-ready view of one processed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub info: DocumentInfo,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub values: Vec<CoreValue>,
    pub goals: Vec<GoalView>,
    pub stakeholders: Vec<StakeholderView>,
    pub summary: AnalyticsSummary,
    pub table_of_contents: Vec<TocEntry>,
}

impl PlanView {
    pub fn indicators(&self) -> impl Iterator<Item = &IndicatorView> {
        self.goals
            .iter()
            .flat_map(|g| g.objectives.iter())
            .flat_map(|o| o.indicators.iter())
    }

    pub fn indicator(&self, key: IndicatorKey) -> Option<&IndicatorView> {
        self.indicators().find(|i| i.id == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub name: String,
    pub description: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub version: String,
    pub submitter: String,
    pub publication_date: String,
}

impl DocumentInfo {
    /// `"start - end"` with `N/A` for a missing end; `None` when both are missing.
    pub fn period(&self) -> Option<String> {
        if self.start_date.is_empty() && self.end_date.is_empty() {
            return None;
        }
        let or_na = |s: &str| if s.is_empty() { "N/A".to_string() } else { s.to_string() };
        Some(format!("{} - {}", or_na(&self.start_date), or_na(&self.end_date)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub anchor: String,
    /// 1-based number shown in headings.
    pub number: usize,
    pub name: String,
    pub description: String,
    pub objectives: Vec<ObjectiveView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveView {
    pub anchor: String,
    pub number: usize,
    pub name: String,
    pub description: String,
    pub indicators: Vec<IndicatorView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorView {
    pub id: IndicatorKey,
    pub name: String,
    pub description: String,
    pub indicator_type: String,
    pub unit: Option<String>,
    pub measurements: Vec<MeasurementView>,
    /// Chart-ready series; empty when nothing was retained.
    pub series: Vec<SeriesPoint>,
    pub average_performance: Option<f64>,
    pub default_chart: Option<ChartKind>,
    pub available_charts: Vec<ChartKind>,
    pub skipped_measurements: usize,
}

impl IndicatorView {
    pub fn has_series(&self) -> bool {
        !self.series.is_empty()
    }
}

/// One point of an indicator's chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub label: String,
    pub target: f64,
    pub actual: f64,
    pub performance: f64,
}

impl From<&MeasurementMetrics> for SeriesPoint {
    fn from(metrics: &MeasurementMetrics) -> Self {
        Self {
            label: metrics.label.clone(),
            target: metrics.target,
            actual: metrics.actual,
            performance: metrics.performance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendArrow {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceSign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    /// Performance capped at [`PROGRESS_CAP`], shown as text.
    pub percentage: f64,
    /// Bar fill width, capped at 100.
    pub fill: f64,
}

impl ProgressBar {
    /// No bar is drawn against a zero target.
    pub fn for_measurement(target: f64, performance: f64) -> Option<Self> {
        if target == 0.0 {
            return None;
        }
        let percentage = performance.min(PROGRESS_CAP);
        Some(Self {
            percentage,
            fill: percentage.min(100.0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementView {
    pub heading: String,
    pub target_display: String,
    pub actual_display: String,
    pub performance: f64,
    pub performance_display: String,
    pub trend_arrow: TrendArrow,
    pub variance: f64,
    pub variance_display: String,
    pub variance_sign: VarianceSign,
    pub status: PerformanceStatus,
    /// Presentation class for the status badge.
    pub status_class: String,
    pub progress: Option<ProgressBar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderView {
    pub name: String,
    pub role: Option<String>,
    pub role_category: RoleCategory,
    pub icon: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub initials: String,
}

impl From<&Stakeholder> for StakeholderView {
    fn from(stakeholder: &Stakeholder) -> Self {
        Self {
            name: if stakeholder.name.is_empty() {
                "Unnamed Stakeholder".to_string()
            } else {
                stakeholder.name.clone()
            },
            role: stakeholder.role.clone(),
            role_category: stakeholder.role_category(),
            icon: stakeholder.role_category().icon().to_string(),
            email: stakeholder.email.clone(),
            phone: stakeholder.phone.clone(),
            organization: stakeholder.organization.clone(),
            initials: stakeholder.initials.clone(),
        }
    }
}

/// Builds a [`PlanView`] from extraction output and its analytics.
pub struct ViewAssembler;

impl ViewAssembler {
    pub fn assemble(extraction: &Extraction, analytics: &PlanAnalytics) -> PlanView {
        let plan = &extraction.plan;
        let mut view = PlanView {
            info: DocumentInfo {
                name: plan.name.clone(),
                description: plan.description.clone(),
                organization: plan.organization.clone(),
                start_date: plan.start_date.clone(),
                end_date: plan.end_date.clone(),
                version: plan.version.clone(),
                submitter: plan.submitter.clone(),
                publication_date: plan.publication_date.clone(),
            },
            vision: plan.vision.as_ref().map(|s| s.description.clone()),
            mission: plan.mission.as_ref().map(|s| s.description.clone()),
            values: plan.values.clone(),
            goals: plan
                .goals
                .iter()
                .map(|goal| Self::goal(goal, analytics))
                .collect(),
            stakeholders: plan.stakeholders.iter().map(StakeholderView::from).collect(),
            summary: analytics.summary,
            table_of_contents: Vec::new(),
        };
        view.table_of_contents = build_table_of_contents(&view);
        view
    }

    fn goal(goal: &Goal, analytics: &PlanAnalytics) -> GoalView {
        GoalView {
            anchor: goal.anchor(),
            number: goal.index + 1,
            name: goal.name.clone(),
            description: goal.description.clone(),
            objectives: goal
                .objectives
                .iter()
                .map(|objective| Self::objective(objective, analytics))
                .collect(),
        }
    }

    fn objective(objective: &Objective, analytics: &PlanAnalytics) -> ObjectiveView {
        ObjectiveView {
            anchor: objective.key.anchor(),
            number: objective.index() + 1,
            name: objective.name.clone(),
            description: objective.description.clone(),
            indicators: objective
                .indicators
                .iter()
                .map(|indicator| Self::indicator(indicator, analytics.indicator(indicator.key)))
                .collect(),
        }
    }

    fn indicator(indicator: &Indicator, performance: Option<&IndicatorPerformance>) -> IndicatorView {
        let unit = indicator.unit.as_deref();
        let metrics: &[MeasurementMetrics] = performance.map(|p| p.data.as_slice()).unwrap_or(&[]);

        let measurements = indicator
            .measurements
            .iter()
            .zip(metrics)
            .map(|(measurement, m)| MeasurementView {
                heading: measurement.heading.clone(),
                target_display: format_value(&measurement.target_text, unit),
                actual_display: format_value(&measurement.actual_text, unit),
                performance: m.performance,
                performance_display: format_percent(m.performance),
                trend_arrow: if m.performance >= 100.0 {
                    TrendArrow::Up
                } else {
                    TrendArrow::Down
                },
                variance: m.variance,
                variance_display: format_variance(m.variance, unit),
                variance_sign: if m.variance >= 0.0 {
                    VarianceSign::Positive
                } else {
                    VarianceSign::Negative
                },
                status: m.status(),
                status_class: m.status().css_class().to_string(),
                progress: ProgressBar::for_measurement(m.target, m.performance),
            })
            .collect();

        let series: Vec<SeriesPoint> = metrics.iter().map(SeriesPoint::from).collect();
        let available_charts = match indicator.source {
            MeasurementSource::Direct => vec![ChartKind::Doughnut, ChartKind::Gauge],
            MeasurementSource::Series => vec![ChartKind::Line, ChartKind::Bar, ChartKind::Radar],
            MeasurementSource::None => Vec::new(),
        };

        IndicatorView {
            id: indicator.key,
            name: indicator.name.clone(),
            description: indicator.description.clone(),
            indicator_type: indicator.indicator_type.clone(),
            unit: indicator.unit.clone(),
            measurements,
            default_chart: (!series.is_empty()).then(|| ChartKind::default_for(series.len())),
            series,
            average_performance: performance.map(|p| p.performance),
            available_charts,
            skipped_measurements: indicator.skipped_measurements,
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
