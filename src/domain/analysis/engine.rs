//! Analytics Engine - Document-wide totals and per-indicator performance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::IndicatorKey;
use crate::domain::plan::{Extraction, Indicator};

use super::{MeasurementMetrics, PerformanceStatus};

/// Document-wide totals.
///
/// Goal, objective and indicator counts come from extraction; on-track and
/// at-risk counts are tallied once per retained measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_goals: usize,
    pub total_objectives: usize,
    pub total_indicators: usize,
    pub on_track_count: usize,
    pub at_risk_count: usize,
    pub avg_performance: f64,
}

/// Averaged performance plus the full series for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPerformance {
    pub id: IndicatorKey,
    pub name: String,
    /// Mean of the series' performance values.
    pub performance: f64,
    pub data: Vec<MeasurementMetrics>,
}

impl IndicatorPerformance {
    pub fn status(&self) -> PerformanceStatus {
        PerformanceStatus::classify(self.performance)
    }
}

/// Everything the analytics pass produces for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanAnalytics {
    pub summary: AnalyticsSummary,
    /// Indicators with at least one measurement, in document order.
    pub indicators: Vec<IndicatorPerformance>,
}

impl PlanAnalytics {
    pub fn indicator(&self, key: IndicatorKey) -> Option<&IndicatorPerformance> {
        self.indicators.iter().find(|ip| ip.id == key)
    }
}

/// Stateless analytics over an extracted plan.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn analyze(extraction: &Extraction) -> PlanAnalytics {
        let mut summary = AnalyticsSummary {
            total_goals: extraction.tally.total_goals,
            total_objectives: extraction.tally.total_objectives,
            total_indicators: extraction.tally.total_indicators,
            ..AnalyticsSummary::default()
        };

        let mut indicators = Vec::new();
        for indicator in extraction.plan.indicators() {
            let Some(performance) = Self::indicator_performance(indicator) else {
                continue;
            };
            for metrics in &performance.data {
                if metrics.status().is_on_track() {
                    summary.on_track_count += 1;
                } else {
                    summary.at_risk_count += 1;
                }
            }
            indicators.push(performance);
        }

        summary.avg_performance = mean(indicators.iter().map(|ip| ip.performance)).unwrap_or(0.0);

        debug!(
            indicators_with_data = indicators.len(),
            on_track = summary.on_track_count,
            at_risk = summary.at_risk_count,
            avg_performance = summary.avg_performance,
            "Computed analytics"
        );

        PlanAnalytics {
            summary,
            indicators,
        }
    }

    /// Series and average for one indicator; `None` when it has no measurements.
    pub fn indicator_performance(indicator: &Indicator) -> Option<IndicatorPerformance> {
        let data: Vec<MeasurementMetrics> = indicator
            .measurements
            .iter()
            .map(MeasurementMetrics::compute)
            .collect();
        let performance = mean(data.iter().map(|m| m.performance))?;
        Some(IndicatorPerformance {
            id: indicator.key,
            name: indicator.display_name(),
            performance,
            data,
        })
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
