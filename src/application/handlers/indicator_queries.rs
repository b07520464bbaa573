//! Indicator queries - Trend analysis and on-demand charts for one indicator.

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::analysis::{analyze_trend, TrendAnalysis};
use crate::domain::dashboard::{describe, ChartDescription, ChartKind};
use crate::domain::foundation::IndicatorKey;

use super::render_charts::{indicator_chart_target, ChartDispatcher};

#[derive(Debug, Clone, Copy)]
pub struct GetIndicatorTrendQuery {
    pub indicator: IndicatorKey,
}

/// Trend of the indicator's performance values in series order.
///
/// Fewer than two points is an informational result, not an error.
pub struct GetIndicatorTrendHandler {
    registry: DocumentRegistry,
}

impl GetIndicatorTrendHandler {
    pub fn new(registry: DocumentRegistry) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetIndicatorTrendQuery) -> Result<TrendAnalysis, ViewerError> {
        let active = self.registry.require_active().await?;
        let indicator = active
            .view
            .indicator(query.indicator)
            .ok_or(ViewerError::IndicatorNotFound(query.indicator))?;

        let performances: Vec<f64> = indicator.series.iter().map(|p| p.performance).collect();
        Ok(analyze_trend(&performances))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetIndicatorChartQuery {
    pub indicator: IndicatorKey,
    /// Defaults to the indicator's default chart kind.
    pub kind: Option<ChartKind>,
}

/// Describes an indicator's chart and, when charts are enabled, dispatches
/// its rendering.
pub struct GetIndicatorChartHandler {
    registry: DocumentRegistry,
    charts: Option<ChartDispatcher>,
}

impl GetIndicatorChartHandler {
    pub fn new(registry: DocumentRegistry, charts: Option<ChartDispatcher>) -> Self {
        Self { registry, charts }
    }

    pub async fn handle(
        &self,
        query: GetIndicatorChartQuery,
    ) -> Result<ChartDescription, ViewerError> {
        let active = self.registry.require_active().await?;
        let indicator = active
            .view
            .indicator(query.indicator)
            .ok_or(ViewerError::IndicatorNotFound(query.indicator))?;

        let chart = query
            .kind
            .or(indicator.default_chart)
            .and_then(|kind| describe(kind, &indicator.series))
            .ok_or(ViewerError::NoDataForIndicator(query.indicator))?;

        if let Some(charts) = &self.charts {
            let target = indicator_chart_target(&query.indicator.anchor());
            charts.dispatch(active.file_name.clone(), vec![(target, chart.clone())]);
        }

        Ok(chart)
    }
}
