//! Analysis Module - Analytics Engine for extracted plans.
//!
//! # Components
//!
//! - `MeasurementMetrics` - variance, variance percent and performance per measurement
//! - `PerformanceStatus` - four-band classification (Excellent, Good, At Risk, Critical)
//! - `analyze_trend` - direction of a performance series
//! - `AnalyticsEngine` - per-indicator averages and document-wide totals
//!
//! All functions are pure and stateless: they take the extracted model and
//! return computed results without touching ports or adapters.

mod engine;
mod performance;
mod trend;

pub use engine::{AnalyticsEngine, AnalyticsSummary, IndicatorPerformance, PlanAnalytics};
pub use performance::{
    MeasurementMetrics, PerformanceStatus, AT_RISK_THRESHOLD, EXCELLENT_THRESHOLD, GOOD_THRESHOLD,
};
pub use trend::{analyze_trend, TrendAnalysis, TrendDirection};
