//! Performance Metrics - Per-measurement variance, ratio and status.

use serde::{Deserialize, Serialize};

use crate::domain::plan::Measurement;

/// Threshold at or above which a measurement is "Excellent".
pub const EXCELLENT_THRESHOLD: f64 = 100.0;
/// Threshold at or above which a measurement is "Good".
pub const GOOD_THRESHOLD: f64 = 80.0;
/// Threshold at or above which a measurement is "At Risk" rather than "Critical".
pub const AT_RISK_THRESHOLD: f64 = 60.0;

/// Derived metrics for one retained measurement.
///
/// Field order is the CSV column order; the label serializes as `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementMetrics {
    #[serde(rename = "date")]
    pub label: String,
    pub target: f64,
    pub actual: f64,
    pub variance: f64,
    pub variance_percent: f64,
    pub performance: f64,
}

impl MeasurementMetrics {
    /// Computes metrics for a measurement. A zero target yields zero
    /// performance and zero variance percent.
    pub fn compute(measurement: &Measurement) -> Self {
        Self::from_values(measurement.label.clone(), measurement.target, measurement.actual)
    }

    pub fn from_values(label: impl Into<String>, target: f64, actual: f64) -> Self {
        let variance = actual - target;
        let (variance_percent, performance) = if target != 0.0 {
            (variance / target * 100.0, actual / target * 100.0)
        } else {
            (0.0, 0.0)
        };
        Self {
            label: label.into(),
            target,
            actual,
            variance,
            variance_percent,
            performance,
        }
    }

    pub fn status(&self) -> PerformanceStatus {
        PerformanceStatus::classify(self.performance)
    }
}

/// Four-band classification of a performance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    Excellent,
    Good,
    AtRisk,
    Critical,
}

impl PerformanceStatus {
    pub fn classify(performance: f64) -> Self {
        if performance >= EXCELLENT_THRESHOLD {
            PerformanceStatus::Excellent
        } else if performance >= GOOD_THRESHOLD {
            PerformanceStatus::Good
        } else if performance >= AT_RISK_THRESHOLD {
            PerformanceStatus::AtRisk
        } else {
            PerformanceStatus::Critical
        }
    }

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::Excellent => "Excellent",
            PerformanceStatus::Good => "Good",
            PerformanceStatus::AtRisk => "At Risk",
            PerformanceStatus::Critical => "Critical",
        }
    }

    /// Excellent and Good count as on track; everything else as at risk.
    pub fn is_on_track(&self) -> bool {
        matches!(self, PerformanceStatus::Excellent | PerformanceStatus::Good)
    }

    /// Hex colour used for this band in charts.
    pub fn colour(&self) -> &'static str {
        match self {
            PerformanceStatus::Excellent => "#28a745",
            PerformanceStatus::Good => "#20c997",
            PerformanceStatus::AtRisk => "#ffc107",
            PerformanceStatus::Critical => "#dc3545",
        }
    }

    /// CSS class used by the presentation layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            PerformanceStatus::Excellent => "status-excellent",
            PerformanceStatus::Good => "status-good",
            PerformanceStatus::AtRisk => "status-warning",
            PerformanceStatus::Critical => "status-danger",
        }
    }
}

impl std::fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn computes_variance_and_performance() {
        let m = MeasurementMetrics::from_values("Q1", 80.0, 100.0);
        assert_eq!(m.variance, 20.0);
        assert_eq!(m.variance_percent, 25.0);
        assert_eq!(m.performance, 125.0);
    }

    #[test]
    fn negative_variance_when_below_target() {
        let m = MeasurementMetrics::from_values("Q1", 100.0, 64.0);
        assert_eq!(m.variance, -36.0);
        assert_eq!(m.variance_percent, -36.0);
        assert_eq!(m.performance, 64.0);
    }

    #[test]
    fn zero_target_yields_zero_ratios() {
        let m = MeasurementMetrics::from_values("Q1", 0.0, 15.0);
        assert_eq!(m.variance, 15.0);
        assert_eq!(m.variance_percent, 0.0);
        assert_eq!(m.performance, 0.0);
    }

    #[test]
    fn classification_boundaries() {
        let cases = [
            (59.9, PerformanceStatus::Critical),
            (60.0, PerformanceStatus::AtRisk),
            (79.9, PerformanceStatus::AtRisk),
            (80.0, PerformanceStatus::Good),
            (99.9, PerformanceStatus::Good),
            (100.0, PerformanceStatus::Excellent),
        ];
        for (performance, expected) in cases {
            assert_eq!(PerformanceStatus::classify(performance), expected, "{performance}");
        }
    }

    #[test]
    fn labels_match_display_text() {
        assert_eq!(PerformanceStatus::AtRisk.label(), "At Risk");
        assert_eq!(PerformanceStatus::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn on_track_buckets() {
        assert!(PerformanceStatus::Excellent.is_on_track());
        assert!(PerformanceStatus::Good.is_on_track());
        assert!(!PerformanceStatus::AtRisk.is_on_track());
        assert!(!PerformanceStatus::Critical.is_on_track());
    }

    #[test]
    fn serializes_label_as_date_in_column_order() {
        let m = MeasurementMetrics::from_values("2024-Q1", 10.0, 12.0);
        let json = serde_json::to_value(&m).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["date", "target", "actual", "variance", "variancePercent", "performance"]
        );
    }

    proptest! {
        #[test]
        fn zero_target_never_faults(actual in -1.0e9f64..1.0e9) {
            let m = MeasurementMetrics::from_values("x", 0.0, actual);
            prop_assert_eq!(m.performance, 0.0);
            prop_assert_eq!(m.variance_percent, 0.0);
        }

        #[test]
        fn classification_is_monotonic(a in -500.0f64..500.0, b in -500.0f64..500.0) {
            let rank = |s: PerformanceStatus| match s {
                PerformanceStatus::Critical => 0,
                PerformanceStatus::AtRisk => 1,
                PerformanceStatus::Good => 2,
                PerformanceStatus::Excellent => 3,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(PerformanceStatus::classify(lo)) <= rank(PerformanceStatus::classify(hi)));
        }
    }
}
