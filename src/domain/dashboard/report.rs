//! Performance report - Summary metrics and top indicators as standalone HTML.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalyticsSummary, IndicatorPerformance};
use crate::domain::foundation::Timestamp;

/// How many indicators the report lists.
pub const TOP_INDICATOR_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub name: String,
    pub performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub title: String,
    pub generated_on: String,
    pub summary: AnalyticsSummary,
    pub top_indicators: Vec<ReportEntry>,
}

impl PerformanceReport {
    pub fn build(
        title: impl Into<String>,
        at: &Timestamp,
        summary: AnalyticsSummary,
        indicators: &[IndicatorPerformance],
    ) -> Self {
        Self {
            title: title.into(),
            generated_on: at.date_stamp(),
            summary,
            top_indicators: top_indicators(indicators, TOP_INDICATOR_COUNT)
                .into_iter()
                .map(|ip| ReportEntry {
                    name: ip.name.clone(),
                    performance: ip.performance,
                })
                .collect(),
        }
    }

    /// Standalone, printable HTML document.
    pub fn to_html(&self) -> String {
        let s = &self.summary;
        let metric = |value: String, label: &str, colour: Option<&str>| {
            let style = colour
                .map(|c| format!(" style=\"color: {c};\""))
                .unwrap_or_default();
            format!(
                "      <div class=\"metric\">\n        <div class=\"metric-value\"{style}>{value}</div>\n        <div class=\"metric-label\">{label}</div>\n      </div>\n"
            )
        };

        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n");
        html.push_str(&format!("  <title>{}</title>\n", html_escape(&self.title)));
        html.push_str(REPORT_STYLE);
        html.push_str("</head>\n<body>\n  <div class=\"header\">\n");
        html.push_str(&format!("    <h1>{}</h1>\n", html_escape(&self.title)));
        html.push_str(&format!("    <p>Generated on {}</p>\n  </div>\n", self.generated_on));

        html.push_str("  <div class=\"summary\">\n    <h2>Executive Summary</h2>\n");
        html.push_str(&metric(s.total_goals.to_string(), "Goals", None));
        html.push_str(&metric(s.total_objectives.to_string(), "Objectives", None));
        html.push_str(&metric(s.total_indicators.to_string(), "Indicators", None));
        html.push_str(&metric(format!("{:.1}%", s.avg_performance), "Avg Performance", None));
        html.push_str("  </div>\n");

        html.push_str("  <div class=\"performance-summary\">\n    <h2>Performance Overview</h2>\n");
        html.push_str(&metric(s.on_track_count.to_string(), "On Track", Some("#28a745")));
        html.push_str(&metric(s.at_risk_count.to_string(), "At Risk", Some("#dc3545")));
        html.push_str("  </div>\n");

        html.push_str("  <h2>Top Performing Indicators</h2>\n");
        for entry in &self.top_indicators {
            html.push_str(&format!(
                "  <div class=\"indicator-row\">\n    <h3>{}</h3>\n    <p>Performance: <strong>{:.1}%</strong></p>\n  </div>\n",
                html_escape(&entry.name),
                entry.performance
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

const REPORT_STYLE: &str = r#"  <style>
    body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
    .header { text-align: center; margin-bottom: 40px; }
    .summary { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0; }
    .metric { display: inline-block; margin: 10px 20px; text-align: center; }
    .metric-value { font-size: 2em; font-weight: bold; color: #667eea; }
    .metric-label { font-size: 0.9em; color: #6c757d; }
    .performance-summary { margin: 30px 0; }
    .indicator-row { margin: 15px 0; padding: 10px; border-left: 4px solid #667eea; }
    @media print { body { margin: 20px; } }
  </style>
"#;

/// Highest `limit` indicators by average performance, descending.
///
/// The sort is stable: ties keep their document order.
pub fn top_indicators(indicators: &[IndicatorPerformance], limit: usize) -> Vec<&IndicatorPerformance> {
    let mut ranked: Vec<&IndicatorPerformance> = indicators.iter().collect();
    ranked.sort_by(|a, b| b.performance.total_cmp(&a.performance));
    ranked.truncate(limit);
    ranked
}

/// `stratml-report-{YYYY-MM-DD}`, without extension.
pub fn report_base_name(at: &Timestamp) -> String {
    format!("stratml-report-{}", at.date_stamp())
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::IndicatorKey;
    use chrono::{TimeZone, Utc};

    fn perf(index: usize, performance: f64) -> IndicatorPerformance {
        IndicatorPerformance {
            id: IndicatorKey::new(0, 0, index),
            name: format!("KPI {index}"),
            performance,
            data: Vec::new(),
        }
    }

    fn at() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn top_five_is_stable_on_ties() {
        let all: Vec<_> = [100.0, 100.0, 90.0, 80.0, 70.0, 60.0]
            .iter()
            .enumerate()
            .map(|(i, p)| perf(i, *p))
            .collect();

        let top: Vec<usize> = top_indicators(&all, 5).iter().map(|ip| ip.id.indicator).collect();

        assert_eq!(top, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn ties_keep_document_order_when_not_first() {
        let all = vec![perf(0, 50.0), perf(1, 90.0), perf(2, 50.0), perf(3, 90.0)];
        let top: Vec<usize> = top_indicators(&all, 5).iter().map(|ip| ip.id.indicator).collect();
        assert_eq!(top, vec![1, 3, 0, 2]);
    }

    #[test]
    fn fewer_than_limit_returns_all() {
        let all = vec![perf(0, 10.0)];
        assert_eq!(top_indicators(&all, 5).len(), 1);
    }

    #[test]
    fn report_lists_summary_and_top_entries() {
        let summary = AnalyticsSummary {
            total_goals: 3,
            total_objectives: 5,
            total_indicators: 8,
            on_track_count: 6,
            at_risk_count: 2,
            avg_performance: 91.234,
        };
        let report = PerformanceReport::build(
            "StratML Performance Report",
            &at(),
            summary,
            &[perf(0, 80.0), perf(1, 120.0)],
        );

        assert_eq!(report.generated_on, "2024-06-01");
        assert_eq!(report.top_indicators[0].name, "KPI 1");

        let html = report.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"metric-value\">91.2%</div>"));
        assert!(html.contains("<h3>KPI 1</h3>"));
        assert!(html.contains("<strong>120.0%</strong>"));
        assert!(html.find("KPI 1").unwrap() < html.find("KPI 0").unwrap());
    }

    #[test]
    fn names_are_escaped() {
        let mut risky = perf(0, 50.0);
        risky.name = "<script>alert('x')</script>".to_string();
        let report = PerformanceReport::build("R & D", &at(), AnalyticsSummary::default(), &[risky]);

        let html = report.to_html();
        assert!(html.contains("<title>R &amp; D</title>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn report_file_name() {
        assert_eq!(report_base_name(&at()), "stratml-report-2024-06-01");
    }
}
