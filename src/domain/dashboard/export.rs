//! Export payloads - Indicator CSV and the analytics JSON snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::analysis::{AnalyticsSummary, IndicatorPerformance};
use crate::domain::foundation::{IndicatorKey, Timestamp};

/// Version tag written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "2.0";

/// Renders records as CSV.
///
/// The header row is the first record's field names in declaration order;
/// each row joins its values with commas. Values are not quoted, so a value
/// containing a comma shifts the columns of its row. Returns `None` for an
/// empty slice.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<Option<String>, serde_json::Error> {
    let rows = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(Value::Object(first)) = rows.first() else {
        return Ok(None);
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut out = headers.join(",");
    for row in &rows {
        out.push('\n');
        let cells: Vec<String> = headers
            .iter()
            .map(|key| row.get(*key).map(csv_cell).unwrap_or_default())
            .collect();
        out.push_str(&cells.join(","));
    }
    Ok(Some(out))
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f}"),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// `indicator-{g}-{o}-{i}-data`, without extension.
pub fn indicator_csv_base_name(key: IndicatorKey) -> String {
    format!("indicator-{}-data", key.suffix())
}

/// `stratml-export-{YYYY-MM-DD}`, without extension.
pub fn snapshot_base_name(at: &Timestamp) -> String {
    format!("stratml-export-{}", at.date_stamp())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub export_date: String,
    pub document_count: usize,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub name: String,
    pub processed: bool,
}

/// Everything the JSON export carries. No raw markup is included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub metadata: SnapshotMetadata,
    pub analytics: AnalyticsSummary,
    pub performance: Vec<IndicatorPerformance>,
    pub documents: Vec<DocumentStatus>,
}

impl ExportSnapshot {
    pub fn new(
        at: &Timestamp,
        analytics: AnalyticsSummary,
        performance: Vec<IndicatorPerformance>,
        documents: Vec<DocumentStatus>,
    ) -> Self {
        Self {
            metadata: SnapshotMetadata {
                export_date: at.to_rfc3339(),
                document_count: documents.len(),
                version: SNAPSHOT_VERSION.to_string(),
            },
            analytics,
            performance,
            documents,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
