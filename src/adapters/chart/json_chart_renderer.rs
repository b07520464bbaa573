//! JSON Chart Renderer - Chart descriptions as files.
//!
//! Writes one pretty-printed JSON document per target into a directory, for
//! a front end (or a person) to pick up.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::dashboard::ChartDescription;
use crate::ports::{ChartError, ChartRenderer};

#[derive(Debug, Clone)]
pub struct JsonChartRenderer {
    charts_dir: PathBuf,
}

impl JsonChartRenderer {
    pub fn new(charts_dir: impl Into<PathBuf>) -> Self {
        Self {
            charts_dir: charts_dir.into(),
        }
    }

    pub fn charts_dir(&self) -> &Path {
        &self.charts_dir
    }

    fn target_path(&self, target: &str) -> Result<PathBuf, ChartError> {
        let valid = !target.is_empty()
            && target
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ChartError::TargetUnavailable(target.to_string()));
        }
        Ok(self.charts_dir.join(format!("{}.json", target)))
    }
}

#[async_trait]
impl ChartRenderer for JsonChartRenderer {
    async fn render(&self, target: &str, chart: &ChartDescription) -> Result<(), ChartError> {
        let path = self.target_path(target)?;
        let json = serde_json::to_string_pretty(chart)
            .map_err(|e| ChartError::RenderFailed(e.to_string()))?;

        fs::create_dir_all(&self.charts_dir)
            .await
            .map_err(|e| ChartError::RenderFailed(e.to_string()))?;
        fs::write(&path, json)
            .await
            .map_err(|e| ChartError::RenderFailed(e.to_string()))?;

        debug!(chart = %target, path = %path.display(), "Wrote chart description");
        Ok(())
    }
}
