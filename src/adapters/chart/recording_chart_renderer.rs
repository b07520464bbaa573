//! Recording Chart Renderer - Keeps rendered charts in memory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::dashboard::ChartDescription;
use crate::ports::{ChartError, ChartRenderer};

/// Records every render call in order. Useful for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingChartRenderer {
    rendered: Arc<Mutex<Vec<(String, ChartDescription)>>>,
    fail: bool,
}

impl RecordingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer whose every call fails, recording nothing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Targets in render order.
    pub fn targets(&self) -> Vec<String> {
        self.entries().into_iter().map(|(target, _)| target).collect()
    }

    /// The most recent chart rendered into `target`.
    pub fn rendered(&self, target: &str) -> Option<ChartDescription> {
        self.entries()
            .into_iter()
            .rev()
            .find(|(t, _)| t == target)
            .map(|(_, chart)| chart)
    }

    pub fn entries(&self) -> Vec<(String, ChartDescription)> {
        match self.rendered.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ChartRenderer for RecordingChartRenderer {
    async fn render(&self, target: &str, chart: &ChartDescription) -> Result<(), ChartError> {
        if self.fail {
            return Err(ChartError::RenderFailed("simulated failure".to_string()));
        }
        let mut guard = self
            .rendered
            .lock()
            .map_err(|e| ChartError::RenderFailed(e.to_string()))?;
        guard.push((target.to_string(), chart.clone()));
        Ok(())
    }
}
