//! Fire-and-forget chart rendering shared by the processing and chart handlers.
//!
//! Render jobs run on spawned tasks, so a slow or failing renderer never holds
//! up the command that asked for the charts. Callers that must observe the
//! output before exiting (the CLI, tests) call [`ChartDispatcher::wait`].

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::application::ProcessedDocument;
use crate::domain::dashboard::{describe, status_chart, ChartDescription};
use crate::ports::ChartRenderer;

/// Target name of the document-level status chart.
pub const STATUS_CHART_TARGET: &str = "analyticsChart";

/// Target name of an indicator's chart canvas.
pub fn indicator_chart_target(anchor: &str) -> String {
    format!("canvas-{}", anchor)
}

/// One chart per indicator with data, in its default kind, plus the status chart.
pub fn document_charts(processed: &ProcessedDocument) -> Vec<(String, ChartDescription)> {
    let mut jobs: Vec<(String, ChartDescription)> = processed
        .view
        .indicators()
        .filter_map(|indicator| {
            let chart = describe(indicator.default_chart?, &indicator.series)?;
            Some((indicator_chart_target(&indicator.id.anchor()), chart))
        })
        .collect();
    jobs.push((
        STATUS_CHART_TARGET.to_string(),
        status_chart(&processed.analytics.summary),
    ));
    jobs
}

/// Renders every job in order; failures are logged and dropped.
pub async fn render_all(renderer: &dyn ChartRenderer, jobs: &[(String, ChartDescription)]) -> usize {
    let mut rendered = 0;
    for (target, chart) in jobs {
        match renderer.render(target, chart).await {
            Ok(()) => rendered += 1,
            Err(e) => warn!(chart = %target, error = %e, "Chart rendering failed"),
        }
    }
    rendered
}

/// Spawns render jobs against one renderer and keeps their handles.
#[derive(Clone)]
pub struct ChartDispatcher {
    renderer: Arc<dyn ChartRenderer>,
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl ChartDispatcher {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Starts rendering `jobs` in the background and returns immediately.
    ///
    /// Jobs of one dispatch are rendered in order.
    pub fn dispatch(&self, source: impl Into<String>, jobs: Vec<(String, ChartDescription)>) {
        let source = source.into();
        let renderer = Arc::clone(&self.renderer);
        let handle = tokio::spawn(async move {
            let rendered = render_all(renderer.as_ref(), &jobs).await;
            info!(source = %source, rendered, requested = jobs.len(), "Rendered charts");
        });

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Waits for every job dispatched so far.
    pub async fn wait(&self) {
        let handles: Vec<JoinHandle<()>> = match self.pending.lock() {
            Ok(mut guard) => guard.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        };
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Chart rendering task did not complete");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chart::RecordingChartRenderer;
    use crate::domain::analysis::AnalyticsSummary;
    use crate::ports::ChartError;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Holds every render until released.
    struct GatedRenderer {
        gate: Arc<Notify>,
        inner: RecordingChartRenderer,
    }

    #[async_trait]
    impl ChartRenderer for GatedRenderer {
        async fn render(&self, target: &str, chart: &ChartDescription) -> Result<(), ChartError> {
            self.gate.notified().await;
            self.inner.render(target, chart).await
        }
    }

    fn jobs() -> Vec<(String, ChartDescription)> {
        let chart = status_chart(&AnalyticsSummary::default());
        vec![("a".to_string(), chart.clone()), ("b".to_string(), chart)]
    }

    #[tokio::test]
    async fn dispatch_returns_before_rendering_finishes() {
        let gate = Arc::new(Notify::new());
        let recorder = RecordingChartRenderer::new();
        let dispatcher = ChartDispatcher::new(Arc::new(GatedRenderer {
            gate: Arc::clone(&gate),
            inner: recorder.clone(),
        }));

        dispatcher.dispatch("plan.xml", jobs());
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(recorder.entries().is_empty());

        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(10)).await;
        gate.notify_one();
        dispatcher.wait().await;

        assert_eq!(recorder.targets(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn failed_renders_are_logged_not_raised() {
        let dispatcher = ChartDispatcher::new(Arc::new(RecordingChartRenderer::failing()));

        dispatcher.dispatch("plan.xml", jobs());
        dispatcher.wait().await;

        assert_eq!(
            render_all(&RecordingChartRenderer::failing(), &jobs()).await,
            0
        );
    }
}
