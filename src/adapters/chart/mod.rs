//! Chart adapters - Implementations of the ChartRenderer port.
//!
//! - **JsonChartRenderer** - Writes each chart description to `{target}.json`
//! - **RecordingChartRenderer** - Keeps rendered charts in memory (testing/headless)

mod json_chart_renderer;
mod recording_chart_renderer;

pub use json_chart_renderer::JsonChartRenderer;
pub use recording_chart_renderer::RecordingChartRenderer;
