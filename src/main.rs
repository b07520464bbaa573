//! stratml-insight: view and analyse StratML plans and performance reports
//!
//! Loads one or more documents, processes the first (or the selected) one and
//! runs the requested exports and queries against it. Logs go to stderr;
//! results go to stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use stratml_insight::adapters::{JsonChartRenderer, LocalExportSink, LocalFileSource, XmlMarkupParser};
use stratml_insight::application::{
    Notification, NotificationLevel, PlanViewerService, ProcessedDocument, ViewerOptions, ViewerPorts,
};
use stratml_insight::config::AppConfig;
use stratml_insight::domain::dashboard::{ChartKind, PlanView};
use stratml_insight::domain::foundation::IndicatorKey;
use stratml_insight::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "stratml-insight")]
#[command(about = "View and analyse StratML strategic plans and performance reports")]
struct Cli {
    /// StratML files to load, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Process this document (1-based, in load order) instead of the first
    #[arg(long)]
    select: Option<usize>,

    /// Directory for exports (overrides config)
    #[arg(short, long, env = "STRATML_INSIGHT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Directory for chart descriptions (overrides config)
    #[arg(long)]
    charts_dir: Option<PathBuf>,

    /// Write the analytics snapshot as JSON
    #[arg(long)]
    export_json: bool,

    /// Write the HTML performance report
    #[arg(long)]
    report: bool,

    /// Export one indicator's series as CSV (e.g. `indicator-0-0-0` or `0-0-0`)
    #[arg(long, value_name = "INDICATOR")]
    csv: Vec<IndicatorKey>,

    /// Print the trend of an indicator
    #[arg(long, value_name = "INDICATOR")]
    trend: Vec<IndicatorKey>,

    /// Describe (and render) an indicator's chart
    #[arg(long, value_name = "INDICATOR")]
    chart: Option<IndicatorKey>,

    /// Chart kind for --chart: line, bar, radar, doughnut or gauge
    #[arg(long, requires = "chart")]
    kind: Option<ChartKind>,

    /// Print the sections matching this text
    #[arg(long)]
    search: Option<String>,

    /// Compare the loaded documents
    #[arg(long)]
    compare: bool,

    /// Print the full view model as JSON
    #[arg(long)]
    print_view: bool,

    /// Do not render chart descriptions
    #[arg(long)]
    no_charts: bool,

    /// Log as JSON (overrides config)
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("loading configuration")?;
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.clone();
    }
    if let Some(dir) = &cli.charts_dir {
        config.export.charts_dir = dir.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    if cli.no_charts {
        config.viewer.show_charts = false;
    }
    if cli.select.is_some() {
        config.viewer.auto_process_first = false;
    }
    config.validate().context("validating configuration")?;

    init_tracing(&config.logging)?;

    let ports = ViewerPorts {
        source: Arc::new(LocalFileSource::new(config.viewer.max_file_bytes)),
        parser: Arc::new(XmlMarkupParser::new()),
        sink: Arc::new(LocalExportSink::new(&config.export.output_dir)),
        renderer: Arc::new(JsonChartRenderer::new(&config.export.charts_dir)),
    };
    let service = PlanViewerService::new(ports, ViewerOptions::from(&config.viewer));

    let outcome = run(&service, &cli).await;
    service.wait_for_charts().await;
    info!(documents = service.documents().await.len(), "Done");
    outcome
}

async fn run(service: &PlanViewerService, cli: &Cli) -> anyhow::Result<()> {
    let locations: Vec<String> = cli
        .files
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let loaded = service.load_files(locations).await;
    loaded.notifications.iter().for_each(notify);

    if let Some(position) = cli.select {
        let documents = service.documents().await;
        let document = position
            .checked_sub(1)
            .and_then(|index| documents.get(index))
            .with_context(|| format!("no loaded document at position {position}"))?;
        service.select_document(document.id).await?;
    }

    let active = match service.active_document().await {
        Ok(active) => Some(active),
        Err(e) => {
            error!(error = %e, "No document processed");
            eprintln!("error: {e}");
            None
        }
    };
    if let Some(active) = &active {
        print_overview(active);
        if cli.print_view {
            println!("{}", serde_json::to_string_pretty(&active.view)?);
        }
    }

    for key in &cli.trend {
        match service.indicator_trend(*key).await {
            Ok(trend) => {
                let notification = Notification::from(&trend);
                println!("{key}: {}", notification.message);
            }
            Err(e) => notify(&Notification::from(&e)),
        }
    }

    if let Some(key) = cli.chart {
        let chart = service.indicator_chart(key, cli.kind).await?;
        println!("{}", serde_json::to_string_pretty(&chart)?);
    }

    if let Some(text) = &cli.search {
        let hits = service.search(text).await?;
        println!("{} section(s) match '{}'", hits.len(), text);
        for hit in hits {
            println!("  #{}", hit.anchor);
        }
    }

    for key in &cli.csv {
        let exported = service.export_indicator_csv(*key).await?;
        println!("Wrote {}", exported.saved.location.display());
    }

    if cli.export_json {
        let exported = service.export_snapshot().await?;
        println!("Wrote {}", exported.saved.location.display());
    }

    if cli.report {
        let generated = service.generate_report().await?;
        println!("Wrote {}", generated.saved.location.display());
    }

    if cli.compare {
        let comparison = service.compare_documents().await?;
        println!("{}", comparison.message);
        for entry in &comparison.documents {
            let status = if entry.processed { "processed" } else { "not processed" };
            println!("  {} ({status})", entry.name);
        }
    }

    Ok(())
}

fn notify(notification: &Notification) {
    match notification.level {
        NotificationLevel::Error => eprintln!("error: {}", notification.message),
        NotificationLevel::Success | NotificationLevel::Info => println!("{}", notification.message),
    }
}

fn print_overview(document: &ProcessedDocument) {
    let view: &PlanView = &document.view;
    let summary = &view.summary;

    println!();
    println!("{}", view.info.name);
    if let Some(period) = view.info.period() {
        println!("  Period: {period}");
    }
    println!(
        "  Goals: {}  Objectives: {}  Indicators: {}",
        summary.total_goals, summary.total_objectives, summary.total_indicators
    );
    println!(
        "  On track: {}  At risk: {}  Average performance: {:.1}%",
        summary.on_track_count, summary.at_risk_count, summary.avg_performance
    );
    for stakeholder in &view.stakeholders {
        match &stakeholder.role {
            Some(role) => println!("  {} {} ({role})", stakeholder.icon, stakeholder.name),
            None => println!("  {} {}", stakeholder.icon, stakeholder.name),
        }
    }

    for goal in &view.goals {
        println!("  Goal {}: {}", goal.number, goal.name);
        for objective in &goal.objectives {
            println!("    Objective {}: {}", objective.number, objective.name);
            for indicator in &objective.indicators {
                let average = indicator
                    .average_performance
                    .map(|p| format!("{p:.1}%"))
                    .unwrap_or_else(|| "no data".to_string());
                println!("      [{}] {} - {}", indicator.id, indicator.name, average);
            }
        }
    }
}
