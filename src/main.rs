mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod report;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::DiameterViewerApp;
use clap::Parser;
use eframe::egui;

use chart::figures::{histogram_figure, scatter_figure};
use config::AnalysisConfig;
use data::loader::load_measurements;
use report::AnalysisReport;
use state::ViewerState;

#[derive(Parser)]
#[command(
    name = "diameter-inspect",
    version,
    about = "Split diameter measurements at 0.6 mm, report statistics and chart them",
    long_about = None
)]
struct Cli {
    #[arg(help = "First measurement CSV (default: meting1.csv)")]
    first: Option<PathBuf>,
    #[arg(help = "Second measurement CSV (default: meting2.csv)")]
    second: Option<PathBuf>,
    #[arg(long, help = "Print the report only; do not open the chart windows")]
    no_window: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnalysisConfig::new().context("colour configuration")?;
    let paths = config::input_paths(cli.first, cli.second);

    let table = load_measurements(&paths).context("data load error")?;
    let report = AnalysisReport::build(&table, &config);
    println!("{report}");

    let scatter = scatter_figure(&report, &config);
    let histogram = histogram_figure(&report, &config);

    if cli.no_window {
        log::warn!("--no-window given, skipping chart display");
        return Ok(());
    }

    let state = ViewerState::new(&report, scatter, histogram);
    log::info!("Opening chart windows");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Diameter measurements",
        options,
        Box::new(|cc| {
            // Charts are styled for a white background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(DiameterViewerApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("cannot open chart window: {e}"))
}
