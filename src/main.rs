//! Launchboard - Rocket Launch Records Dashboard
//!
//! Loads a CSV of launch records at startup and displays an interactive
//! dashboard: a launch-site selector, a payload range filter, a success
//! share chart and a payload/outcome scatter chart.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::DashboardApp;

/// Dataset read once at process start; missing or malformed content
/// aborts before the window opens.
const DATA_FILE: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = data::load_csv(DATA_FILE)
        .with_context(|| format!("loading launch dataset from {DATA_FILE}"))?;
    let (payload_min, payload_max) = table.payload_bounds();
    log::info!(
        "Loaded {} launch records across {} sites, payloads {:.0} to {:.0} kg",
        table.len(),
        table.sites().len(),
        payload_min,
        payload_max
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, table)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the dashboard UI: {e}"))
}
