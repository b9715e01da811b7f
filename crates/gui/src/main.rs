//! Cropatlas desktop viewer
//!
//! Three-panel map viewer for crop-suitability climate scenarios:
//! baseline, projection and difference rasters over an OpenStreetMap
//! basemap.

mod app;
mod controller;
mod dock;
mod io;
mod loader;
mod menu;
mod panels;
mod state;

use clap::Parser;

use app::AtlasApp;

/// Published dataset root used when no --data-url is given.
const DEFAULT_DATA_URL: &str = "https://data.cropatlas.org/v2";

#[derive(Parser)]
#[command(name = "cropatlas-gui")]
#[command(author, version, about = "Crop suitability scenario viewer", long_about = None)]
struct Args {
    /// Root URL of the raster archive.
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    data_url: String,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cropatlas — Crop Suitability Scenarios")
            .with_inner_size([1480.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    let data_url = args.data_url;
    eframe::run_native(
        "Cropatlas",
        native_options,
        Box::new(move |cc| Ok(Box::new(AtlasApp::new(cc, data_url)))),
    )
}
