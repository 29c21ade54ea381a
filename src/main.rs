mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::CannesExplorerApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::parse();
    log::info!("Loading festival dataset from {}", config.dataset.display());

    // Loaded once; every view borrows from this session.
    let state = AppState::from_config(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cannes Film Festival – International Analysis",
        options,
        Box::new(move |_cc| Ok(Box::new(CannesExplorerApp::new(state)))),
    )
}
