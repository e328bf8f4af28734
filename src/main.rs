#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based NetPredict client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use netpredict::config::{self, AppConfig};
use netpredict::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use netpredict::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        AppConfig::default()
    });
    tracing::info!(base_url = %config.api_base_url, "Starting NetPredict");

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([760.0, 900.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "NetPredict",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(config)))),
    )?;
    Ok(())
}
