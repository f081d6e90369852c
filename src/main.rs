//! Volumetrik — disk usage dashboard.
//!
//! Thin binary entry point. All logic lives in the `volumetrik-core`
//! and `volumetrik-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use volumetrik_core::config::{build_service, Config};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Volumetrik starting");

    let config = Config::from_env();
    let service = build_service(&config)
        .map_err(|e| anyhow::anyhow!("cannot set up the dashboard backend: {e}"))?;

    // Load settings and layout *before* opening the window so the first
    // frame already shows the stored widget positions.
    let state = volumetrik_gui::VolumetrikState::build(service, config.start_path.clone());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Volumetrik -- Disk Usage Dashboard")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Volumetrik",
        options,
        Box::new(|cc| {
            Ok(Box::new(volumetrik_gui::VolumetrikApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
