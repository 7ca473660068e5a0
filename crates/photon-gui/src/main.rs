mod app;
mod convert;
mod events;
mod panels;

use std::path::PathBuf;

use photon_core::consts::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use photon_core::security::validate_path;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // `photon [path]` -- a single optional image path, no flags.
    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    if let Some(ref path) = initial_path {
        // A syntactically invalid path argument is fatal before any
        // window exists; every later failure degrades to an empty viewer.
        if let Err(err) = validate_path(path) {
            tracing::error!("rejected path argument: {err}");
            std::process::exit(1);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_WIDTH as f32, DEFAULT_WINDOW_HEIGHT as f32])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Photon"),
        ..Default::default()
    };

    eframe::run_native(
        "Photon",
        options,
        Box::new(|cc| Ok(Box::new(app::PhotonApp::new(&cc.egui_ctx, initial_path)))),
    )
}
