mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use cuboid_fit_lib::build;
pub use cuboid_fit_lib::state;

use std::path::Path;

use app::FitApp;
use state::AppSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cuboid_fit=info,cuboid_fit_lib=info".into()),
        )
        .init();

    // Parse --settings <path> argument
    let settings = parse_settings_arg().unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cuboid Fit Visualizer")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "cuboid-fit",
        native_options,
        Box::new(move |cc| Ok(Box::new(FitApp::new(cc, settings)))),
    ) {
        tracing::error!("Failed to start application: {e}");
        std::process::exit(1);
    }
}

fn parse_settings_arg() -> Option<AppSettings> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--settings" && i + 1 < args.len() {
            let path = &args[i + 1];
            match AppSettings::load_from_path(Path::new(path)) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {path}");
                    return Some(settings);
                }
                Err(e) => {
                    tracing::error!("{e}; using defaults");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
