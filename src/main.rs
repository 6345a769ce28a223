// src/main.rs

// Prevents an extra console window on Windows in release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;

use roadworthy_vehicle_inspector_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};

fn main() -> eframe::Result<()> {
    let app_data_dir = resolve_data_dir();

    let state = match roadworthy_vehicle_inspector_lib::init_state(&app_data_dir) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("failed to initialise app state: {e}");
            std::process::exit(1);
        }
    };
    let ctx = Arc::new(AppCtx::new(app_data_dir));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Roadworthy Vehicle Inspector",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state, ctx)))),
    )
}

/// Explicit override, then a debug sandbox, then the platform app-data dir.
fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROADWORTHY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if cfg!(debug_assertions) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/roadworthy-dev");
        }
    }

    match ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID) {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}
