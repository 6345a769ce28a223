// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "com";
pub const APP_ORG: &str = "roadworthy";
pub const APP_ID: &str = "roadworthy-vehicle-inspector";

pub const CATALOGUE_NAME: &str = "catalogue.json5";
pub const DRAFTS_DIR: &str = "drafts";
pub const SUBMITTED_DIR: &str = "submitted";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("ROADWORTHY_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_data_dir,
            debug_ui,
        }
    }

    /// <app_data>/drafts
    pub fn drafts_root(&self) -> PathBuf {
        self.app_data_dir.join(DRAFTS_DIR)
    }

    /// <app_data>/submitted
    pub fn submitted_root(&self) -> PathBuf {
        self.app_data_dir.join(SUBMITTED_DIR)
    }

    /// <app_data>/catalogue.json5
    pub fn catalogue_path(&self) -> PathBuf {
        self.app_data_dir.join(CATALOGUE_NAME)
    }
}
