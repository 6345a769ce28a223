// src/lib.rs

pub mod checklist;
pub mod command;
pub mod command_state;
pub mod context;
pub mod draft_store;
pub mod error;
pub mod types;

use crate::command::inspection_form::SubmissionStatus;
use crate::error::AppResult;
use crate::types::{load_value_catalogue, AppState};
use std::path::Path;
use std::sync::Mutex;

pub fn init_state(app_data_dir: &Path) -> AppResult<AppState> {
    std::fs::create_dir_all(app_data_dir)?;

    let catalogue = load_value_catalogue(&app_data_dir.join(context::CATALOGUE_NAME))?;

    Ok(AppState {
        submission: Mutex::new(SubmissionStatus::Idle),
        catalogue,
    })
}

impl AppState {
    pub fn new_for_tests(app_data_dir: &Path) -> AppResult<Self> {
        crate::init_state(app_data_dir)
    }
}
