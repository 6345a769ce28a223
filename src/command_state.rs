// src/command_state.rs

use std::sync::MutexGuard;

use crate::command::inspection_form::SubmissionStatus;
use crate::error::{AppError, AppResult};
use crate::types::AppState;

pub fn lock_submission(state: &AppState) -> AppResult<MutexGuard<'_, SubmissionStatus>> {
    state
        .submission
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn submission_status(state: &AppState) -> SubmissionStatus {
    lock_submission(state)
        .map(|g| *g)
        .unwrap_or(SubmissionStatus::Idle)
}

pub fn set_submission_status(state: &AppState, status: SubmissionStatus) {
    if let Ok(mut g) = lock_submission(state) {
        *g = status;
    }
}
