// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),
    StateLockPoisoned,
    InvalidPath,

    // --------------------------------------------------
    // draft fs (IO / durability)
    // --------------------------------------------------
    DraftFsReadFailed(String),
    DraftFsInvalidJson(String),
    DraftFsUnsupportedVersion { got: u32, expected: u32 },
    DraftFsMarkerMismatch,
    DraftFsTooLarge { bytes: u64, max: u64 },
    DraftFsWriteFailed(String),
    DraftFsSyncFailed(String),
    DraftFsRenameFailed(String),
    DraftFsRemoveFailed(String),
    DraftMissing,

    // --------------------------------------------------
    // configuration
    // --------------------------------------------------
    CatalogueParse(String),

    // --------------------------------------------------
    // record integrity
    // --------------------------------------------------
    UnknownChecklistItem(String),
    InvalidRating(u8),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            Io(_) => "File operation failed.",
            Msg(_) => "Operation failed.",
            StateLockPoisoned => "Internal state lock failed.",
            InvalidPath => "Invalid path.",

            DraftFsReadFailed(_) => "Failed to read draft.",
            DraftFsInvalidJson(_) => "Draft file is corrupted.",
            DraftFsUnsupportedVersion { .. } => "Unsupported draft version.",
            DraftFsMarkerMismatch => "Not a Roadworthy draft file.",
            DraftFsTooLarge { .. } => "Draft file is too large.",
            DraftFsWriteFailed(_) => "Failed to write draft.",
            DraftFsSyncFailed(_) => "Failed to sync draft.",
            DraftFsRenameFailed(_) => "Failed to replace draft.",
            DraftFsRemoveFailed(_) => "Failed to delete draft.",
            DraftMissing => "Draft not found.",

            CatalogueParse(_) => "Value catalogue is invalid.",

            UnknownChecklistItem(_) => "Unknown checklist item.",
            InvalidRating(_) => "Rating must be between 1 and 5.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),
            StateLockPoisoned => write!(f, "state lock poisoned"),
            InvalidPath => write!(f, "invalid path"),

            DraftFsReadFailed(s) => write!(f, "draft read failed: {s}"),
            DraftFsInvalidJson(s) => write!(f, "draft invalid json: {s}"),
            DraftFsUnsupportedVersion { got, expected } => {
                write!(f, "unsupported draft version: got={got} expected={expected}")
            }
            DraftFsMarkerMismatch => write!(f, "draft marker mismatch"),
            DraftFsTooLarge { bytes, max } => write!(f, "draft too large: {bytes} > {max}"),
            DraftFsWriteFailed(s) => write!(f, "draft write failed: {s}"),
            DraftFsSyncFailed(s) => write!(f, "draft sync failed: {s}"),
            DraftFsRenameFailed(s) => write!(f, "draft rename failed: {s}"),
            DraftFsRemoveFailed(s) => write!(f, "draft remove failed: {s}"),
            DraftMissing => write!(f, "draft missing"),

            CatalogueParse(s) => write!(f, "value catalogue parse failed: {s}"),

            UnknownChecklistItem(id) => write!(f, "unknown checklist item: {id}"),
            InvalidRating(r) => write!(f, "invalid rating: {r}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
