// src/draft_store.rs
//
// On-disk persistence for drafts and the submitted outbox. Files are plain
// JSON with a format marker and version so unrelated files in the data dir
// are rejected early.

use crate::checklist::catalog::InspectionModule;
use crate::command::inspection_form::InspectionRecord;
use crate::context::{AppCtx, APP_ID};
use crate::error::{AppError, AppResult};

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DRAFT_FORMAT: &str = "roadworthy.inspection";
pub const DRAFT_VERSION: u32 = 1;

// Photos are embedded base64, so drafts can get big.
const DRAFT_MAX_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftFile {
    pub format: String,
    pub version: u32,
    pub app: String,
    pub saved_utc: String,
    pub module: InspectionModule,
    pub record: InspectionRecord,
}

impl DraftFile {
    fn new(module: InspectionModule, record: InspectionRecord) -> Self {
        Self {
            format: DRAFT_FORMAT.to_string(),
            version: DRAFT_VERSION,
            app: APP_ID.to_string(),
            saved_utc: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            module,
            record,
        }
    }
}

/// Save (or overwrite) the draft for this record. The file name is derived
/// from the truck number so re-saving the same inspection replaces its draft.
pub fn save_draft(
    ctx: &AppCtx,
    module: InspectionModule,
    record: &InspectionRecord,
) -> AppResult<PathBuf> {
    let dir = ctx.drafts_root();
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("draft.{}.json", file_slug(&record.truck_no)));
    let data = DraftFile::new(module, record.clone());
    write_json_atomic(&path, &data)?;
    Ok(path)
}

/// Write a submitted record into the outbox. One file per submission.
pub fn save_submission(
    ctx: &AppCtx,
    module: InspectionModule,
    record: &InspectionRecord,
) -> AppResult<PathBuf> {
    let dir = ctx.submitted_root();
    fs::create_dir_all(&dir)?;

    let data = DraftFile::new(module, record.clone());
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let path = dir.join(format!(
        "inspection.{}.{}.json",
        file_slug(&record.truck_no),
        stamp
    ));
    write_json_atomic(&path, &data)?;
    Ok(path)
}

pub fn load_draft(path: &Path) -> AppResult<DraftFile> {
    let meta = fs::metadata(path).map_err(|e| AppError::DraftFsReadFailed(e.to_string()))?;

    let bytes = meta.len();
    if bytes > DRAFT_MAX_BYTES {
        return Err(AppError::DraftFsTooLarge {
            bytes,
            max: DRAFT_MAX_BYTES,
        });
    }

    let text = fs::read_to_string(path).map_err(|e| AppError::DraftFsReadFailed(e.to_string()))?;

    let data: DraftFile =
        serde_json::from_str(&text).map_err(|e| AppError::DraftFsInvalidJson(e.to_string()))?;

    if data.version != DRAFT_VERSION {
        return Err(AppError::DraftFsUnsupportedVersion {
            got: data.version,
            expected: DRAFT_VERSION,
        });
    }

    if data.format != DRAFT_FORMAT || data.app != APP_ID {
        return Err(AppError::DraftFsMarkerMismatch);
    }

    Ok(data)
}

/// All readable drafts, newest first. Unreadable or foreign files are skipped
/// rather than failing the whole listing.
pub fn list_drafts(ctx: &AppCtx) -> AppResult<Vec<(PathBuf, DraftFile)>> {
    let dir = ctx.drafts_root();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Ok(draft) = load_draft(&path) {
            out.push((path, draft));
        }
    }

    // ISO timestamps sort lexicographically.
    out.sort_by(|a, b| b.1.saved_utc.cmp(&a.1.saved_utc));
    Ok(out)
}

pub fn delete_draft(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::DraftMissing);
    }
    fs::remove_file(path).map_err(|e| AppError::DraftFsRemoveFailed(e.to_string()))
}

fn write_json_atomic(path: &Path, data: &DraftFile) -> AppResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| AppError::DraftFsWriteFailed("invalid draft path".to_string()))?;

    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| AppError::DraftFsWriteFailed(e.to_string()))?;

    let mut rnd = [0u8; 12];
    OsRng.fill_bytes(&mut rnd);
    let tmp = parent.join(format!(".draft.{}.tmp", hex::encode(rnd)));

    debug_assert_eq!(
        tmp.parent(),
        path.parent(),
        "temp file must be in same directory for atomic rename"
    );

    let mut f = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&tmp)
        .map_err(|e| AppError::DraftFsWriteFailed(e.to_string()))?;

    let write_res: AppResult<()> = (|| {
        f.write_all(&json)
            .map_err(|e| AppError::DraftFsWriteFailed(e.to_string()))?;

        f.flush()
            .map_err(|e| AppError::DraftFsSyncFailed(e.to_string()))?;
        f.sync_all()
            .map_err(|e| AppError::DraftFsSyncFailed(e.to_string()))?;

        rename_replace(&tmp, path).map_err(|e| AppError::DraftFsRenameFailed(e.to_string()))?;

        Ok(())
    })();

    if write_res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    write_res
}

#[cfg(not(windows))]
fn rename_replace(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::rename(from, to)
}

#[cfg(windows)]
fn rename_replace(from: &Path, to: &Path) -> std::io::Result<()> {
    // Windows rename does not replace an existing file.
    if to.exists() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}

fn file_slug(truck_no: &str) -> String {
    let slug: String = truck_no
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if slug.is_empty() {
        "unnamed".to_string()
    } else {
        slug
    }
}

// ======================================================
// Unit Tests
// ======================================================
