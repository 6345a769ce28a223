// src/command/inspection_form/ops.rs

use crate::checklist::catalog::{is_known_item, InspectionModule};
use crate::command::inspection_form::types::{
    FormError, FormHost, FormSession, InspectionRecord, ItemStatus, PhotoSide, SignatureRole,
    TextField, ValidationErrors, KEY_RATE, KEY_REMARKS,
};
use crate::command::inspection_form::validate::validate_section;

/// Start a fresh session. The inspector name comes from the roster and is the
/// only identity field filled in up front.
pub fn new_session(module: InspectionModule, inspector: &str) -> FormSession {
    let record = InspectionRecord {
        inspector: inspector.to_string(),
        ..Default::default()
    };
    resume_session(module, record)
}

/// Resume from a previously saved draft. The cursor restarts at the first
/// section; earlier answers are already in the record.
pub fn resume_session(module: InspectionModule, record: InspectionRecord) -> FormSession {
    FormSession {
        module,
        record,
        cursor: 0,
        errors: ValidationErrors::new(),
    }
}

// --------------------------------------------------
// field updates
//
// Every update overwrites the value and clears only that field's own error
// key. Other fields are re-checked on the next advance/submit, never here.
// --------------------------------------------------

pub fn set_text_field(session: &mut FormSession, field: TextField, value: String) {
    match field {
        TextField::TruckNo => session.record.truck_no = value,
        TextField::TrailerNo => session.record.trailer_no = value,
        TextField::JobCard => session.record.job_card = value,
        TextField::DriverName => session.record.driver_name = value,
        TextField::Location => session.record.location = value,
        TextField::Odometer => session.record.odometer = value,
    }
    session.errors.remove(field.key());
}

/// Item keys must come from the active module's catalogue; an unknown id is a
/// caller bug surfaced as an error, never silently stored.
pub fn set_item_status(
    session: &mut FormSession,
    item_id: &str,
    status: ItemStatus,
) -> Result<(), FormError> {
    if !is_known_item(session.module, item_id) {
        return Err(FormError::UnknownItem {
            module: session.module,
            id: item_id.to_string(),
        });
    }

    session
        .record
        .item_status
        .insert(item_id.to_string(), status);
    session.errors.remove(item_id);
    Ok(())
}

pub fn set_photo(session: &mut FormSession, side: PhotoSide, reference: Option<String>) {
    session.record.photos.set(side, reference);
}

pub fn set_signature(session: &mut FormSession, role: SignatureRole, reference: Option<String>) {
    match role {
        SignatureRole::Inspector => session.record.inspector_signature = reference,
        SignatureRole::Driver => session.record.driver_signature = reference,
    }
    session.errors.remove(role.key());
}

pub fn set_remarks(session: &mut FormSession, remarks: String) {
    session.record.remarks = remarks;
    session.errors.remove(KEY_REMARKS);
}

pub fn set_rate(session: &mut FormSession, rate: u8) -> Result<(), FormError> {
    if rate > 5 {
        return Err(FormError::InvalidRate(rate));
    }
    session.record.rate = rate;
    session.errors.remove(KEY_RATE);
    Ok(())
}

// --------------------------------------------------
// collaborator handoffs
// --------------------------------------------------

/// Hand the full record to the draft collaborator as-is. This is the only
/// path that preserves an incomplete record, so it never validates.
pub fn save_draft(session: &FormSession, host: &mut dyn FormHost) {
    host.persist_draft(&session.record);
}

/// Validate the current section (the terminal one always passes) and, if
/// admissible, hand the record to the submission collaborator exactly once.
/// The cursor does not move; the shell tracks submission status.
pub fn submit(session: &mut FormSession, host: &mut dyn FormHost) -> bool {
    let errors = validate_section(session.cursor, session.module, &session.record);
    if !errors.is_empty() {
        session.errors = errors;
        return false;
    }

    session.errors.clear();
    host.submit(&session.record);
    true
}

// ======================================================
// Unit Tests
// ======================================================
