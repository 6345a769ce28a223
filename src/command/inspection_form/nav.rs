// src/command/inspection_form/nav.rs

use crate::command::inspection_form::types::{
    FormSession, RetreatOutcome, SECTION_COUNT, SECTION_CONFIRM,
};
use crate::command::inspection_form::validate::validate_section;

/// Run the validator for the current section. On pass, clear all errors and
/// move the cursor forward (capped at the terminal section); on fail, replace
/// the error set and leave the cursor alone. Returns whether the cursor moved.
pub fn advance(session: &mut FormSession) -> bool {
    let errors = validate_section(session.cursor, session.module, &session.record);

    if !errors.is_empty() {
        session.errors = errors;
        return false;
    }

    session.errors.clear();
    if session.cursor < SECTION_COUNT - 1 {
        session.cursor += 1;
        true
    } else {
        false
    }
}

/// Going backward needs no validation. At the first section this is an exit
/// request the shell must act on; the record is left untouched either way.
pub fn retreat(session: &mut FormSession) -> RetreatOutcome {
    if session.cursor == 0 {
        return RetreatOutcome::ExitRequested;
    }
    session.cursor -= 1;
    RetreatOutcome::MovedBack
}

pub fn is_terminal(session: &FormSession) -> bool {
    session.cursor == SECTION_CONFIRM
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::catalog::InspectionModule;
    use crate::command::inspection_form::types::{InspectionRecord, ValidationErrors};

    fn mk_session(cursor: usize) -> FormSession {
        FormSession {
            module: InspectionModule::General,
            record: InspectionRecord::default(),
            cursor,
            errors: ValidationErrors::new(),
        }
    }

    #[test]
    fn advance_blocked_by_empty_details_and_cursor_stays() {
        let mut s = mk_session(0);
        assert!(!advance(&mut s));
        assert_eq!(s.cursor, 0);
        assert!(!s.errors.is_empty());
    }

    #[test]
    fn advance_from_optional_photos_section_moves_and_clears_errors() {
        let mut s = mk_session(1);
        s.errors.insert("stale".to_string());

        assert!(advance(&mut s));
        assert_eq!(s.cursor, 2);
        assert!(s.errors.is_empty());
    }

    #[test]
    fn advance_at_terminal_section_does_not_move() {
        let mut s = mk_session(6);
        assert!(!advance(&mut s));
        assert_eq!(s.cursor, 6);
        assert!(s.errors.is_empty());
    }

    #[test]
    fn retreat_from_first_section_requests_exit_and_keeps_record() {
        let mut s = mk_session(0);
        s.record.truck_no = "ZM1234".to_string();

        assert_eq!(retreat(&mut s), RetreatOutcome::ExitRequested);
        assert_eq!(s.cursor, 0);
        assert_eq!(s.record.truck_no, "ZM1234");
    }

    #[test]
    fn retreat_decrements_without_validation() {
        // Section 5 would never validate on an empty record, but going back
        // must not care.
        let mut s = mk_session(5);
        assert_eq!(retreat(&mut s), RetreatOutcome::MovedBack);
        assert_eq!(s.cursor, 4);
    }

    #[test]
    fn is_terminal_only_at_confirm_section() {
        assert!(!is_terminal(&mk_session(0)));
        assert!(!is_terminal(&mk_session(5)));
        assert!(is_terminal(&mk_session(6)));
    }
}
