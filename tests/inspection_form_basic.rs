// tests/inspection_form_basic.rs
//
// End-to-end walks through the wizard state machine, without any UI.

use roadworthy_vehicle_inspector_lib::checklist::{catalogue, items_for_section, InspectionModule};
use roadworthy_vehicle_inspector_lib::command::inspection_form::{
    advance, new_session, retreat, set_item_status, set_rate, set_remarks, set_signature,
    set_text_field, submit, FormHost, FormSession, InspectionRecord, ItemStatus, RetreatOutcome,
    SignatureRole, TextField, SECTION_CONFIRM, SECTION_REVIEW,
};

#[derive(Default)]
struct RecordingHost {
    drafts: Vec<InspectionRecord>,
    submissions: Vec<InspectionRecord>,
}

impl FormHost for RecordingHost {
    fn persist_draft(&mut self, record: &InspectionRecord) {
        self.drafts.push(record.clone());
    }

    fn submit(&mut self, record: &InspectionRecord) {
        self.submissions.push(record.clone());
    }
}

fn fill_details(s: &mut FormSession) {
    set_text_field(s, TextField::TruckNo, "ZM1234".to_string());
    set_text_field(s, TextField::TrailerNo, "TR99".to_string());
    set_text_field(s, TextField::DriverName, "John Phiri".to_string());
    set_text_field(s, TextField::Location, "Lusaka".to_string());
    set_text_field(s, TextField::Odometer, "152300".to_string());
    if s.module.requires_job_card() {
        set_text_field(s, TextField::JobCard, "JC-2024-118".to_string());
    }
}

fn answer_section(s: &mut FormSession, status: ItemStatus) {
    for item in items_for_section(s.module, s.cursor) {
        set_item_status(s, item.id, status).unwrap();
    }
}

#[test]
fn general_inspection_walks_all_seven_sections_to_submission() {
    let mut s = new_session(InspectionModule::General, "D. Mwansa");

    fill_details(&mut s);
    assert!(advance(&mut s));
    assert_eq!(s.cursor, 1);

    // Photos are optional; an empty section passes.
    assert!(advance(&mut s));
    assert_eq!(s.cursor, 2);

    for expected in 2..=4 {
        assert_eq!(s.cursor, expected);

        // Blocked while anything is unanswered.
        assert!(!advance(&mut s));
        assert!(!s.errors.is_empty());

        answer_section(&mut s, ItemStatus::Good);
        assert!(advance(&mut s));
        assert!(s.errors.is_empty());
    }

    assert_eq!(s.cursor, SECTION_REVIEW);
    assert!(!advance(&mut s));
    for key in ["remarks", "rate", "inspector_signature", "driver_signature"] {
        assert!(s.errors.contains(key), "missing review error for {key}");
    }

    set_remarks(&mut s, "All items checked, no defects found.".to_string());
    set_rate(&mut s, 4).unwrap();
    set_signature(&mut s, SignatureRole::Inspector, Some("sig:aW5z".to_string()));
    set_signature(&mut s, SignatureRole::Driver, Some("sig:ZHJ2".to_string()));
    assert!(advance(&mut s));
    assert_eq!(s.cursor, SECTION_CONFIRM);

    let mut host = RecordingHost::default();
    assert!(submit(&mut s, &mut host));
    assert_eq!(host.submissions.len(), 1);
    assert!(host.drafts.is_empty(), "submission must not write a draft");

    let out = &host.submissions[0];
    assert_eq!(out.truck_no, "ZM1234");
    assert_eq!(out.rate, 4);
    assert_eq!(
        out.item_status.len(),
        catalogue(InspectionModule::General).len(),
        "every catalogue item carries an answer at submission"
    );
}

#[test]
fn job_card_is_required_for_petroleum_but_not_general() {
    let mut general = new_session(InspectionModule::General, "D. Mwansa");
    fill_details(&mut general);
    assert!(advance(&mut general));

    let mut petroleum = new_session(InspectionModule::Petroleum, "P. Tembo");
    set_text_field(&mut petroleum, TextField::TruckNo, "ABJ4561".to_string());
    set_text_field(&mut petroleum, TextField::TrailerNo, "TRL4410".to_string());
    set_text_field(&mut petroleum, TextField::DriverName, "Moses Banda".to_string());
    set_text_field(&mut petroleum, TextField::Location, "Ndola".to_string());
    set_text_field(&mut petroleum, TextField::Odometer, "88000".to_string());

    assert!(!advance(&mut petroleum));
    assert_eq!(
        petroleum.errors.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["job_card"]
    );

    set_text_field(&mut petroleum, TextField::JobCard, "JC-77".to_string());
    assert!(advance(&mut petroleum));
    assert_eq!(petroleum.cursor, 1);
}

#[test]
fn not_applicable_answers_satisfy_a_checklist_section() {
    let mut s = new_session(InspectionModule::Acid, "P. Tembo");
    s.cursor = 2;

    answer_section(&mut s, ItemStatus::Nil);
    assert!(advance(&mut s));
    assert_eq!(s.cursor, 3);
}

#[test]
fn retreat_from_details_requests_exit_and_keeps_answers() {
    let mut s = new_session(InspectionModule::General, "D. Mwansa");
    set_text_field(&mut s, TextField::TruckNo, "BAD7730".to_string());

    assert_eq!(retreat(&mut s), RetreatOutcome::ExitRequested);
    assert_eq!(s.cursor, 0);
    assert_eq!(s.record.truck_no, "BAD7730");
}
