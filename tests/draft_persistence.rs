// tests/draft_persistence.rs
//
// Draft save / resume / delete against a real data directory, plus the
// shared submission-status gate.

mod common;

use std::path::PathBuf;

use roadworthy_vehicle_inspector_lib::checklist::InspectionModule;
use roadworthy_vehicle_inspector_lib::command::inspection_form::{
    new_session, resume_session, save_draft, set_remarks, set_text_field, FormHost,
    InspectionRecord, SubmissionStatus, TextField,
};
use roadworthy_vehicle_inspector_lib::command_state::{set_submission_status, submission_status};
use roadworthy_vehicle_inspector_lib::context::AppCtx;
use roadworthy_vehicle_inspector_lib::draft_store;

/// Minimal shell: routes the session's draft handoff into the store.
struct StoreHost<'a> {
    ctx: &'a AppCtx,
    module: InspectionModule,
    last_path: Option<PathBuf>,
}

impl FormHost for StoreHost<'_> {
    fn persist_draft(&mut self, record: &InspectionRecord) {
        self.last_path = draft_store::save_draft(self.ctx, self.module, record).ok();
    }

    fn submit(&mut self, record: &InspectionRecord) {
        self.last_path = draft_store::save_submission(self.ctx, self.module, record).ok();
    }
}

#[test]
fn incomplete_session_draft_round_trips_unchanged() {
    let env = common::test_env();

    let mut s = new_session(InspectionModule::Petroleum, "P. Tembo");
    set_text_field(&mut s, TextField::TruckNo, "ABJ4561".to_string());
    set_remarks(&mut s, "tyre pressure low, recheck after refill".to_string());

    let mut host = StoreHost {
        ctx: &env.ctx,
        module: s.module,
        last_path: None,
    };
    save_draft(&s, &mut host);

    let path = host.last_path.expect("draft written");
    let loaded = draft_store::load_draft(&path).unwrap();

    assert_eq!(loaded.module, InspectionModule::Petroleum);
    assert_eq!(loaded.record, s.record);
    // Unanswered fields survive as-is; drafts are never validated.
    assert!(loaded.record.trailer_no.is_empty());
    assert_eq!(loaded.record.rate, 0);
}

#[test]
fn resumed_draft_restarts_at_the_first_section_with_answers_kept() {
    let env = common::test_env();

    let mut s = new_session(InspectionModule::General, "D. Mwansa");
    set_text_field(&mut s, TextField::TruckNo, "ZM1234".to_string());
    s.cursor = 3;

    let mut host = StoreHost {
        ctx: &env.ctx,
        module: s.module,
        last_path: None,
    };
    save_draft(&s, &mut host);

    let drafts = draft_store::list_drafts(&env.ctx).unwrap();
    assert_eq!(drafts.len(), 1);

    let (_, draft) = drafts.into_iter().next().unwrap();
    let resumed = resume_session(draft.module, draft.record);

    assert_eq!(resumed.cursor, 0);
    assert!(resumed.errors.is_empty());
    assert_eq!(resumed.record.truck_no, "ZM1234");
    assert_eq!(resumed.record.inspector, "D. Mwansa");
}

#[test]
fn drafts_list_and_delete_flow() {
    let env = common::test_env();

    for truck in ["ZM1234", "ACF2214"] {
        let record = InspectionRecord {
            truck_no: truck.to_string(),
            ..Default::default()
        };
        draft_store::save_draft(&env.ctx, InspectionModule::General, &record).unwrap();
    }

    let drafts = draft_store::list_drafts(&env.ctx).unwrap();
    assert_eq!(drafts.len(), 2);

    draft_store::delete_draft(&drafts[0].0).unwrap();

    let remaining = draft_store::list_drafts(&env.ctx).unwrap();
    assert_eq!(remaining.len(), 1);
}

#[test]
fn submission_status_gate_flips_and_resets() {
    let env = common::test_env();

    assert_eq!(submission_status(&env.state), SubmissionStatus::Idle);

    set_submission_status(&env.state, SubmissionStatus::Submitting);
    assert_eq!(submission_status(&env.state), SubmissionStatus::Submitting);

    set_submission_status(&env.state, SubmissionStatus::OfflineSaved);
    assert_eq!(submission_status(&env.state), SubmissionStatus::OfflineSaved);

    set_submission_status(&env.state, SubmissionStatus::Idle);
    assert_eq!(submission_status(&env.state), SubmissionStatus::Idle);
}
