// src/ui/panel_inspection_form.rs
//
// The guided inspection wizard: one panel, seven sections, driven by the
// form session state machine. The panel owns the transient widget state
// (signature pads, module picker) and hands persistence to the draft store
// through the FormHost seam.

use std::path::PathBuf;

use eframe::egui;
use eframe::egui::{Color32, RichText, Ui};

use roadworthy_vehicle_inspector_lib::checklist::{grouped_items_for_section, InspectionModule};
use roadworthy_vehicle_inspector_lib::command::inspection_form::{
    self as form, section_title, FormHost, FormSession, InspectionRecord, ItemStatus, PhotoSide,
    RetreatOutcome, SignatureRole, SubmissionStatus, TextField, KEY_RATE, KEY_REMARKS,
    SECTION_CONFIRM, SECTION_COUNT, SECTION_DETAILS, SECTION_PHOTOS, SECTION_REVIEW,
};
use roadworthy_vehicle_inspector_lib::command_state::{set_submission_status, submission_status};
use roadworthy_vehicle_inspector_lib::context::AppCtx;
use roadworthy_vehicle_inspector_lib::draft_store;
use roadworthy_vehicle_inspector_lib::error::AppError;
use roadworthy_vehicle_inspector_lib::types::{AppState, ValueCatalogue};

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{self, PhotoSlotAction, SignaturePad};

const ERROR_RED: Color32 = Color32::from_rgb(255, 60, 60);

pub struct InspectionFormPanel {
    msg: PanelMsgState,
    session: Option<FormSession>,
    module_choice: InspectionModule,
    inspector_choice: String,
    sig_inspector: SignaturePad,
    sig_driver: SignaturePad,
    scroll_to_top: bool,
}

impl InspectionFormPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
            session: None,
            module_choice: InspectionModule::General,
            inspector_choice: String::new(),
            sig_inspector: SignaturePad::new(),
            sig_driver: SignaturePad::new(),
            scroll_to_top: false,
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    /// Hand-off from the drafts panel. The signature pads are rebuilt from
    /// the record so already-captured signatures stay editable.
    pub fn resume(&mut self, module: InspectionModule, record: InspectionRecord) {
        self.sig_inspector = SignaturePad::from_reference(record.signature(SignatureRole::Inspector));
        self.sig_driver = SignaturePad::from_reference(record.signature(SignatureRole::Driver));
        self.session = Some(form::resume_session(module, record));
        self.msg.clear();
        self.msg.set_info("Draft resumed. Earlier answers are kept.");
        self.scroll_to_top = true;
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &AppState, ctx: &AppCtx) {
        if self.session.is_none() {
            self.ui_start(ui, state);
            return;
        }

        // Disjoint field borrows: the section bodies take the session while
        // the message state and pads are updated alongside it.
        let msg = &mut self.msg;
        let sig_inspector = &mut self.sig_inspector;
        let sig_driver = &mut self.sig_driver;
        let scroll_to_top = &mut self.scroll_to_top;
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let mut exit_form = false;
        let mut finished = false;

        ui.horizontal(|ui| {
            ui.heading(format!("{} inspection", session.module.label()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Step {} of {}: {}",
                    session.cursor + 1,
                    SECTION_COUNT,
                    section_title(session.cursor)
                ));
            });
        });
        ui.add_space(4.0);
        msg.show(ui);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                msg.clear();
                if form::retreat(session) == RetreatOutcome::ExitRequested {
                    exit_form = true;
                }
                *scroll_to_top = true;
            }

            if ui.button("Save draft").clicked() {
                msg.clear();
                let mut host = ShellHost::new(ctx, state, session.module);
                form::save_draft(session, &mut host);
                match host.draft_result {
                    Some(Ok(_)) => {
                        msg.set_success("Draft saved. Resume it from the Drafts panel.")
                    }
                    Some(Err(e)) => msg.from_app_error(&e, ctx.debug_ui),
                    None => {}
                }
            }

            if session.cursor < SECTION_CONFIRM && ui.button("Continue").clicked() {
                msg.clear();
                if form::advance(session) {
                    *scroll_to_top = true;
                } else {
                    msg.set_warn("Some required entries are missing. They are marked below.");
                }
            }
        });

        ui.separator();

        let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
        if *scroll_to_top {
            scroll = scroll.vertical_scroll_offset(0.0);
            *scroll_to_top = false;
        }

        scroll.show(ui, |ui| match session.cursor {
            SECTION_DETAILS => Self::ui_details(ui, session, &state.catalogue),
            SECTION_PHOTOS => Self::ui_photos(ui, session),
            SECTION_REVIEW => Self::ui_review(ui, session, sig_inspector, sig_driver),
            SECTION_CONFIRM => {
                finished = Self::ui_confirm(ui, msg, session, state, ctx);
            }
            _ => Self::ui_checklist(ui, session),
        });

        if exit_form {
            self.session = None;
            self.msg
                .set_info("Left the form. Use Save draft to keep progress next time.");
        }

        if finished {
            set_submission_status(state, SubmissionStatus::Idle);
            self.session = None;
            self.sig_inspector = SignaturePad::new();
            self.sig_driver = SignaturePad::new();
        }
    }

    fn ui_start(&mut self, ui: &mut Ui, state: &AppState) {
        ui.heading("New Inspection");
        ui.add_space(4.0);
        self.msg.show(ui);
        ui.add_space(8.0);

        if self.inspector_choice.is_empty() {
            if let Some(first) = state.catalogue.inspectors.first() {
                self.inspector_choice = first.clone();
            }
        }

        ui.label("Inspection module");
        egui::ComboBox::from_id_salt("module_choice")
            .selected_text(self.module_choice.label())
            .show_ui(ui, |ui| {
                for module in InspectionModule::ALL {
                    ui.selectable_value(&mut self.module_choice, module, module.label());
                }
            });

        ui.add_space(8.0);
        ui.label("Inspector");
        egui::ComboBox::from_id_salt("inspector_choice")
            .selected_text(self.inspector_choice.as_str())
            .show_ui(ui, |ui| {
                for name in &state.catalogue.inspectors {
                    ui.selectable_value(&mut self.inspector_choice, name.clone(), name);
                }
            });

        ui.add_space(12.0);
        if ui.button("Start inspection").clicked() {
            self.msg.clear();
            self.sig_inspector = SignaturePad::new();
            self.sig_driver = SignaturePad::new();
            self.session = Some(form::new_session(self.module_choice, &self.inspector_choice));
            self.scroll_to_top = true;
        }
    }

    // --------------------------------------------------
    // section bodies
    // --------------------------------------------------

    fn ui_details(ui: &mut Ui, session: &mut FormSession, catalogue: &ValueCatalogue) {
        ui.label(RichText::new("Vehicle & crew details").strong());
        ui.add_space(6.0);

        Self::text_row(ui, session, TextField::TruckNo, Some(&catalogue.trucks));
        Self::text_row(ui, session, TextField::TrailerNo, Some(&catalogue.trailers));

        if session.module.requires_job_card() {
            Self::text_row(ui, session, TextField::JobCard, None);
        }

        ui.horizontal(|ui| {
            ui.label("Inspector");
            ui.label(RichText::new(session.record.inspector.as_str()).weak());
        });
        ui.add_space(4.0);

        Self::text_row(ui, session, TextField::DriverName, Some(&catalogue.drivers));
        Self::text_row(ui, session, TextField::Location, Some(&catalogue.locations));
        Self::text_row(ui, session, TextField::Odometer, None);
    }

    fn text_row(
        ui: &mut Ui,
        session: &mut FormSession,
        field: TextField,
        suggestions: Option<&[String]>,
    ) {
        let in_error = session.errors.contains(field.key());
        let mut buf = session.record.text_field(field).to_string();

        ui.horizontal(|ui| {
            ui.label(field.label());
            if in_error {
                ui.colored_label(ERROR_RED, "required");
            }
        });

        let changed = match suggestions {
            Some(list) => widgets::roster_field(ui, &mut buf, list),
            None => ui
                .add(egui::TextEdit::singleline(&mut buf).desired_width(220.0))
                .changed(),
        };
        if changed {
            form::set_text_field(session, field, buf);
        }
        ui.add_space(4.0);
    }

    fn ui_photos(ui: &mut Ui, session: &mut FormSession) {
        ui.label(RichText::new("Vehicle photos").strong());
        ui.label(RichText::new("Optional. Attach one photo per side.").weak());
        ui.add_space(6.0);

        for side in PhotoSide::ALL {
            let current = session.record.photos.get(side).map(|s| s.to_string());
            match widgets::photo_slot(ui, side.label(), current.as_deref()) {
                PhotoSlotAction::Attached(reference) => {
                    form::set_photo(session, side, Some(reference))
                }
                PhotoSlotAction::Cleared => form::set_photo(session, side, None),
                PhotoSlotAction::None => {}
            }
            ui.add_space(4.0);
        }
    }

    fn ui_checklist(ui: &mut Ui, session: &mut FormSession) {
        for (category, items) in grouped_items_for_section(session.module, session.cursor) {
            ui.label(RichText::new(category).strong());
            ui.add_space(2.0);

            for item in items {
                let current = session.record.item_status.get(item.id).copied();
                let in_error = session.errors.contains(item.id);

                let clicked = ui
                    .horizontal(|ui| {
                        ui.label(item.label);
                        if in_error {
                            ui.colored_label(ERROR_RED, "required");
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| widgets::status_selector(ui, current),
                        )
                        .inner
                    })
                    .inner;

                if let Some(status) = clicked {
                    // ids come straight from the active module's catalogue
                    let _ = form::set_item_status(session, item.id, status);
                }
            }
            ui.add_space(8.0);
        }
    }

    fn ui_review(
        ui: &mut Ui,
        session: &mut FormSession,
        sig_inspector: &mut SignaturePad,
        sig_driver: &mut SignaturePad,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Remarks").strong());
            if session.errors.contains(KEY_REMARKS) {
                ui.colored_label(ERROR_RED, "required");
            }
        });
        let mut remarks = session.record.remarks.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut remarks)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            form::set_remarks(session, remarks);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Overall rating").strong());
            if session.errors.contains(KEY_RATE) {
                ui.colored_label(ERROR_RED, "required");
            }
        });
        let mut pick = None;
        ui.horizontal(|ui| {
            for n in 1..=5u8 {
                let star = if session.record.rate >= n { "★" } else { "☆" };
                if ui.selectable_label(false, star).clicked() {
                    pick = Some(n);
                }
            }
            if session.record.rate > 0 {
                ui.label(format!("{} / 5", session.record.rate));
            }
        });
        if let Some(n) = pick {
            let _ = form::set_rate(session, n);
        }

        ui.add_space(8.0);
        Self::signature_block(
            ui,
            session,
            SignatureRole::Inspector,
            "Inspector signature",
            sig_inspector,
        );
        Self::signature_block(
            ui,
            session,
            SignatureRole::Driver,
            "Driver signature",
            sig_driver,
        );
    }

    fn signature_block(
        ui: &mut Ui,
        session: &mut FormSession,
        role: SignatureRole,
        label: &str,
        pad: &mut SignaturePad,
    ) {
        let in_error = session.errors.contains(role.key());
        let mut cleared = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new(label).strong());
            if in_error {
                ui.colored_label(ERROR_RED, "required");
            }
            if ui.small_button("Clear").clicked() {
                cleared = true;
            }
        });

        if cleared {
            pad.clear();
            form::set_signature(session, role, None);
        }

        if pad.ui(ui, 110.0) {
            form::set_signature(session, role, pad.encode());
        }
        ui.add_space(6.0);
    }

    /// Returns true when the user asked to leave a completed submission and
    /// start over.
    fn ui_confirm(
        ui: &mut Ui,
        msg: &mut PanelMsgState,
        session: &mut FormSession,
        state: &AppState,
        ctx: &AppCtx,
    ) -> bool {
        ui.label(RichText::new("Summary").strong());
        ui.add_space(4.0);

        {
            let rec = &session.record;
            let photos = PhotoSide::ALL
                .into_iter()
                .filter(|side| rec.photos.get(*side).is_some())
                .count();
            let bad = rec
                .item_status
                .values()
                .filter(|s| **s == ItemStatus::Bad)
                .count();
            let attention = rec
                .item_status
                .values()
                .filter(|s| **s == ItemStatus::Attention)
                .count();

            egui::Grid::new("confirm_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Module");
                    ui.label(session.module.label());
                    ui.end_row();

                    ui.label("Truck");
                    ui.label(rec.truck_no.as_str());
                    ui.end_row();

                    ui.label("Trailer");
                    ui.label(rec.trailer_no.as_str());
                    ui.end_row();

                    if session.module.requires_job_card() {
                        ui.label("Job card");
                        ui.label(rec.job_card.as_str());
                        ui.end_row();
                    }

                    ui.label("Inspector");
                    ui.label(rec.inspector.as_str());
                    ui.end_row();

                    ui.label("Driver");
                    ui.label(rec.driver_name.as_str());
                    ui.end_row();

                    ui.label("Location");
                    ui.label(rec.location.as_str());
                    ui.end_row();

                    ui.label("Odometer");
                    ui.label(rec.odometer.as_str());
                    ui.end_row();

                    ui.label("Photos");
                    ui.label(format!("{photos} of 4 attached"));
                    ui.end_row();

                    ui.label("Checklist");
                    ui.label(format!(
                        "{} answered, {} bad, {} attention",
                        rec.item_status.len(),
                        bad,
                        attention
                    ));
                    ui.end_row();

                    ui.label("Rating");
                    ui.label(format!("{} / 5", rec.rate));
                    ui.end_row();
                });
        }

        ui.add_space(10.0);

        let mut reset = false;
        match submission_status(state) {
            SubmissionStatus::Idle => {
                let submit_btn =
                    egui::Button::new(RichText::new("Submit inspection").strong());
                if ui.add(submit_btn).clicked() {
                    msg.clear();
                    let mut host = ShellHost::new(ctx, state, session.module);
                    if form::submit(session, &mut host) {
                        match host.submit_error {
                            None => msg.set_success("Inspection submitted."),
                            Some(e) if ctx.debug_ui => msg.set_warn(format!(
                                "Submission failed ({e}). Saved as a draft instead."
                            )),
                            Some(_) => msg.set_warn(
                                "Could not submit right now. The inspection was saved as a draft.",
                            ),
                        }
                    }
                }
            }
            SubmissionStatus::Submitting => {
                ui.add_enabled(false, egui::Button::new("Submitting…"));
            }
            SubmissionStatus::Success => {
                widgets::ui_notice(ui, "Inspection submitted.");
                ui.add_space(6.0);
                if ui.button("Start another inspection").clicked() {
                    reset = true;
                }
            }
            SubmissionStatus::OfflineSaved => {
                widgets::ui_notice(
                    ui,
                    "Saved locally as a draft. Submit it again once storage is available.",
                );
                ui.add_space(6.0);
                if ui.button("Back to start").clicked() {
                    reset = true;
                }
            }
        }

        reset
    }
}

/// Bridges the form session to the draft store and the shared submission
/// status. One instance per button press; results are read back by the panel.
struct ShellHost<'a> {
    ctx: &'a AppCtx,
    state: &'a AppState,
    module: InspectionModule,
    draft_result: Option<Result<PathBuf, AppError>>,
    submit_error: Option<AppError>,
}

impl<'a> ShellHost<'a> {
    fn new(ctx: &'a AppCtx, state: &'a AppState, module: InspectionModule) -> Self {
        Self {
            ctx,
            state,
            module,
            draft_result: None,
            submit_error: None,
        }
    }
}

impl FormHost for ShellHost<'_> {
    fn persist_draft(&mut self, record: &InspectionRecord) {
        self.draft_result = Some(draft_store::save_draft(self.ctx, self.module, record));
    }

    fn submit(&mut self, record: &InspectionRecord) {
        set_submission_status(self.state, SubmissionStatus::Submitting);

        match draft_store::save_submission(self.ctx, self.module, record) {
            Ok(_) => set_submission_status(self.state, SubmissionStatus::Success),
            Err(e) => {
                // Keep the record recoverable before reporting the failure.
                let _ = draft_store::save_draft(self.ctx, self.module, record);
                set_submission_status(self.state, SubmissionStatus::OfflineSaved);
                self.submit_error = Some(e);
            }
        }
    }
}
