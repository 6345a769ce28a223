// src/ui/panel_drafts.rs

use std::path::PathBuf;

use eframe::egui;
use eframe::egui::{RichText, Ui};

use roadworthy_vehicle_inspector_lib::checklist::InspectionModule;
use roadworthy_vehicle_inspector_lib::command::inspection_form::InspectionRecord;
use roadworthy_vehicle_inspector_lib::context::AppCtx;
use roadworthy_vehicle_inspector_lib::draft_store::{self, DraftFile};

use crate::ui::message::PanelMsgState;

enum RowAction {
    Resume(usize),
    Delete(usize),
}

pub struct DraftsPanel {
    msg: PanelMsgState,
    // None means the listing is stale and gets reloaded on the next frame.
    entries: Option<Vec<(PathBuf, DraftFile)>>,
}

impl DraftsPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
            entries: None,
        }
    }

    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    /// Renders the listing. Returns the draft to resume when one was picked.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        ctx: &AppCtx,
    ) -> Option<(InspectionModule, InspectionRecord)> {
        ui.horizontal(|ui| {
            ui.heading("Saved Drafts");
            if ui.button("Refresh").clicked() {
                self.entries = None;
                self.msg.clear();
            }
        });
        ui.add_space(4.0);
        self.msg.show(ui);
        ui.add_space(4.0);

        if self.entries.is_none() {
            match draft_store::list_drafts(ctx) {
                Ok(list) => self.entries = Some(list),
                Err(e) => {
                    self.msg.from_app_error(&e, ctx.debug_ui);
                    self.entries = Some(Vec::new());
                }
            }
        }

        let entries = self.entries.clone().unwrap_or_default();
        if entries.is_empty() {
            ui.label(RichText::new("No drafts yet. Use Save draft inside a form.").weak());
            return None;
        }

        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (idx, (_, draft)) in entries.iter().enumerate() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            let truck = if draft.record.truck_no.trim().is_empty() {
                                "(no truck no.)"
                            } else {
                                draft.record.truck_no.as_str()
                            };
                            ui.label(RichText::new(truck).strong());
                            ui.label(draft.module.label());
                            ui.label(RichText::new(draft.saved_utc.as_str()).weak());

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Delete").clicked() {
                                        action = Some(RowAction::Delete(idx));
                                    }
                                    if ui.button("Resume").clicked() {
                                        action = Some(RowAction::Resume(idx));
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        match action {
            Some(RowAction::Resume(idx)) => {
                let (_, draft) = entries.into_iter().nth(idx)?;
                self.msg.clear();
                Some((draft.module, draft.record))
            }
            Some(RowAction::Delete(idx)) => {
                if let Some((path, _)) = entries.get(idx) {
                    match draft_store::delete_draft(path) {
                        Ok(()) => self.msg.set_success("Draft deleted."),
                        Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
                    }
                }
                self.entries = None;
                None
            }
            None => None,
        }
    }
}
