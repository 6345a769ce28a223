// src/ui/widgets.rs
//
// Small reusable widgets shared by the panels: notices, the checklist
// status selector, roster-backed text fields, photo slots and the
// signature pad.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use eframe::egui;
use eframe::egui::{Color32, Sense, Stroke, Ui};

use roadworthy_vehicle_inspector_lib::command::inspection_form::ItemStatus;

pub fn ui_notice(ui: &mut Ui, text: &str) {
    egui::Frame::NONE
        .fill(Color32::from_rgb(10, 40, 80))
        .stroke(Stroke::new(1.0, Color32::from_rgb(80, 180, 255)))
        .corner_radius(egui::CornerRadius::same(8u8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.colored_label(Color32::from_rgb(80, 180, 255), text);
        });
}

/// One row of Good / Bad / Attention / N/A. Returns the status that was
/// clicked this frame, if any.
pub fn status_selector(ui: &mut Ui, current: Option<ItemStatus>) -> Option<ItemStatus> {
    let mut clicked = None;

    for status in ItemStatus::ALL {
        let selected = current == Some(status);
        let text = match status {
            ItemStatus::Good => egui::RichText::new(status.label()).color(status_color(status)),
            _ if selected => egui::RichText::new(status.label()).color(status_color(status)),
            _ => egui::RichText::new(status.label()),
        };
        if ui.selectable_label(selected, text).clicked() {
            clicked = Some(status);
        }
    }

    clicked
}

fn status_color(status: ItemStatus) -> Color32 {
    match status {
        ItemStatus::Good => Color32::from_rgb(0, 220, 90),
        ItemStatus::Bad => Color32::from_rgb(255, 60, 60),
        ItemStatus::Attention => Color32::from_rgb(255, 170, 0),
        ItemStatus::Nil => Color32::GRAY,
    }
}

/// A free-text field with suggestions from the value catalogue. Typing is
/// never restricted to the roster; the suggestions are shortcuts only.
/// Returns true when the buffer changed this frame.
pub fn roster_field(ui: &mut Ui, buf: &mut String, suggestions: &[String]) -> bool {
    let resp = ui.add(egui::TextEdit::singleline(buf).desired_width(220.0));
    let mut changed = resp.changed();

    let needle = buf.trim().to_lowercase();
    if !needle.is_empty() && !suggestions.iter().any(|s| *s == *buf) {
        let hits: Vec<&String> = suggestions
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .take(5)
            .collect();

        if !hits.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for hit in hits {
                    if ui.small_button(hit.as_str()).clicked() {
                        *buf = hit.clone();
                        changed = true;
                    }
                }
            });
        }
    }

    changed
}

pub enum PhotoSlotAction {
    None,
    Attached(String),
    Cleared,
}

/// One photo slot: attach via the native file picker, embedded as an
/// opaque base64 reference, or remove the current attachment.
pub fn photo_slot(ui: &mut Ui, label: &str, current: Option<&str>) -> PhotoSlotAction {
    let mut action = PhotoSlotAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());

        match current {
            Some(reference) => {
                let kb = (reference.len() * 3 / 4) / 1024;
                ui.colored_label(
                    Color32::from_rgb(0, 220, 90),
                    format!("attached ({} KB)", kb.max(1)),
                );
                if ui.small_button("Remove").clicked() {
                    action = PhotoSlotAction::Cleared;
                }
            }
            None => {
                if ui.button("Attach photo…").clicked() {
                    let picked = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                        .pick_file();

                    if let Some(path) = picked {
                        if let Ok(bytes) = std::fs::read(&path) {
                            let ext = path
                                .extension()
                                .and_then(|e| e.to_str())
                                .unwrap_or("png")
                                .to_ascii_lowercase();
                            action = PhotoSlotAction::Attached(format!(
                                "img:{};base64,{}",
                                ext,
                                B64.encode(&bytes)
                            ));
                        }
                    }
                }
            }
        }
    });

    action
}

/// Freehand signature capture. Strokes are kept as point lists in widget
/// coordinates and serialized to an opaque reference string on demand.
pub struct SignaturePad {
    strokes: Vec<Vec<[f32; 2]>>,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    pub fn from_reference(reference: Option<&str>) -> Self {
        let strokes = reference
            .and_then(|r| r.strip_prefix("sig:"))
            .and_then(|b64| B64.decode(b64).ok())
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();

        Self { strokes }
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.len() < 2)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn encode(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let json = serde_json::to_vec(&self.strokes).ok()?;
        Some(format!("sig:{}", B64.encode(json)))
    }

    /// Returns true when a stroke was completed this frame.
    pub fn ui(&mut self, ui: &mut Ui, height: f32) -> bool {
        let width = ui.available_width().min(420.0);
        let (resp, painter) = ui.allocate_painter(egui::vec2(width, height), Sense::drag());
        let rect = resp.rect;

        painter.rect_filled(rect, egui::CornerRadius::same(4u8), Color32::from_gray(24));
        painter.rect_stroke(
            rect,
            egui::CornerRadius::same(4u8),
            Stroke::new(1.0, Color32::from_gray(100)),
            egui::StrokeKind::Inside,
        );

        if resp.drag_started() {
            self.strokes.push(Vec::new());
        }

        if resp.dragged() {
            if let (Some(pos), Some(stroke)) =
                (resp.interact_pointer_pos(), self.strokes.last_mut())
            {
                let p = [pos.x - rect.min.x, pos.y - rect.min.y];
                if stroke.last() != Some(&p) {
                    stroke.push(p);
                }
            }
        }

        let mut finished = false;
        if resp.drag_stopped() {
            match self.strokes.last() {
                Some(s) if s.len() >= 2 => finished = true,
                Some(_) => {
                    self.strokes.pop();
                }
                None => {}
            }
        }

        let ink = Stroke::new(2.0, Color32::WHITE);
        for stroke in &self.strokes {
            for pair in stroke.windows(2) {
                painter.line_segment(
                    [
                        rect.min + egui::vec2(pair[0][0], pair[0][1]),
                        rect.min + egui::vec2(pair[1][0], pair[1][1]),
                    ],
                    ink,
                );
            }
        }

        finished
    }
}
