// src/ui/nav.rs

use crate::ui::Route;
use eframe::egui;

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ctx: &egui::Context, route: &mut Route) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(150.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Roadworthy").strong().size(16.0));
                ui.separator();

                nav_btn(ui, route, Route::Inspection, "Inspection");
                nav_btn(ui, route, Route::Drafts, "Drafts");
            });
    }
}

fn nav_btn(ui: &mut egui::Ui, route: &mut Route, target: Route, label: &str) {
    let selected = *route == target;
    if ui.selectable_label(selected, label).clicked() {
        *route = target;
    }
}
