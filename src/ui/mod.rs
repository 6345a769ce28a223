// src/ui/mod.rs

pub mod message;
pub mod nav;
pub mod panel_drafts;
pub mod panel_inspection_form;
pub mod widgets;

use std::sync::Arc;

use eframe::egui;

use roadworthy_vehicle_inspector_lib::context::AppCtx;
use roadworthy_vehicle_inspector_lib::types::AppState;

use nav::LeftNav;
use panel_drafts::DraftsPanel;
use panel_inspection_form::InspectionFormPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Inspection,
    Drafts,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,
    route: Route,
    last_route: Route,
    nav: LeftNav,
    inspection: InspectionFormPanel,
    drafts: DraftsPanel,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        Self {
            state,
            ctx,
            route: Route::Inspection,
            last_route: Route::Inspection,
            nav: LeftNav::new(),
            inspection: InspectionFormPanel::new(),
            drafts: DraftsPanel::new(),
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, egui_ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.nav.ui(egui_ctx, &mut self.route);

        if self.route != self.last_route {
            // Stale panel messages and listings do not survive navigation.
            self.inspection.clear_messages();
            self.drafts.clear_messages();
            self.drafts.invalidate();
            self.last_route = self.route;
        }

        let mut resume = None;

        egui::CentralPanel::default().show(egui_ctx, |ui| match self.route {
            Route::Inspection => self.inspection.ui(ui, &self.state, &self.ctx),
            Route::Drafts => {
                resume = self.drafts.ui(ui, &self.ctx);
            }
        });

        if let Some((module, record)) = resume {
            self.inspection.resume(module, record);
            self.route = Route::Inspection;
        }
    }
}
