use egui::Ui;
use erp_business::Route;

use super::page_header;
use crate::widgets::card;

/// Card title, description and button text for each planning view.
const VIEWS: [(Route, &str, &str, &str); 2] = [
    (
        Route::MasterProductionSchedule,
        "Master Production Schedule (MPS)",
        "Plan and manage production schedules and work orders",
        "Open MPS",
    ),
    (
        Route::MaterialRequirementPlanning,
        "Material Requirement Planning (MRP)",
        "Monitor material requirements, availability, and procurement status",
        "Open MRP",
    ),
];

/// Overview with one card per planning view.
pub fn production_page(ui: &mut Ui) -> Option<Route> {
    let mut target = None;

    page_header(ui, "Production", "Production planning and scheduling");

    ui.columns(VIEWS.len(), |columns| {
        for (column, (route, title, description, button)) in columns.iter_mut().zip(VIEWS) {
            card(column, |ui| {
                ui.strong(title);
                ui.weak(description);
                ui.add_space(8.0);
                if ui.button(button).clicked() {
                    target = Some(route);
                }
            });
        }
    });

    target
}
