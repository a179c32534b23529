pub mod dashboard;
pub mod mps;
pub mod mrp;
pub mod not_found;
pub mod procurement;
pub mod production;

use egui::Ui;
use erp_business::Route;

use crate::state::{ActiveView, State};

/// Draws the page for the current route. Returns a route to navigate to when
/// the page asked for one.
pub fn show(ui: &mut Ui, state: &mut State) -> Option<Route> {
    let route = state.route();
    match &mut state.view {
        ActiveView::Dashboard(schedule) => {
            dashboard::dashboard_page(ui, &state.dashboard, schedule, &state.config)
        }
        ActiveView::Mps(page) => {
            mps::mps_page(ui, page);
            None
        }
        ActiveView::Mrp(page) => {
            mrp::mrp_page(ui, page);
            None
        }
        ActiveView::Procurement(page) => {
            procurement::procurement_page(ui, page);
            None
        }
        ActiveView::None => match route {
            Route::Production => production::production_page(ui),
            _ => not_found::not_found_page(ui),
        },
    }
}

/// Page heading with a muted description underneath.
fn page_header(ui: &mut Ui, title: &str, description: &str) {
    ui.heading(title);
    ui.weak(description);
    ui.add_space(12.0);
}
