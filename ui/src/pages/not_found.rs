use egui::{Button, RichText, Ui};
use erp_business::Route;

/// Placeholder for sections that have no view yet.
pub fn not_found_page(ui: &mut Ui) -> Option<Route> {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("404").size(72.0).strong().weak());
        ui.label(RichText::new("Page Not Found").heading());
        ui.weak("This functionality is currently under development.");
        ui.add_space(16.0);
        if ui.add(Button::new("Return to Dashboard")).clicked() {
            target = Some(Route::Dashboard);
        }
    });

    target
}
