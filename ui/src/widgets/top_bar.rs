use egui::{Button, RichText, Ui};
use erp_business::{BusinessConfig, Route};

/// Page title on the left, backend address on the right.
///
/// Returns `true` when the title was clicked, which leads back to the
/// dashboard.
pub fn top_bar(ui: &mut Ui, route: Route, config: &BusinessConfig) -> bool {
    let clicked = ui
        .add(Button::new(RichText::new(route.title()).heading().strong()).frame(false))
        .clicked();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.weak(config.api_url().as_str());
    });

    clicked
}
