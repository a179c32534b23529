use egui::{Color32, Frame, InnerResponse, Margin, RichText, Stroke, Ui};

/// Border color of a card (subtle gray).
const CARD_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Bordered, padded container.
pub fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .stroke(Stroke::new(1.0, CARD_BORDER_COLOR))
        .corner_radius(6.0)
        .inner_margin(Margin::same(12))
        .show(ui, add_contents)
}

/// A card with a small caption above a large value.
pub fn summary_card(ui: &mut Ui, caption: &str, value: &str, color: Option<Color32>) {
    card(ui, |ui| {
        ui.vertical(|ui| {
            ui.weak(caption);
            let mut text = RichText::new(value).heading().strong();
            if let Some(color) = color {
                text = text.color(color);
            }
            ui.label(text);
        });
    });
}
