use egui::{Frame, Margin, Response, RichText, Ui};
use erp_business::StatusVariant;

use crate::utils::colors::{badge_color, badge_text_color};

/// Draws `status` as a filled, rounded badge colored by its category.
pub fn status_badge(ui: &mut Ui, status: &impl StatusVariant) -> Response {
    let variant = status.variant();
    Frame::NONE
        .fill(badge_color(variant))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(status.label())
                    .small()
                    .strong()
                    .color(badge_text_color(variant)),
            );
        })
        .response
}
