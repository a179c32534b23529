//! Shared color constants for the UI.

use egui::Color32;
use erp_business::BadgeVariant;

/// Forest green color for completed/received/fulfilled status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for shortages and failures.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for in-progress/pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Neutral gray for planned/required/unrecognized status.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(108, 117, 125);

/// Blue accent, used for orders already sent to a vendor.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Fill color of a status badge.
pub fn badge_color(variant: BadgeVariant) -> Color32 {
    match variant {
        BadgeVariant::Success => COLOR_GREEN,
        BadgeVariant::Warning => COLOR_AMBER,
        BadgeVariant::Secondary => COLOR_GRAY,
        BadgeVariant::Destructive => COLOR_RED,
        BadgeVariant::Accent => COLOR_BLUE,
    }
}

/// Text color readable on top of [`badge_color`].
pub fn badge_text_color(variant: BadgeVariant) -> Color32 {
    match variant {
        BadgeVariant::Warning => Color32::BLACK,
        _ => Color32::WHITE,
    }
}
