//! Cell rendering functions for the list tables.

use egui::{Align, Layout, RichText, WidgetText};
use egui_extras::TableRow;
use erp_business::StatusVariant;

use super::{EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::widgets::badge::status_badge;

#[inline]
pub fn text_cell(row: &mut TableRow<'_, '_>, text: impl Into<WidgetText>) {
    row.col(|ui| {
        ui.label(text);
    });
}

/// Bold cell, used for identifiers such as work order and PO numbers.
#[inline]
pub fn strong_cell(row: &mut TableRow<'_, '_>, text: &str) {
    text_cell(row, RichText::new(text).strong());
}

#[inline]
pub fn muted_cell(row: &mut TableRow<'_, '_>, text: &str) {
    row.col(|ui| {
        ui.weak(text);
    });
}

/// Right-aligned monospace cell for quantities and amounts.
#[inline]
pub fn number_cell(row: &mut TableRow<'_, '_>, text: impl Into<String>, color: Option<egui::Color32>) {
    row.col(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let mut text = RichText::new(text).monospace();
            if let Some(color) = color {
                text = text.color(color);
            }
            ui.label(text);
        });
    });
}

#[inline]
pub fn status_cell(row: &mut TableRow<'_, '_>, status: &impl StatusVariant) {
    row.col(|ui| {
        status_badge(ui, status);
    });
}

/// Fills a row with the loading or empty message in its first cell.
pub fn placeholder_row(row: &mut TableRow<'_, '_>, columns: usize, loading: bool) {
    row.col(|ui| {
        if loading {
            ui.spinner();
            ui.label(LOADING_MESSAGE);
        } else {
            ui.weak(EMPTY_MESSAGE);
        }
    });
    for _ in 1..columns {
        row.col(|_| {});
    }
}
