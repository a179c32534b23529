use egui::{Color32, Ui};
use erp_business::{MrpEntry, MrpSummary, TablePage, group_thousands};

use super::page_header;
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};
use crate::widgets::table::cells::{muted_cell, number_cell, status_cell, strong_cell, text_cell};
use crate::widgets::{card, data_table, pagination, summary_card};

const HEADERS: [&str; 9] = [
    "Material Code",
    "Material Name",
    "Required Qty",
    "Available Qty",
    "Shortfall",
    "Supplier",
    "Lead Time",
    "Status",
    "Planned Date",
];

pub fn mrp_page(ui: &mut Ui, table: &mut TablePage<MrpEntry>) {
    page_header(
        ui,
        "Material Requirement Planning (MRP)",
        "Monitor material requirements, availability, and procurement status",
    );

    summary_cards(ui, &MrpSummary::from_entries(table.rows()));
    ui.add_space(12.0);

    card(ui, |ui| {
        ui.strong("Material Requirements Overview");
        ui.add_space(8.0);
        data_table(ui, &HEADERS, table.body(), |row, entry| {
            strong_cell(row, &entry.material_code);
            text_cell(row, entry.material_name.as_str());
            number_cell(row, group_thousands(entry.required_qty.into()), None);
            number_cell(row, group_thousands(entry.available_qty.into()), None);
            let shortfall_color = (entry.shortfall > 0).then_some(COLOR_RED);
            number_cell(row, group_thousands(entry.shortfall.into()), shortfall_color);
            text_cell(row, entry.supplier.as_str());
            muted_cell(row, &format!("{} days", entry.lead_time_days));
            status_cell(row, &entry.status);
            muted_cell(row, &entry.planned_date);
        });
        ui.add_space(12.0);
        pagination(ui, table);
    });
}

fn summary_cards(ui: &mut Ui, summary: &MrpSummary) {
    let tiles = summary_tiles(summary);
    ui.columns(tiles.len(), |columns| {
        for (column, (caption, value, color)) in columns.iter_mut().zip(tiles) {
            summary_card(column, caption, &value, color);
        }
    });
}

/// Caption, formatted value and accent color of each summary card.
fn summary_tiles(summary: &MrpSummary) -> [(&'static str, String, Option<Color32>); 4] {
    [
        ("Total Required", group_thousands(summary.total_required), None),
        (
            "Available Stock",
            group_thousands(summary.total_available),
            Some(COLOR_GREEN),
        ),
        (
            "Total Shortfall",
            group_thousands(summary.total_shortfall),
            Some(COLOR_RED),
        ),
        (
            "Items in Shortage",
            summary.shortage_items.to_string(),
            Some(COLOR_AMBER),
        ),
    ]
}
