use egui::Ui;
use erp_business::{MpsEntry, TablePage};

use super::page_header;
use crate::widgets::table::cells::{muted_cell, number_cell, status_cell, strong_cell, text_cell};
use crate::widgets::{card, data_table, pagination};

const HEADERS: [&str; 5] = ["Product Name", "Work Order ID", "Quantity", "Due Date", "Status"];

pub fn mps_page(ui: &mut Ui, table: &mut TablePage<MpsEntry>) {
    page_header(
        ui,
        "Master Production Schedule (MPS)",
        "Plan and manage production schedules and work orders",
    );

    card(ui, |ui| {
        data_table(ui, &HEADERS, table.body(), |row, entry| {
            text_cell(row, entry.product_name.as_str());
            strong_cell(row, &entry.work_order_id);
            number_cell(row, entry.quantity.to_string(), None);
            muted_cell(row, &entry.due_date);
            status_cell(row, &entry.status);
        });
        ui.add_space(12.0);
        pagination(ui, table);
    });
}
