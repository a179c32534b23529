use egui::Ui;
use erp_business::{PurchaseOrder, TablePage};

use super::page_header;
use crate::widgets::table::cells::{muted_cell, number_cell, status_cell, strong_cell, text_cell};
use crate::widgets::{card, data_table, pagination};

const HEADERS: [&str; 5] = [
    "PO Number",
    "Vendor Name",
    "Creation Date",
    "Status",
    "Total Amount",
];

pub fn procurement_page(ui: &mut Ui, table: &mut TablePage<PurchaseOrder>) {
    page_header(
        ui,
        "Procurement & Purchase Orders",
        "Manage purchase orders and vendor relationships",
    );

    card(ui, |ui| {
        ui.strong("Purchase Orders");
        ui.add_space(8.0);
        data_table(ui, &HEADERS, table.body(), |row, order| {
            strong_cell(row, &order.po_number);
            text_cell(row, order.vendor_name.as_str());
            muted_cell(row, &order.creation_date);
            status_cell(row, &order.status);
            number_cell(row, order.formatted_amount(), None);
        });
        ui.add_space(12.0);
        pagination(ui, table);
    });
}
