//! Table components shared by the list views.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `cells`: Cell rendering functions for each column type

pub mod cells;
pub mod columns;
pub mod header;

use egui::Ui;
use egui_extras::{TableBuilder, TableRow};
use erp_business::TableBody;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;

/// Text shown in place of rows when a loaded view has none.
pub const EMPTY_MESSAGE: &str = "No records";

/// Text shown while the view is waiting for its rows.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Renders a striped table with `headers` and the rows of `body`.
///
/// `render_row` must add exactly one cell per header.
pub fn data_table<T>(
    ui: &mut Ui,
    headers: &[&str],
    body: TableBody<'_, T>,
    mut render_row: impl FnMut(&mut TableRow<'_, '_>, &T),
) {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns(headers.len()) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, headers);
        })
        .body(|mut table| match body {
            TableBody::Loading => table.row(ROW_HEIGHT, |mut row| {
                cells::placeholder_row(&mut row, headers.len(), true);
            }),
            TableBody::Empty => table.row(ROW_HEIGHT, |mut row| {
                cells::placeholder_row(&mut row, headers.len(), false);
            }),
            TableBody::Rows(page) => {
                for item in page.rows {
                    table.row(ROW_HEIGHT, |mut row| render_row(&mut row, item));
                }
            }
        });
}
