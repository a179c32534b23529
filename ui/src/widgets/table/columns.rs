//! Column definitions for the list tables.

use egui_extras::Column;

pub const MIN_COLUMN_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// `count` auto-sized columns; the last one fills the remaining space.
#[inline]
pub fn table_columns(count: usize) -> Vec<Column> {
    (0..count)
        .map(|index| {
            if index + 1 == count {
                Column::remainder().at_least(MIN_COLUMN_WIDTH)
            } else {
                Column::auto().at_least(MIN_COLUMN_WIDTH)
            }
        })
        .collect()
}
