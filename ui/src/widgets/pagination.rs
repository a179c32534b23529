//! "Showing a-b of n entries" plus Previous / page numbers / Next.

use egui::{Button, Ui};
use erp_business::{Page, TablePage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    GoTo(usize),
}

/// Renders the pagination bar for `page` and returns the button the user
/// clicked, if any.
pub fn pagination_bar<T>(ui: &mut Ui, page: &Page<'_, T>) -> Option<PageAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.weak(page.summary());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: added in reverse visual order
            if ui.add_enabled(!page.is_last(), Button::new("Next")).clicked() {
                action = Some(PageAction::Next);
            }
            for number in (1..=page.total_pages).rev() {
                let selected = number == page.page_number;
                if ui.selectable_label(selected, number.to_string()).clicked() {
                    action = Some(PageAction::GoTo(number));
                }
            }
            if ui.add_enabled(!page.is_first(), Button::new("Previous")).clicked() {
                action = Some(PageAction::Previous);
            }
        });
    });

    action
}

/// Pagination bar bound to a [`TablePage`]; clicks are applied immediately.
pub fn pagination<T: Send + 'static>(ui: &mut Ui, table: &mut TablePage<T>) {
    let action = pagination_bar(ui, &table.page());
    match action {
        Some(PageAction::Previous) => table.previous_page(),
        Some(PageAction::Next) => table.next_page(),
        Some(PageAction::GoTo(number)) => table.go_to_page(number),
        None => {}
    }
}
