use egui::{Align, Layout, RichText, Ui};
use erp_business::{Route, SidebarState};

pub const SIDEBAR_WIDTH: f32 = 240.0;

/// Draws the navigation sidebar.
///
/// Returns the route of the clicked entry. A section with sub-entries opens
/// its overview and expands; clicking it again while on the overview
/// collapses it.
pub fn sidebar(ui: &mut Ui, state: &mut SidebarState) -> Option<Route> {
    let mut target = None;

    ui.add_space(8.0);
    ui.label(RichText::new("ERP").heading().strong());
    ui.add_space(16.0);

    ui.with_layout(Layout::top_down_justified(Align::LEFT), |ui| {
        for section in Route::SECTIONS {
            let children = section.children();
            if children.is_empty() {
                if ui
                    .selectable_label(state.is_active(section), section.title())
                    .clicked()
                {
                    target = Some(section);
                }
                continue;
            }

            if ui
                .selectable_label(state.is_active(section), section.title())
                .clicked()
            {
                if state.current == section {
                    state.toggle(section);
                } else {
                    state.expand(section);
                    target = Some(section);
                }
            }

            if state.is_expanded(section) {
                ui.indent(section.path(), |ui| {
                    for &child in children {
                        if ui
                            .selectable_label(state.is_sub_item_active(child), child.title())
                            .clicked()
                        {
                            target = Some(child);
                        }
                    }
                });
            }
        }
    });

    target
}
