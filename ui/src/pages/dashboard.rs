use egui::{RichText, Ui};
use erp_business::fixtures::{DEFAULT_ROW_COUNT, generate_mrp_entries, generate_purchase_orders};
use erp_business::{BadgeVariant, BusinessConfig, MpsEntry, Route, TablePage, variant_counts};

use super::page_header;
use crate::utils::colors::badge_color;
use crate::widgets::card;

/// Row and badge-category counts for the views backed by generated rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub mrp_rows: usize,
    pub mrp_counts: [(BadgeVariant, usize); 5],
    pub procurement_rows: usize,
    pub procurement_counts: [(BadgeVariant, usize); 5],
}

impl DashboardStats {
    pub fn from_seed(seed: u64) -> Self {
        let mrp = generate_mrp_entries(seed, DEFAULT_ROW_COUNT);
        let orders = generate_purchase_orders(seed, DEFAULT_ROW_COUNT);

        Self {
            mrp_rows: mrp.len(),
            mrp_counts: variant_counts(mrp.iter().map(|entry| &entry.status)),
            procurement_rows: orders.len(),
            procurement_counts: variant_counts(orders.iter().map(|order| &order.status)),
        }
    }
}

/// `schedule` holds the live MPS rows; the other views count generated rows.
pub fn dashboard_page(
    ui: &mut Ui,
    stats: &DashboardStats,
    schedule: &TablePage<MpsEntry>,
    config: &BusinessConfig,
) -> Option<Route> {
    let mut target = None;

    page_header(ui, "Dashboard", "Manufacturing operations at a glance");

    ui.columns(3, |columns| {
        card(&mut columns[0], |ui| {
            ui.strong("Production Schedule (MPS)");
            if schedule.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("Loading work orders...");
                });
            } else {
                let rows = schedule.rows();
                ui.label(format!("{} work orders", rows.len()));
                variant_breakdown(ui, &variant_counts(rows.iter().map(|entry| &entry.status)));
            }
            ui.weak(format!("Live data from {}", config.mps_url()));
            ui.add_space(8.0);
            if ui.button("Open Schedule").clicked() {
                target = Some(Route::MasterProductionSchedule);
            }
        });

        card(&mut columns[1], |ui| {
            ui.strong("Material Requirements (MRP)");
            ui.label(format!("{} materials", stats.mrp_rows));
            variant_breakdown(ui, &stats.mrp_counts);
            ui.add_space(8.0);
            if ui.button("Open Requirements").clicked() {
                target = Some(Route::MaterialRequirementPlanning);
            }
        });

        card(&mut columns[2], |ui| {
            ui.strong("Purchase Orders");
            ui.label(format!("{} purchase orders", stats.procurement_rows));
            variant_breakdown(ui, &stats.procurement_counts);
            ui.add_space(8.0);
            if ui.button("Open Purchase Orders").clicked() {
                target = Some(Route::Procurement);
            }
        });
    });

    target
}

/// One colored line per badge category that has at least one row.
fn variant_breakdown(ui: &mut Ui, counts: &[(BadgeVariant, usize)]) {
    for (variant, count) in counts.iter().filter(|(_, count)| *count > 0) {
        ui.label(RichText::new(format!("{count} {variant}")).color(badge_color(*variant)));
    }
}
