//! Seeded sample data for the views that have no backend yet.
//!
//! The same seed always yields the same rows, so screens and tests are
//! reproducible.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::records::{MrpEntry, PurchaseOrder};
use crate::status::{MrpStatus, PoStatus};

/// Seed used by the running application.
pub const DEFAULT_SEED: u64 = 20_240_101;

/// Rows generated per view.
pub const DEFAULT_ROW_COUNT: usize = 30;

const MATERIALS: [&str; 10] = [
    "Steel Sheets",
    "Aluminum Rods",
    "Plastic Components",
    "Electronic Parts",
    "Fasteners",
    "Rubber Seals",
    "Glass Panels",
    "Copper Wire",
    "Ceramic Insulators",
    "Carbon Fiber",
];

const SUPPLIERS: [&str; 5] = [
    "MetalCorp Ltd",
    "TechSupply Inc",
    "MaterialsPlus",
    "IndustrialGoods Co",
    "PrecisionParts",
];

const VENDORS: [&str; 10] = [
    "Acme Corp",
    "Stellar Industries",
    "Global Supply Co",
    "Premier Materials",
    "Elite Components",
    "Quantum Systems",
    "Precision Parts",
    "Advanced Tech",
    "Industrial Solutions",
    "Quality Materials",
];

/// `YYYY-MM-DD` for `base + offset` days.
fn date_after(year: i32, month: u32, day: u32, offset: usize) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|base| base.checked_add_days(Days::new(offset as u64)))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Material requirement lines planned from 2024-01-20 onwards.
pub fn generate_mrp_entries(seed: u64, count: usize) -> Vec<MrpEntry> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let required_qty = rng.gen_range(100..1100);
            let available_qty = rng.gen_range(0..500);
            let shortfall = rng.gen_range(0..300_u32).saturating_sub(100);
            let lead_time_days = rng.gen_range(1..=14);
            let status = MrpStatus::from(pick(&mut rng, MrpStatus::KNOWN));

            MrpEntry {
                id: i as u32 + 1,
                material_code: format!("MAT-{:04}", i + 1),
                material_name: MATERIALS[i % MATERIALS.len()].to_owned(),
                required_qty,
                available_qty,
                shortfall,
                supplier: SUPPLIERS[i % SUPPLIERS.len()].to_owned(),
                lead_time_days,
                status,
                planned_date: date_after(2024, 1, 20, i),
            }
        })
        .collect()
}

/// Purchase orders created daily from 2024-01-01 onwards.
pub fn generate_purchase_orders(seed: u64, count: usize) -> Vec<PurchaseOrder> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let status = PoStatus::from(pick(&mut rng, PoStatus::KNOWN));
            // $1,000.00 up to $51,000.00
            let total_amount_cents = rng.gen_range(100_000..5_100_000);

            PurchaseOrder {
                id: i as u32 + 1,
                po_number: format!("PO-2024-{:03}", i + 1),
                vendor_name: VENDORS[i % VENDORS.len()].to_owned(),
                creation_date: date_after(2024, 1, 1, i),
                status,
                total_amount_cents,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rows() {
        assert_eq!(generate_mrp_entries(7, 30), generate_mrp_entries(7, 30));
        assert_eq!(
            generate_purchase_orders(7, 30),
            generate_purchase_orders(7, 30)
        );
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate_mrp_entries(1, 30), generate_mrp_entries(2, 30));
    }

    #[test]
    fn mrp_rows_stay_in_range() {
        let rows = generate_mrp_entries(DEFAULT_SEED, DEFAULT_ROW_COUNT);
        assert_eq!(rows.len(), DEFAULT_ROW_COUNT);
        assert_eq!(rows[0].material_code, "MAT-0001");
        assert_eq!(rows[0].planned_date, "2024-01-20");
        assert_eq!(rows[11].planned_date, "2024-01-31");
        assert_eq!(rows[12].planned_date, "2024-02-01");
        assert_eq!(rows[10].material_name, "Steel Sheets");

        for row in &rows {
            assert!((100..1100).contains(&row.required_qty));
            assert!(row.available_qty < 500);
            assert!(row.shortfall < 200);
            assert!((1..=14).contains(&row.lead_time_days));
            assert!(!matches!(row.status, MrpStatus::Unknown(_)));
        }
    }

    #[test]
    fn purchase_orders_stay_in_range() {
        let rows = generate_purchase_orders(DEFAULT_SEED, DEFAULT_ROW_COUNT);
        assert_eq!(rows[0].po_number, "PO-2024-001");
        assert_eq!(rows[29].po_number, "PO-2024-030");
        assert_eq!(rows[0].creation_date, "2024-01-01");
        assert_eq!(rows[3].vendor_name, "Premier Materials");

        for row in &rows {
            assert!((100_000..5_100_000).contains(&row.total_amount_cents));
            assert!(!matches!(row.status, PoStatus::Unknown(_)));
        }
    }
}
