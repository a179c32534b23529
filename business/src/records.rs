//! Row types shown by the list views.

use serde::{Deserialize, Serialize};

use crate::status::{MpsStatus, MrpStatus, PoStatus};

/// One Master Production Schedule work order, as served by `GET /api/mps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpsEntry {
    pub id: i64,
    pub product_name: String,
    pub work_order_id: String,
    pub quantity: i64,
    pub due_date: String,
    pub status: MpsStatus,
}

/// One material requirement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrpEntry {
    pub id: u32,
    pub material_code: String,
    pub material_name: String,
    pub required_qty: u32,
    pub available_qty: u32,
    pub shortfall: u32,
    pub supplier: String,
    pub lead_time_days: u32,
    pub status: MrpStatus,
    pub planned_date: String,
}

/// One purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: u32,
    pub po_number: String,
    pub vendor_name: String,
    pub creation_date: String,
    pub status: PoStatus,
    /// Amount in cents.
    pub total_amount_cents: u64,
}

impl PurchaseOrder {
    /// `$12,345.67`
    pub fn formatted_amount(&self) -> String {
        let dollars = self.total_amount_cents / 100;
        let cents = self.total_amount_cents % 100;
        format!("${}.{cents:02}", group_thousands(dollars))
    }
}

/// Totals shown in the MRP summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MrpSummary {
    pub total_required: u64,
    pub total_available: u64,
    pub total_shortfall: u64,
    pub shortage_items: usize,
}

impl MrpSummary {
    pub fn from_entries(entries: &[MrpEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, entry| {
            acc.total_required += u64::from(entry.required_qty);
            acc.total_available += u64::from(entry.available_qty);
            acc.total_shortfall += u64::from(entry.shortfall);
            if entry.status == MrpStatus::Shortage {
                acc.shortage_items += 1;
            }
            acc
        })
    }
}

/// Formats an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mps_entry_reads_camel_case_payload() {
        let payload = json!([{
            "id": 1,
            "productName": "Gear Assembly",
            "workOrderId": "WO-1001",
            "quantity": 250,
            "dueDate": "2024-02-01",
            "status": "Unknown"
        }]);

        let entries: Vec<MpsEntry> = serde_json::from_value(payload).expect("valid payload");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product_name, "Gear Assembly");
        assert_eq!(entries[0].status, MpsStatus::Unknown("Unknown".to_owned()));
    }

    #[test]
    fn mps_entry_writes_camel_case_keys() {
        let entry = MpsEntry {
            id: 7,
            product_name: "Valve".to_owned(),
            work_order_id: "WO-7".to_owned(),
            quantity: 3,
            due_date: "2024-03-01".to_owned(),
            status: MpsStatus::InProgress,
        };

        let value = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(value["workOrderId"], "WO-7");
        assert_eq!(value["status"], "In Progress");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn purchase_order_amount_formatting() {
        let order = PurchaseOrder {
            id: 1,
            po_number: "PO-2024-001".to_owned(),
            vendor_name: "Acme Corp".to_owned(),
            creation_date: "2024-01-01".to_owned(),
            status: PoStatus::Fulfilled,
            total_amount_cents: 1_234_505,
        };
        assert_eq!(order.formatted_amount(), "$12,345.05");
    }

    #[test]
    fn mrp_summary_totals() {
        let line = |required, available, shortfall, status: &str| MrpEntry {
            id: 1,
            material_code: "MAT-0001".to_owned(),
            material_name: "Steel Sheets".to_owned(),
            required_qty: required,
            available_qty: available,
            shortfall,
            supplier: "MetalCorp Ltd".to_owned(),
            lead_time_days: 3,
            status: MrpStatus::from(status),
            planned_date: "2024-01-20".to_owned(),
        };
        let entries = [
            line(100, 50, 0, "Required"),
            line(200, 10, 40, "Shortage"),
            line(300, 0, 90, "Shortage"),
        ];

        let summary = MrpSummary::from_entries(&entries);
        assert_eq!(summary.total_required, 600);
        assert_eq!(summary.total_available, 60);
        assert_eq!(summary.total_shortfall, 130);
        assert_eq!(summary.shortage_items, 2);
    }
}
