//! In-memory `MpsStorage` for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use super::{MpsRow, MpsStorage, StorageError};

#[derive(Clone, Default)]
pub struct MockMpsStorage {
    pub is_connected: bool,
    /// `None` makes every query fail.
    rows: Option<Arc<Vec<MpsRow>>>,
    queries: Arc<AtomicUsize>,
}

impl MockMpsStorage {
    pub fn with_rows(rows: Vec<MpsRow>) -> Self {
        Self {
            is_connected: true,
            rows: Some(Arc::new(rows)),
            queries: Arc::default(),
        }
    }

    /// Connected, but every query fails.
    pub fn failing() -> Self {
        Self {
            is_connected: true,
            rows: None,
            queries: Arc::default(),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            is_connected: false,
            ..Self::failing()
        }
    }

    /// Number of `list_mps` calls so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// `count` rows with ids `1..=count`, cycling through the known statuses.
    pub fn sample_rows(count: usize) -> Vec<MpsRow> {
        const STATUSES: [&str; 3] = ["Planned", "In Progress", "Completed"];
        let base = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();

        (1..=count)
            .map(|i| MpsRow {
                id: i as i32,
                product_name: format!("Product {i}"),
                work_order_id: format!("WO-{:04}", 1000 + i),
                quantity: (i * 25) as i32,
                due_date: base
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap_or(base),
                status: STATUSES[i % STATUSES.len()].to_owned(),
            })
            .collect()
    }
}

impl MpsStorage for MockMpsStorage {
    async fn is_connected(&self) -> bool {
        self.is_connected
    }

    async fn list_mps(&self) -> Result<Vec<MpsRow>, StorageError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match &self.rows {
            Some(rows) => Ok(rows.as_ref().clone()),
            None => Err(StorageError::Unavailable(
                "MockMpsStorage: query failed".to_owned(),
            )),
        }
    }
}
