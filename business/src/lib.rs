//! Core of the manufacturing ERP module: row types, pagination, status
//! badges, data sources and per-view page state. Nothing here depends on the
//! UI toolkit.

mod config;
mod fetch_service;
pub mod fixtures;
pub mod pager;
mod records;
mod route;
mod source;
mod status;
mod table_page;

use std::num::NonZeroUsize;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use pager::{Page, paginate};
pub use records::{MpsEntry, MrpEntry, MrpSummary, PurchaseOrder, group_thousands};
pub use route::{Route, SidebarState};
pub use source::{FetchError, FixtureSource, HttpMpsSource, OnRows, RowSource, fetch_mps_entries};
pub use status::{BadgeVariant, MpsStatus, MrpStatus, PoStatus, StatusVariant, variant_counts};
pub use table_page::{TableBody, TablePage};

/// Rows per page on the Master Production Schedule view.
pub const MPS_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).expect("non-zero");
/// Rows per page on the Material Requirement Planning view.
pub const MRP_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).expect("non-zero");
/// Rows per page on the Procurement view.
pub const PROCUREMENT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).expect("non-zero");
