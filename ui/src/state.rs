use std::sync::Arc;

use erp_business::fixtures::{
    DEFAULT_ROW_COUNT, DEFAULT_SEED, generate_mrp_entries, generate_purchase_orders,
};
use erp_business::{
    BusinessConfig, EhttpFetcher, FetchService, FixtureSource, HttpMpsSource, MPS_PAGE_SIZE,
    MRP_PAGE_SIZE, MpsEntry, MrpEntry, PROCUREMENT_PAGE_SIZE, PurchaseOrder, Route, SidebarState,
    TablePage,
};

use crate::pages::dashboard::DashboardStats;

/// The data-backed view currently on screen, if any.
///
/// Only one exists at a time; navigating away drops it along with its rows.
#[derive(Debug, Default)]
pub enum ActiveView {
    #[default]
    None,
    /// Dashboard, holding the schedule it counts.
    Dashboard(TablePage<MpsEntry>),
    Mps(TablePage<MpsEntry>),
    Mrp(TablePage<MrpEntry>),
    Procurement(TablePage<PurchaseOrder>),
}

impl ActiveView {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Dashboard => Self::Dashboard(TablePage::new(MPS_PAGE_SIZE)),
            Route::MasterProductionSchedule => Self::Mps(TablePage::new(MPS_PAGE_SIZE)),
            Route::MaterialRequirementPlanning => Self::Mrp(TablePage::new(MRP_PAGE_SIZE)),
            Route::Procurement => Self::Procurement(TablePage::new(PROCUREMENT_PAGE_SIZE)),
            _ => Self::None,
        }
    }
}

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    pub sidebar: SidebarState,
    pub view: ActiveView,
    /// Seed for the views backed by generated rows.
    pub fixture_seed: u64,
    pub dashboard: DashboardStats,
    fetcher: Arc<dyn FetchService>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_fetcher(config, Arc::new(EhttpFetcher))
    }

    pub fn with_fetcher(config: BusinessConfig, fetcher: Arc<dyn FetchService>) -> Self {
        Self {
            config,
            sidebar: SidebarState::default(),
            view: ActiveView::for_route(Route::Dashboard),
            fixture_seed: DEFAULT_SEED,
            dashboard: DashboardStats::from_seed(DEFAULT_SEED),
            fetcher,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    pub fn route(&self) -> Route {
        self.sidebar.current
    }

    /// Switches to `route`, replacing the active view with a fresh one.
    pub fn navigate(&mut self, route: Route) {
        if self.sidebar.current == route && !matches!(self.view, ActiveView::None) {
            return;
        }
        log::debug!("Navigating to {}", route.path());
        self.sidebar.navigate(route);
        self.view = ActiveView::for_route(route);
    }

    /// Starts the active view's source if it has not been started yet.
    ///
    /// `on_ready` is called from the source's thread once rows are queued.
    pub fn mount_active_view(&mut self, on_ready: impl FnOnce() + Send + 'static) {
        let seed = self.fixture_seed;
        match &mut self.view {
            ActiveView::None => {}
            ActiveView::Dashboard(page) | ActiveView::Mps(page) if !page.is_mounted() => {
                let source = HttpMpsSource::new(self.fetcher.clone(), self.config.mps_url());
                page.mount(&source, on_ready);
            }
            ActiveView::Mrp(page) if !page.is_mounted() => {
                let source =
                    FixtureSource::new(move || generate_mrp_entries(seed, DEFAULT_ROW_COUNT));
                page.mount(&source, on_ready);
            }
            ActiveView::Procurement(page) if !page.is_mounted() => {
                let source =
                    FixtureSource::new(move || generate_purchase_orders(seed, DEFAULT_ROW_COUNT));
                page.mount(&source, on_ready);
            }
            ActiveView::Dashboard(_)
            | ActiveView::Mps(_)
            | ActiveView::Mrp(_)
            | ActiveView::Procurement(_) => {}
        }
    }

    /// Drains a finished load into the active view.
    pub fn poll_active_view(&mut self) -> bool {
        match &mut self.view {
            ActiveView::None => false,
            ActiveView::Dashboard(page) | ActiveView::Mps(page) => page.poll(),
            ActiveView::Mrp(page) => page.poll(),
            ActiveView::Procurement(page) => page.poll(),
        }
    }
}
