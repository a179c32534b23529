//! Navigation between the ERP views.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    #[default]
    Dashboard,
    Production,
    MasterProductionSchedule,
    MaterialRequirementPlanning,
    Procurement,
    OrderManagement,
    Inventory,
    Logistics,
    Quality,
    NotFound,
}

impl Route {
    /// Top-level sidebar entries, in display order.
    pub const SECTIONS: [Self; 7] = [
        Self::Dashboard,
        Self::Production,
        Self::Procurement,
        Self::OrderManagement,
        Self::Inventory,
        Self::Logistics,
        Self::Quality,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Production => "/production",
            Self::MasterProductionSchedule => "/production/mps",
            Self::MaterialRequirementPlanning => "/production/mrp",
            Self::Procurement => "/procurement",
            Self::OrderManagement => "/order-management",
            Self::Inventory => "/inventory",
            Self::Logistics => "/logistics",
            Self::Quality => "/quality",
            Self::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Production => "Production",
            Self::MasterProductionSchedule => "Master Production Schedule",
            Self::MaterialRequirementPlanning => "Material Requirement Planning",
            Self::Procurement => "Procurement",
            Self::OrderManagement => "Order Management",
            Self::Inventory => "Inventory",
            Self::Logistics => "Logistics",
            Self::Quality => "Quality",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Sub-entries shown under a sidebar section.
    pub fn children(self) -> &'static [Self] {
        match self {
            Self::Production => &[
                Self::MasterProductionSchedule,
                Self::MaterialRequirementPlanning,
            ],
            _ => &[],
        }
    }

    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        [
            Self::Dashboard,
            Self::Production,
            Self::MasterProductionSchedule,
            Self::MaterialRequirementPlanning,
            Self::Procurement,
            Self::OrderManagement,
            Self::Inventory,
            Self::Logistics,
            Self::Quality,
        ]
        .into_iter()
        .find(|route| route.path() == path)
        .unwrap_or(Self::NotFound)
    }
}

/// Sidebar state: the active route and the expanded sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub current: Route,
    expanded: BTreeSet<Route>,
}

impl SidebarState {
    pub fn navigate(&mut self, route: Route) {
        self.current = route;
    }

    pub fn toggle(&mut self, section: Route) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn expand(&mut self, section: Route) {
        self.expanded.insert(section);
    }

    pub fn is_expanded(&self, section: Route) -> bool {
        self.expanded.contains(&section)
    }

    /// Dashboard is active only on an exact match; other sections also
    /// count as active for any route nested under their path.
    pub fn is_active(&self, section: Route) -> bool {
        if section == Route::Dashboard {
            return self.current == Route::Dashboard;
        }
        self.current.path().starts_with(section.path())
    }

    /// Sub-entries are active only on an exact match.
    pub fn is_sub_item_active(&self, route: Route) -> bool {
        self.current == route
    }
}
