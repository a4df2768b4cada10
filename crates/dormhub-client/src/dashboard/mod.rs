//! Per-role dashboard shells.
//!
//! A dashboard is a list of sections, each behind a [`Guard`]. Loading a
//! dashboard fetches the widget of every visible section concurrently.

pub mod shell;
pub mod widget;

use std::fmt;

use serde::{Deserialize, Serialize};

use dormhub_auth::guard::{Access, Guard};
use dormhub_auth::rbac::NAVIGATION;
use dormhub_entity::account::RoleName;

pub use shell::{Dashboard, DashboardSnapshot, Panel};
pub use widget::{Stat, Widget};

/// One dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Rooms,
    Tenants,
    Maintenance,
    Announcements,
    Archives,
    Payments,
    AdminManagement,
    NavigationControl,
    Notifications,
}

impl Section {
    /// Resource name the section is addressed by in grants.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Overview => "dashboard",
            Self::Rooms => "rooms",
            Self::Tenants => "tenants",
            Self::Maintenance => "maintenance",
            Self::Announcements => "announcements",
            Self::Archives => "archives",
            Self::Payments => "accounting",
            Self::AdminManagement => "admin_management",
            Self::NavigationControl => "navigation",
            Self::Notifications => "notifications",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Rooms => "Rooms",
            Self::Tenants => "Tenants",
            Self::Maintenance => "Maintenance",
            Self::Announcements => "Announcements",
            Self::Archives => "Archives",
            Self::Payments => "Payments",
            Self::AdminManagement => "Admin Management",
            Self::NavigationControl => "Navigation Control",
            Self::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Which dashboard a session lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    /// Admin, SuperAdmin and HeadAdmin.
    Admin,
    Accounting,
    Tenant,
}

const ADMIN_SECTIONS: &[Section] = &[
    Section::Overview,
    Section::Rooms,
    Section::Tenants,
    Section::Maintenance,
    Section::Announcements,
    Section::Archives,
    Section::AdminManagement,
    Section::NavigationControl,
];

const ACCOUNTING_SECTIONS: &[Section] = &[
    Section::Overview,
    Section::Payments,
    Section::Tenants,
    Section::Notifications,
];

const TENANT_SECTIONS: &[Section] = &[
    Section::Overview,
    Section::Payments,
    Section::Notifications,
];

impl DashboardKind {
    /// Pick the dashboard for the session behind `access`.
    ///
    /// Returns `None` for sessions holding none of the known roles.
    pub fn for_session(access: &Access) -> Option<Self> {
        if access.is_admin_or_higher() {
            Some(Self::Admin)
        } else if access.is_accounting() {
            Some(Self::Accounting)
        } else if access.is_tenant() {
            Some(Self::Tenant)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Admin => "Admin Dashboard",
            Self::Accounting => "Accounting Dashboard",
            Self::Tenant => "Tenant Dashboard",
        }
    }

    /// Every section this dashboard declares, visible or not.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Self::Admin => ADMIN_SECTIONS,
            Self::Accounting => ACCOUNTING_SECTIONS,
            Self::Tenant => TENANT_SECTIONS,
        }
    }

    /// The guard in front of `section` on this dashboard.
    pub fn guard(&self, section: Section) -> Guard {
        match (self, section) {
            (_, Section::Overview) => Guard::new().permission(section.slug(), "read"),
            (_, Section::Notifications) => Guard::new(),
            (Self::Admin, Section::AdminManagement | Section::NavigationControl) => Guard::new()
                .roles([RoleName::SuperAdmin, RoleName::HeadAdmin])
                .require_all(false),
            // Toggled per Admin account through navigation control.
            (Self::Admin, _) => Guard::new().permission(NAVIGATION, section.slug()),
            (Self::Tenant, Section::Payments) => Guard::new().role(RoleName::Tenant),
            (_, _) => Guard::new().permission(section.slug(), "read"),
        }
    }

    /// Sections whose guard passes for `access`, in declaration order.
    pub fn visible_sections(&self, access: &Access) -> Vec<Section> {
        self.sections()
            .iter()
            .copied()
            .filter(|s| self.guard(*s).allows(access.resolver()))
            .collect()
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
