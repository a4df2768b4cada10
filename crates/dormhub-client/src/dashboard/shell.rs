//! Loading a dashboard and its widgets.

use futures::future::{join_all, try_join};
use serde::Serialize;
use tracing::{debug, info, warn};

use dormhub_auth::guard::Access;
use dormhub_core::error::AppError;
use dormhub_core::result::AppResult;
use dormhub_entity::notification;
use dormhub_entity::payment::{self, PaymentStatus};
use dormhub_entity::room::RoomStatus;
use dormhub_entity::tenant::TenantStatus;

use super::widget::{Stat, Widget};
use super::{DashboardKind, Section};
use crate::notice::ErrorNotice;
use crate::services::Services;

/// One section after loading: its widget, or the notice explaining why it
/// could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub section: Section,
    pub content: Result<Widget, ErrorNotice>,
}

impl Panel {
    pub fn is_loaded(&self) -> bool {
        self.content.is_ok()
    }
}

/// A loaded dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub kind: DashboardKind,
    pub panels: Vec<Panel>,
}

impl DashboardSnapshot {
    pub fn panel(&self, section: Section) -> Option<&Panel> {
        self.panels.iter().find(|p| p.section == section)
    }

    /// Sections whose widget failed to load.
    pub fn failures(&self) -> impl Iterator<Item = (&Section, &ErrorNotice)> {
        self.panels
            .iter()
            .filter_map(|p| p.content.as_ref().err().map(|e| (&p.section, e)))
    }
}

/// Composes dashboards from the domain services.
#[derive(Debug, Clone)]
pub struct Dashboard {
    services: Services,
}

impl Dashboard {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Load the dashboard for the session behind `access`.
    ///
    /// Widgets load concurrently; a failing widget becomes an error panel
    /// without failing the others. Fails only when the session has no
    /// dashboard at all.
    pub async fn load(&self, access: &Access) -> AppResult<DashboardSnapshot> {
        let kind = DashboardKind::for_session(access)
            .ok_or_else(|| AppError::authorization("No dashboard is available for this account"))?;

        let sections = kind.visible_sections(access);
        debug!(kind = %kind, sections = sections.len(), "Loading dashboard");

        let results = join_all(sections.iter().map(|s| self.load_section(kind, *s))).await;

        let panels: Vec<Panel> = sections
            .into_iter()
            .zip(results)
            .map(|(section, result)| Panel {
                section,
                content: result.map_err(|e| {
                    warn!(section = %section, error = %e, "Widget failed to load");
                    ErrorNotice::from(&e)
                }),
            })
            .collect();

        info!(
            kind = %kind,
            loaded = panels.iter().filter(|p| p.is_loaded()).count(),
            failed = panels.iter().filter(|p| !p.is_loaded()).count(),
            "Dashboard loaded"
        );

        Ok(DashboardSnapshot { kind, panels })
    }

    /// Fetch the widget of one section.
    pub async fn load_section(&self, kind: DashboardKind, section: Section) -> AppResult<Widget> {
        let s = &self.services;
        match section {
            Section::Overview => self.overview(kind).await.map(Widget::Overview),
            Section::Rooms => s.rooms.list().await.map(Widget::Rooms),
            Section::Maintenance => {
                let rooms = s.rooms.list().await?;
                Ok(Widget::Rooms(
                    rooms
                        .into_iter()
                        .filter(|r| r.status == RoomStatus::Maintenance)
                        .collect(),
                ))
            }
            Section::Tenants => s.tenants.list().await.map(Widget::Tenants),
            Section::Payments => s.payments.list().await.map(Widget::Payments),
            Section::Archives => s.archives.list().await.map(Widget::Archives),
            Section::AdminManagement => s.accounts.list().await.map(Widget::Accounts),
            Section::NavigationControl => s.navigation.items().await.map(Widget::Navigation),
            Section::Announcements | Section::Notifications => {
                s.notifications.list().await.map(Widget::Notifications)
            }
        }
    }

    async fn overview(&self, kind: DashboardKind) -> AppResult<Vec<Stat>> {
        let s = &self.services;
        match kind {
            DashboardKind::Admin => {
                let (rooms, tenants) = try_join(s.rooms.list(), s.tenants.list()).await?;
                let capacity: u32 = rooms.iter().map(|r| r.capacity).sum();
                let occupied: u32 = rooms.iter().map(|r| r.occupied).sum();
                Ok(vec![
                    Stat::new("Rooms", rooms.len()),
                    Stat::new(
                        "Available rooms",
                        rooms.iter().filter(|r| r.status == RoomStatus::Available).count(),
                    ),
                    Stat::new("Beds occupied", format!("{occupied}/{capacity}")),
                    Stat::new(
                        "Active tenants",
                        tenants.iter().filter(|t| t.status == TenantStatus::Active).count(),
                    ),
                ])
            }
            DashboardKind::Accounting => {
                let payments = s.payments.list().await?;
                let count = |status: PaymentStatus| {
                    payments.iter().filter(|p| p.status == status).count()
                };
                Ok(vec![
                    Stat::new("Collected", format!("{:.2}", payment::total_paid(&payments))),
                    Stat::new("Pending payments", count(PaymentStatus::Pending)),
                    Stat::new("Overdue payments", count(PaymentStatus::Overdue)),
                ])
            }
            DashboardKind::Tenant => {
                let (payments, notifications) =
                    try_join(s.payments.list(), s.notifications.list()).await?;
                Ok(vec![
                    Stat::new("Paid to date", format!("{:.2}", payment::total_paid(&payments))),
                    Stat::new(
                        "Outstanding payments",
                        payments
                            .iter()
                            .filter(|p| p.status != PaymentStatus::Paid)
                            .count(),
                    ),
                    Stat::new("Unread notifications", notification::unread(&notifications)),
                ])
            }
        }
    }
}
