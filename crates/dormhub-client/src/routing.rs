//! Hash-based client routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dormhub_core::error::AppError;

use crate::dashboard::DashboardKind;

/// A client-side route, addressed as `#/<path>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Admin,
    Accounting,
    Tenant,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Admin,
        Self::Accounting,
        Self::Tenant,
    ];

    /// Path without the hash, e.g. `/login`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
            Self::Accounting => "/accounting",
            Self::Tenant => "/tenant",
        }
    }

    /// Full hash fragment, e.g. `#/login`.
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Whether the route requires a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Landing route for a dashboard kind.
    pub fn home(kind: DashboardKind) -> Self {
        match kind {
            DashboardKind::Admin => Self::Admin,
            DashboardKind::Accounting => Self::Accounting,
            DashboardKind::Tenant => Self::Tenant,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    /// Accepts `#/login`, `/login`, or `login`. Query strings are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let path = path.split('?').next().unwrap_or_default();
        let path = path.trim_matches('/');

        Self::ALL
            .into_iter()
            .find(|r| r.path().trim_start_matches('/') == path)
            .ok_or_else(|| AppError::not_found(format!("Unknown route: '{s}'")))
    }
}

/// The redirect a static file server issues so deep links land in the
/// hash router. A query string moves into the hash with the path.
///
/// Root and static asset paths (anything whose last segment has an
/// extension) are served as-is and yield `None`.
pub fn hash_redirect(path: &str) -> Option<String> {
    let path = path.split('#').next().unwrap_or_default();
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };
    if path.is_empty() || path == "/" {
        return None;
    }

    let last = path.rsplit('/').next().unwrap_or_default();
    if last.contains('.') {
        return None;
    }

    let path = path.trim_start_matches('/');
    match query {
        Some(query) if !query.is_empty() => Some(format!("/#/{path}?{query}")),
        _ => Some(format!("/#/{path}")),
    }
}
