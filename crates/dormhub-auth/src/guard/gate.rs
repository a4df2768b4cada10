//! Declarative conditional rendering.

use crate::rbac::PermissionResolver;

/// A gate that yields its children only when every configured check passes.
///
/// Checks run in a fixed order and stop at the first failure: single role,
/// then role list (all or any), then resource/action. A guard with no checks
/// always passes. An empty role list counts as "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guard {
    role: Option<String>,
    roles: Vec<String>,
    require_all: bool,
    permission: Option<(String, String)>,
}

impl Guard {
    /// A guard with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a single role.
    pub fn role(mut self, role: impl AsRef<str>) -> Self {
        self.role = Some(role.as_ref().to_string());
        self
    }

    /// Require any of (or, with [`Guard::require_all`], all of) `roles`.
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roles = roles.into_iter().map(|r| r.as_ref().to_string()).collect();
        self
    }

    /// Whether every listed role is required rather than any one of them.
    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    /// Require `action` on `resource`.
    pub fn permission(mut self, resource: impl Into<String>, action: impl Into<String>) -> Self {
        self.permission = Some((resource.into(), action.into()));
        self
    }

    /// Evaluate the checks against `resolver`.
    pub fn allows(&self, resolver: &PermissionResolver) -> bool {
        if let Some(role) = &self.role {
            if !resolver.has_role(role) {
                return false;
            }
        }

        if !self.roles.is_empty() {
            let passed = if self.require_all {
                self.roles.iter().all(|r| resolver.has_role(r))
            } else {
                resolver.has_any_role(&self.roles)
            };
            if !passed {
                return false;
            }
        }

        if let Some((resource, action)) = &self.permission {
            if !resolver.has_permission(resource, action) {
                return false;
            }
        }

        true
    }

    /// Produce the children when allowed, otherwise nothing.
    pub fn render<T>(&self, resolver: &PermissionResolver, children: impl FnOnce() -> T) -> Option<T> {
        self.allows(resolver).then(children)
    }

    /// Produce the children when allowed, otherwise the fallback.
    pub fn render_or<T>(
        &self,
        resolver: &PermissionResolver,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.allows(resolver) {
            children()
        } else {
            fallback()
        }
    }
}
