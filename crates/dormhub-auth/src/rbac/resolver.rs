//! Permission resolution over a session snapshot.

use std::sync::{Arc, LazyLock};

use dormhub_core::types::AccountId;
use dormhub_entity::account::RoleName;

use super::policies::FallbackPolicies;
use super::{ADMIN_MANAGEMENT, NAVIGATION};
use crate::session::{Session, SessionStore};

static DEFAULT_POLICIES: LazyLock<Arc<FallbackPolicies>> =
    LazyLock::new(|| Arc::new(FallbackPolicies::new()));

/// Answers access questions for one session snapshot.
///
/// Every check is pure and synchronous. Missing data (no permission set
/// loaded, no roles) resolves to deny; nothing here returns an error.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    /// The snapshot being evaluated.
    session: Arc<Session>,
    /// Role fallback allow-list.
    policies: Arc<FallbackPolicies>,
}

impl PermissionResolver {
    /// Creates a resolver with the default fallback allow-list.
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            policies: Arc::clone(&DEFAULT_POLICIES),
        }
    }

    /// Creates a resolver with a custom allow-list.
    pub fn with_policies(session: Arc<Session>, policies: Arc<FallbackPolicies>) -> Self {
        Self { session, policies }
    }

    /// Creates a resolver over the store's current snapshot.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self::new(store.get_session())
    }

    /// The snapshot being evaluated.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Decides whether `action` on `resource` is allowed.
    ///
    /// Tiers, in order:
    /// 1. no permission set loaded → deny
    /// 2. exact grant → allow
    /// 3. `HeadAdmin` → allow
    /// 4. `SuperAdmin` → allow unless `resource` is `admin_management`
    /// 5. `navigation` grant → allow
    /// 6. role fallback allow-list (action ignored)
    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        let Some(permissions) = self.session.permissions.as_ref() else {
            return false;
        };

        if permissions.iter().any(|p| p.matches(resource, action)) {
            return true;
        }

        if self.has_role(RoleName::HeadAdmin) {
            return true;
        }

        if self.has_role(RoleName::SuperAdmin) && resource != ADMIN_MANAGEMENT {
            return true;
        }

        // Same condition as tier 2; kept as its own branch so navigation
        // checks have an explicit home.
        if resource == NAVIGATION
            && permissions
                .iter()
                .any(|p| p.resource == NAVIGATION && p.action == action)
        {
            return true;
        }

        self.session
            .roles
            .iter()
            .filter_map(|role| role.known())
            .any(|role| self.policies.allows(role, resource))
    }

    /// Whether the user holds a role named exactly `name`.
    pub fn has_role(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.session.roles.iter().any(|role| role.name == name)
    }

    /// Whether the user holds at least one of `names`.
    pub fn has_any_role<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|name| self.has_role(name))
    }

    /// Whether the user may manage the account `_target`.
    ///
    /// HeadAdmin and SuperAdmin may manage any account; the target's own
    /// role is not consulted.
    pub fn can_manage_account(&self, _target: AccountId) -> bool {
        self.has_role(RoleName::HeadAdmin) || self.has_role(RoleName::SuperAdmin)
    }
}
