//! The session snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dormhub_entity::account::{Account, Role};
use dormhub_entity::permission::Permission;

/// The authenticated identity of the current process and its grants.
///
/// A `Session` is an immutable snapshot: stores hand out `Arc<Session>` and
/// replace the whole value on login or refresh, never individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in account.
    pub user: Option<Account>,
    /// Whether the token behind this session has been accepted by the backend.
    pub is_authenticated: bool,
    /// Direct grants. `None` until a permission set has been loaded.
    pub permissions: Option<BTreeSet<Permission>>,
    /// Roles held by the user.
    pub roles: Vec<Role>,
}

impl Session {
    /// A logged-out session with nothing loaded.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session for `user` with the given grants.
    ///
    /// Roles are derived from the account; duplicate grants collapse.
    pub fn authenticated(user: Account, permissions: impl IntoIterator<Item = Permission>) -> Self {
        let roles = user.roles();
        Self {
            user: Some(user),
            is_authenticated: true,
            permissions: Some(permissions.into_iter().collect()),
            roles,
        }
    }

    /// A session carrying only grants and roles, without an account.
    pub fn with_grants(
        permissions: Option<Vec<Permission>>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            permissions: permissions.map(|p| p.into_iter().collect()),
            roles: roles.into_iter().collect(),
        }
    }

    /// Number of distinct grants; zero when nothing is loaded.
    pub fn permission_count(&self) -> usize {
        self.permissions.as_ref().map_or(0, BTreeSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dormhub_core::types::AccountId;
    use dormhub_entity::account::AccountStatus;

    #[test]
    fn test_authenticated_dedups_grants_and_derives_roles() {
        let account = Account {
            id: AccountId(9),
            first_name: "Mara".into(),
            last_name: "Diaz".into(),
            email: "mara@dorm.test".into(),
            role: "Accounting".into(),
            status: AccountStatus::Active,
            created_at: None,
        };
        let session = Session::authenticated(
            account,
            vec![
                Permission::new("accounting", "read"),
                Permission::new("accounting", "read"),
            ],
        );
        assert!(session.is_authenticated);
        assert_eq!(session.permission_count(), 1);
        assert_eq!(session.roles, vec![Role::new("Accounting")]);
    }

    #[test]
    fn test_anonymous_has_nothing_loaded() {
        let session = Session::anonymous();
        assert!(session.permissions.is_none());
        assert!(session.roles.is_empty());
        assert!(!session.is_authenticated);
    }
}
