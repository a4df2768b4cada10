//! Named access predicates used by dashboards and commands.

use dormhub_entity::account::RoleName;

use crate::rbac::PermissionResolver;
use crate::session::SessionStore;

/// Sugar over [`PermissionResolver`] with fixed actions and role names.
#[derive(Debug, Clone)]
pub struct Access {
    resolver: PermissionResolver,
}

impl Access {
    /// Wrap an existing resolver.
    pub fn new(resolver: PermissionResolver) -> Self {
        Self { resolver }
    }

    /// Predicates over the store's current snapshot.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self::new(PermissionResolver::from_store(store))
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }

    pub fn can_view(&self, resource: &str) -> bool {
        self.resolver.has_permission(resource, "read")
    }

    pub fn can_edit(&self, resource: &str) -> bool {
        self.resolver.has_permission(resource, "write")
    }

    pub fn can_delete(&self, resource: &str) -> bool {
        self.resolver.has_permission(resource, "delete")
    }

    pub fn can_manage(&self, resource: &str) -> bool {
        self.resolver.has_permission(resource, "manage")
    }

    pub fn is_head_admin(&self) -> bool {
        self.resolver.has_role(RoleName::HeadAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.resolver.has_role(RoleName::SuperAdmin)
    }

    pub fn is_admin(&self) -> bool {
        self.resolver.has_role(RoleName::Admin)
    }

    pub fn is_accounting(&self) -> bool {
        self.resolver.has_role(RoleName::Accounting)
    }

    pub fn is_tenant(&self) -> bool {
        self.resolver.has_role(RoleName::Tenant)
    }

    /// Admin, SuperAdmin, or HeadAdmin.
    pub fn is_admin_or_higher(&self) -> bool {
        self.resolver
            .has_any_role(&[RoleName::Admin, RoleName::SuperAdmin, RoleName::HeadAdmin])
    }

    /// SuperAdmin or HeadAdmin.
    pub fn is_super_admin_or_higher(&self) -> bool {
        self.resolver
            .has_any_role(&[RoleName::SuperAdmin, RoleName::HeadAdmin])
    }
}
