//! Static role-to-resource allow-list.

use std::collections::{HashMap, HashSet};

use dormhub_entity::account::RoleName;

/// Resources each non-privileged role may touch without an explicit grant.
///
/// This is the last tier of permission resolution; the action is ignored.
#[derive(Debug, Clone)]
pub struct FallbackPolicies {
    /// Role → set of resources.
    policies: HashMap<RoleName, HashSet<&'static str>>,
}

impl FallbackPolicies {
    /// Creates the default allow-list.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        policies.insert(
            RoleName::Admin,
            [
                "dashboard",
                "rooms",
                "tenants",
                "maintenance",
                "announcements",
                "archives",
            ]
            .into_iter()
            .collect(),
        );

        policies.insert(
            RoleName::Accounting,
            ["dashboard", "accounting", "tenants"].into_iter().collect(),
        );

        policies.insert(RoleName::Tenant, ["dashboard"].into_iter().collect());

        Self { policies }
    }

    /// Returns the resources allowed for `role`.
    pub fn resources_for_role(&self, role: RoleName) -> HashSet<&'static str> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether `role` may access `resource` by default.
    pub fn allows(&self, role: RoleName, resource: &str) -> bool {
        self.policies
            .get(&role)
            .map(|resources| resources.contains(resource))
            .unwrap_or(false)
    }
}

impl Default for FallbackPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privileged_roles_have_no_fallback() {
        let policies = FallbackPolicies::new();
        assert!(policies.resources_for_role(RoleName::HeadAdmin).is_empty());
        assert!(policies.resources_for_role(RoleName::SuperAdmin).is_empty());
    }

    #[test]
    fn test_allow_list() {
        let policies = FallbackPolicies::new();
        assert!(policies.allows(RoleName::Admin, "archives"));
        assert!(!policies.allows(RoleName::Admin, "accounting"));
        assert!(policies.allows(RoleName::Accounting, "tenants"));
        assert!(!policies.allows(RoleName::Accounting, "rooms"));
        assert!(policies.allows(RoleName::Tenant, "dashboard"));
        assert!(!policies.allows(RoleName::Tenant, "tenants"));
    }
}
