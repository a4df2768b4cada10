//! Role-based access control for the client.

pub mod policies;
pub mod resolver;

pub use policies::FallbackPolicies;
pub use resolver::PermissionResolver;

/// Resource reserved for HeadAdmin; SuperAdmin does not bypass it.
pub const ADMIN_MANAGEMENT: &str = "admin_management";

/// Resource whose actions are dashboard section slugs.
pub const NAVIGATION: &str = "navigation";
