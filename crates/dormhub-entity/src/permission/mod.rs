//! Permission grants and the navigation catalog.

pub mod model;
pub mod navigation;

pub use model::Permission;
pub use navigation::{AdminNavigationPermission, NavigationItem};
