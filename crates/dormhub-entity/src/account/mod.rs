//! Account domain entities.

pub mod model;
pub mod role;
pub mod status;

pub use model::{Account, AuthenticatedAccount, Profile, RegisterRequest};
pub use role::{Role, RoleName};
pub use status::AccountStatus;
