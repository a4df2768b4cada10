//! # dormhub-auth
//!
//! Client-side authentication and authorization for DormHub.
//!
//! ## Modules
//!
//! - `session`: Session snapshot, injectable session store, credential storage
//! - `rbac`: Permission resolver and the static role fallback allow-list
//! - `guard`: Render-time gates and named access predicates
//! - `authenticator`: Login, logout, refresh, and boot-time token validation
//! - `epoch`: Request epochs for discarding superseded async results

pub mod authenticator;
pub mod epoch;
pub mod guard;
pub mod rbac;
pub mod session;

pub use authenticator::{AuthBackend, Authenticator, FailureKind, LoginFailure, LoginOutcome};
pub use epoch::{Epoch, EpochCounter};
pub use guard::{Access, Guard};
pub use rbac::{FallbackPolicies, PermissionResolver};
pub use session::{
    CredentialStorage, MemoryCredentialStorage, MemorySessionStore, Session, SessionStore,
    StorageKey,
};
