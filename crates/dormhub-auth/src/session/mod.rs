//! Session snapshot, session store, and credential storage.

pub mod model;
pub mod storage;
pub mod store;

pub use model::Session;
pub use storage::{CredentialStorage, MemoryCredentialStorage, StorageKey};
pub use store::{MemorySessionStore, SessionStore};
