//! Volatile credential storage.
//!
//! Mirrors the tab-scoped storage of a browser client: three well-known
//! keys, living only as long as the process.

use std::fmt;

use dashmap::DashMap;

/// The keys the client persists credentials under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Bearer token.
    Token,
    /// JSON-encoded account of the logged-in user.
    User,
    /// Refresh token.
    RefreshToken,
}

impl StorageKey {
    /// Every key, for bulk clearing.
    pub const ALL: [StorageKey; 3] = [Self::Token, Self::User, Self::RefreshToken];

    /// The storage key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::User => "user",
            Self::RefreshToken => "refreshToken",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key-value storage for credentials.
pub trait CredentialStorage: Send + Sync + fmt::Debug {
    /// Read a value.
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Write a value.
    fn set(&self, key: StorageKey, value: String);

    /// Remove a value.
    fn remove(&self, key: StorageKey);

    /// Remove every credential. Safe to call repeatedly.
    fn clear(&self) {
        for key in StorageKey::ALL {
            self.remove(key);
        }
    }

    /// Shortcut for the bearer token.
    fn token(&self) -> Option<String> {
        self.get(StorageKey::Token)
    }
}

/// In-memory credential storage.
#[derive(Debug, Default)]
pub struct MemoryCredentialStorage {
    entries: DashMap<StorageKey, String>,
}

impl MemoryCredentialStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialStorage for MemoryCredentialStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.get(&key).map(|v| v.value().clone())
    }

    fn set(&self, key: StorageKey, value: String) {
        self.entries.insert(key, value);
    }

    fn remove(&self, key: StorageKey) {
        self.entries.remove(&key);
    }
}
