//! Injectable session store.

use std::fmt;
use std::sync::{Arc, RwLock};

use super::model::Session;

/// Read and replace access to the current session.
///
/// Components receive the store as `Arc<dyn SessionStore>` instead of
/// reaching for ambient global state, so tests can substitute their own
/// implementation. Writers replace the session wholesale.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// The current snapshot.
    fn get_session(&self) -> Arc<Session>;

    /// Replace the whole session.
    fn replace_session(&self, session: Session);

    /// Reset to an anonymous session.
    fn clear_session(&self) {
        self.replace_session(Session::anonymous());
    }
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RwLock<Arc<Session>>,
}

impl MemorySessionStore {
    /// Create a store holding an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            current: RwLock::new(Arc::new(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self) -> Arc<Session> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    fn replace_session(&self, session: Session) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(session);
    }
}
