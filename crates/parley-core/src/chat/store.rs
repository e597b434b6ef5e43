//! In-memory session store.
//!
//! Sessions live for the process lifetime. Each one sits behind its own
//! `tokio::sync::Mutex` so mutations (and asks, which hold the lock across
//! the provider call) on a session are serialized while different
//! sessions proceed independently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use parley_types::chat::Session;

/// Shared handle to one live session.
pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<Uuid, SessionHandle>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a session and return its handle.
    pub fn insert(&self, session: Session) -> SessionHandle {
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&handle));
        handle
    }

    /// Handle for a session. The map entry is released before returning,
    /// so callers may hold the handle across awaits.
    pub fn get(&self, session_id: &Uuid) -> Option<SessionHandle> {
        self.sessions.get(session_id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, session_id: &Uuid) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn contains(&self, session_id: &Uuid) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
