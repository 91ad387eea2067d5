use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::types::{SelectionContext, Token};

/// Everything stored for one browser session. Exclusively owned by that
/// session; the per-session lock in [`SessionStore`] serializes access.
#[derive(Debug, Default)]
pub struct SessionData {
    pub token: Option<Token>,
    pub selection: Option<SelectionContext>,
    pub login_state: Option<String>,
}

/// Shared handle to one session's data. Handlers lock it for short reads
/// and writes; the token manager holds the lock across a refresh so
/// concurrent requests from the same user serialize on it.
pub type SessionHandle = Arc<Mutex<SessionData>>;

/// In-memory key-value session backend, keyed by the opaque cookie id.
///
/// The outer lock only guards map lookups and is never held across an
/// await point that does I/O; per-session state has its own lock.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.lock().await.get(id).cloned()
    }

    pub async fn get_or_create(&self, id: &str) -> SessionHandle {
        self.sessions
            .lock()
            .await
            .entry(id.to_string())
            .or_default()
            .clone()
    }

    /// Discards the whole session, token included. Used by logout.
    pub async fn remove(&self, id: &str) {
        self.sessions.lock().await.remove(id);
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
