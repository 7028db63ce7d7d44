use crate::common::CanonicalPhone;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token (random UUID)
pub type SessionToken = String;

/// In-memory session store
///
/// Maps opaque cookie tokens to the canonical phone established at
/// login. Holding a phone here is not an identity by itself: readers
/// re-validate against the directory, so a session outlives a roster
/// change only if its attendee does.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, CanonicalPhone>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, phone: CanonicalPhone) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), phone);
        token
    }

    /// Phone associated with a token, if the session exists
    pub async fn phone_for(&self, token: &str) -> Option<CanonicalPhone> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Delete a session (logout). Unconditional; deleting an unknown
    /// token is a no-op.
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
