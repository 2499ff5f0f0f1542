//! Auth Session
//!
//! Explicit session object with a defined lifecycle: started at login,
//! cleared at logout, restored from localStorage on startup. Authenticated
//! API calls take the session as a parameter instead of looking the token
//! up ambiently.

use web_sys::Storage;

const TOKEN_KEY: &str = "token";

/// Authenticated session holding the bearer token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Restore the persisted session, if any
    pub fn load() -> Self {
        let token = storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());
        Self { token }
    }

    /// Begin a session with a freshly issued token and persist it
    pub fn start(&mut self, token: String) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
        }
        self.token = Some(token);
    }

    /// End the session and drop the persisted token
    pub fn clear(&mut self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.token = None;
    }

    /// Token for the `Authorization: Bearer` header
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// Best-effort: a missing or denied Storage degrades to an in-memory session
fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
