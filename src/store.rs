//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the state shared across screens.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::session::Session;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current auth session
    pub session: Session,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::load(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Begin a session with the token returned by login
pub fn store_start_session(store: &AppStore, token: String) {
    store.session().write().start(token);
}

/// End the session and drop the persisted token
pub fn store_end_session(store: &AppStore) {
    store.session().write().clear();
}
