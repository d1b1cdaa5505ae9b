//! Shared application state for all routes.

use crate::service::ComplaintStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected so tests can substitute their own store.
    pub store: Arc<dyn ComplaintStore>,
}

impl AppState {
    pub fn new<S: ComplaintStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
