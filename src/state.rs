//! Implements the struct that holds the state shared by route handlers.

use crate::api::ApiClient;

/// The state of the web frontend.
///
/// Handlers that need only part of the state declare their own sub-state and
/// extract it with `FromRef`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the external budget API.
    pub api: ApiClient,
}

impl AppState {
    /// Create the app state for a backend reachable at `backend_url`.
    pub fn new(backend_url: &str) -> Self {
        Self {
            api: ApiClient::new(backend_url),
        }
    }
}
