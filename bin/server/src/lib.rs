//! factdeck webhook server.
//!
//! Exposes the fact-telling agent to a hosting platform. The platform sends
//! one turn per request, including the conversation data it keeps for the
//! session, and gets back the reply plus the updated conversation data.

pub mod config;
pub mod error;
pub mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use factdeck_dialog::Dialog;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    /// Dialog answering every turn.
    pub dialog: Dialog<'static>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(dialog: Dialog<'static>) -> Self {
        Self { dialog }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/webhook", post(routes::webhook))
        .with_state(state)
}
