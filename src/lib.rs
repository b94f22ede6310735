//! Slinky — a short-link service.
//!
//! Maps long URLs to 30-character random-token aliases and resolves them
//! back, with expiry metadata that can be extended after creation.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod token;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::{LinkError, Result};

use service::LinkService;
use store::sqlite::SqliteStore;
use token::SecureTokenGenerator;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub service: LinkService<SqliteStore, SecureTokenGenerator>,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Deployment health check — returns 200 OK, no body
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/api/shorten", post(handlers::api::shorten))
        .route("/api/update", post(handlers::api::update_target))
        .route("/api/update-expiry", post(handlers::api::update_expiry))
        // Token capture — the static /api/* routes above take priority
        .route("/api/:token", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
