//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::domains::directory::{AttendeeDirectory, ExpirationGate};
use crate::domains::events::EventLog;
use crate::server::auth::SessionStore;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    copy_handler, directory_handler, expiration_handler, filter_handler, health_handler,
    login_form_handler, login_submit_handler, logout_handler, phone_click_handler,
};

/// Shared application state
///
/// Everything here is either immutable (directory, gate) or
/// internally synchronized (sessions, event log pool), so the state
/// clones cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<AttendeeDirectory>,
    pub gate: ExpirationGate,
    pub sessions: Arc<SessionStore>,
    pub events: EventLog,
}

impl AppState {
    pub fn new(directory: AttendeeDirectory, gate: ExpirationGate, events: EventLog) -> Self {
        Self {
            directory: Arc::new(directory),
            gate,
            sessions: Arc::new(SessionStore::new()),
            events,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(directory_handler))
        .route("/login", get(login_form_handler).post(login_submit_handler))
        .route("/logout", get(logout_handler))
        .route("/copy", post(copy_handler))
        .route("/log-phone-click", post(phone_click_handler))
        .route("/log-filter", post(filter_handler))
        .route("/health", get(health_handler))
        .route("/api/expiration", get(expiration_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth_middleware,
        ))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
