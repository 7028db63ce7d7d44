use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::domains::events::EventType;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::pages;
use crate::server::routes::user_agent;

/// Directory listing (protected)
///
/// Request order per the gating rules: expiration first, identity
/// second, then the view, then best-effort logging.
pub async fn directory_handler(
    Extension(state): Extension<AppState>,
    user: Option<Extension<AuthUser>>,
    headers: HeaderMap,
) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return Html(pages::expired_page()).into_response();
    }

    let Some(Extension(user)) = user else {
        return Redirect::to("/login").into_response();
    };

    let attendees = state.directory.list_by_name();
    let page = pages::directory_page(&attendees);

    if let Err(error) = state
        .events
        .record(
            EventType::DirectoryViewed,
            Some(&user.phone),
            user_agent(&headers),
            None,
        )
        .await
    {
        tracing::warn!(%error, "failed to record directory view");
    }

    Html(page).into_response()
}
