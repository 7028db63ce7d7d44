//! AJAX-style logging endpoints.
//!
//! All three are protected: an expired directory answers 410, a
//! missing session 401 JSON (these are fetch targets, not pages, so
//! no redirect). The event write itself is best-effort and never
//! changes the acknowledgment.

use axum::{
    extract::{Extension, Form},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domains::events::EventType;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::routes::user_agent;

#[derive(Serialize)]
pub struct Ack {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn expired_response() -> Response {
    (
        StatusCode::GONE,
        Json(ErrorBody {
            error: "Directory has expired".to_string(),
        }),
    )
        .into_response()
}

fn unauthenticated_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: "Not logged in".to_string(),
        }),
    )
        .into_response()
}

async fn record_and_ack(
    state: &AppState,
    user: &AuthUser,
    headers: &HeaderMap,
    event: EventType,
    metadata: Option<Value>,
) -> Response {
    if let Err(error) = state
        .events
        .record(event, Some(&user.phone), user_agent(headers), metadata)
        .await
    {
        tracing::warn!(%error, event = event.as_str(), "failed to record event");
    }
    Json(Ack { success: true }).into_response()
}

/// POST /copy - a contact was copied to the clipboard
pub async fn copy_handler(
    Extension(state): Extension<AppState>,
    user: Option<Extension<AuthUser>>,
    headers: HeaderMap,
) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return expired_response();
    }
    let Some(Extension(user)) = user else {
        return unauthenticated_response();
    };
    record_and_ack(&state, &user, &headers, EventType::PhoneCopied, None).await
}

#[derive(Deserialize)]
pub struct PhoneClickForm {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
}

/// POST /log-phone-click - a phone link was tapped
pub async fn phone_click_handler(
    Extension(state): Extension<AppState>,
    user: Option<Extension<AuthUser>>,
    headers: HeaderMap,
    Form(form): Form<PhoneClickForm>,
) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return expired_response();
    }
    let Some(Extension(user)) = user else {
        return unauthenticated_response();
    };
    let metadata = json!({ "phone": form.phone, "name": form.name });
    record_and_ack(
        &state,
        &user,
        &headers,
        EventType::PhoneClicked,
        Some(metadata),
    )
    .await
}

#[derive(Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub interest: String,
}

/// POST /log-filter - the interest filter was applied
pub async fn filter_handler(
    Extension(state): Extension<AppState>,
    user: Option<Extension<AuthUser>>,
    headers: HeaderMap,
    Form(form): Form<FilterForm>,
) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return expired_response();
    }
    let Some(Extension(user)) = user else {
        return unauthenticated_response();
    };
    let metadata = json!({ "interest": form.interest });
    record_and_ack(
        &state,
        &user,
        &headers,
        EventType::FilterApplied,
        Some(metadata),
    )
    .await
}
