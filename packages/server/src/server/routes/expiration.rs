use axum::{extract::Extension, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ExpirationStatus {
    pub expired: bool,
    pub seconds_until_expiration: i64,
    pub expiration_date: String,
}

/// GET /api/expiration - expiration flag and countdown
///
/// Evaluated fresh against the wall clock on every call; clients poll
/// this for their countdown display.
pub async fn expiration_handler(
    Extension(state): Extension<AppState>,
) -> Json<ExpirationStatus> {
    let now = Utc::now();
    Json(ExpirationStatus {
        expired: state.gate.is_expired(now),
        seconds_until_expiration: state.gate.seconds_until_expiration(now),
        expiration_date: state
            .gate
            .expires_at()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
