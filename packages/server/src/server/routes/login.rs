use axum::{
    extract::{Extension, Form},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Utc;
use serde::Deserialize;

use crate::server::app::AppState;
use crate::server::middleware::SESSION_COOKIE;
use crate::server::pages;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub phone: String,
}

/// Login form (GET)
pub async fn login_form_handler(Extension(state): Extension<AppState>) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return Html(pages::expired_page()).into_response();
    }
    Html(pages::login_page(None)).into_response()
}

/// Login attempt (POST)
///
/// Normalizes the submitted phone and matches it against the roster.
/// A miss is a form error, never a 4xx: the page re-renders with a
/// message and no session is created.
pub async fn login_submit_handler(
    Extension(state): Extension<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if state.gate.is_expired(Utc::now()) {
        return Html(pages::expired_page()).into_response();
    }

    let Some(attendee) = state.directory.authenticate(&form.phone) else {
        return Html(pages::login_page(Some("Phone number not found"))).into_response();
    };

    let token = state.sessions.create_session(attendee.phone.clone()).await;
    let cookie = Cookie::build((SESSION_COOKIE, token)).path("/").http_only(true);

    (jar.add(cookie), Redirect::to("/")).into_response()
}

/// Logout: clears the session unconditionally and returns to login
pub async fn logout_handler(Extension(state): Extension<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.delete_session(cookie.value()).await;
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    (jar, Redirect::to("/login")).into_response()
}
