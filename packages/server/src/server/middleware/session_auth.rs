use crate::common::CanonicalPhone;
use crate::server::app::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

/// Name of the opaque session cookie.
pub const SESSION_COOKIE: &str = "directory_session";

/// Authenticated attendee identity resolved from the session cookie
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub phone: CanonicalPhone,
}

/// Middleware to resolve the session cookie into an attendee identity
///
/// This middleware:
/// 1. Reads the session token from the cookie
/// 2. Looks up the token in the SessionStore
/// 3. Re-validates the stored phone against the directory
/// 4. Stores AuthUser in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts
/// identity. Handlers decide whether to redirect or return 401.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user) = resolve_auth_user(&state, &jar).await {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

async fn resolve_auth_user(state: &AppState, jar: &CookieJar) -> Option<AuthUser> {
    let token = jar.get(SESSION_COOKIE)?;
    let phone = state.sessions.phone_for(token.value()).await?;

    // A session is only an identity while its phone still resolves to
    // a roster entry; the roster can change across deployments.
    state.directory.lookup(&phone)?;

    Some(AuthUser { phone })
}
