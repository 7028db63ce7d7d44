// HTTP routes
pub mod directory;
pub mod events;
pub mod expiration;
pub mod health;
pub mod login;

pub use directory::*;
pub use events::*;
pub use expiration::*;
pub use health::*;
pub use login::*;

use axum::http::{header::USER_AGENT, HeaderMap};

/// Client user-agent string, empty when absent or non-UTF8.
pub(crate) fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
