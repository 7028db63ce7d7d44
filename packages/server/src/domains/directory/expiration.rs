//! Directory expiration gate.
//!
//! A single fixed UTC cutoff, compared against wall-clock time fresh
//! on every request. No grace period and no caching of the result.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy)]
pub struct ExpirationGate {
    expires_at: DateTime<Utc>,
}

impl ExpirationGate {
    pub fn new(expires_at: DateTime<Utc>) -> Self {
        Self { expires_at }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Strictly greater-than: the boundary instant itself is still
    /// within the directory's lifetime.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whole seconds until the cutoff; negative once expired.
    pub fn seconds_until_expiration(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds()
    }
}
