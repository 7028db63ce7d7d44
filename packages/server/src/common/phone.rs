//! Phone number normalization.
//!
//! The canonical phone string is the sole identity key in the system.
//! It is only ever produced here, so every `CanonicalPhone` in flight
//! is guaranteed to be in `+<countrycode><digits>` form.

use serde::Serialize;
use std::fmt;

/// A normalized US phone number, e.g. `+15551234567`.
///
/// Constructed exclusively through [`CanonicalPhone::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    /// Normalize arbitrary phone input to canonical form.
    ///
    /// Strips every non-digit character, then:
    /// - 10 digits: prefix with the US country code (`+1`)
    /// - 11 digits starting with `1`: prefix with `+`
    /// - anything else has no canonical form
    ///
    /// Total and pure; `None` is a valid negative result, not an
    /// error. Idempotent on already-canonical input.
    pub fn normalize(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.len() {
            10 => Some(Self(format!("+1{digits}"))),
            11 if digits.starts_with('1') => Some(Self(format!("+{digits}"))),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
