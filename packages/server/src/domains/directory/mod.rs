//! The attendee roster: a static, immutable directory keyed by
//! canonical phone number, built once at startup and shared read-only
//! across requests.

pub mod expiration;
pub mod roster;

pub use expiration::ExpirationGate;
pub use roster::{builtin_roster, interest_categories, RosterEntry, INTEREST_CATEGORIES};

use crate::common::CanonicalPhone;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors detected while building the directory from configured
/// roster entries. Any of these aborts startup.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("roster phone {0:?} has no canonical form")]
    UnnormalizablePhone(String),

    #[error("duplicate roster phone {0}")]
    DuplicatePhone(CanonicalPhone),
}

/// A single attendee record. Immutable after directory construction.
#[derive(Debug, Clone)]
pub struct Attendee {
    pub phone: CanonicalPhone,
    /// The phone string as configured, kept for display.
    pub display_phone: String,
    pub name: String,
    /// Interest name -> whether the attendee is interested.
    pub interests: BTreeMap<String, bool>,
}

/// Static in-memory roster, lookup keyed by canonical phone.
pub struct AttendeeDirectory {
    attendees: Vec<Attendee>,
    by_phone: HashMap<CanonicalPhone, usize>,
}

impl AttendeeDirectory {
    /// Build the directory, failing fast on any entry whose phone has
    /// no canonical form and on duplicate canonical phones. A silently
    /// dropped entry would leave that attendee unable to log in with
    /// no signal, so bad roster data is a startup error.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Result<Self, DirectoryError> {
        let mut attendees = Vec::with_capacity(entries.len());
        let mut by_phone = HashMap::with_capacity(entries.len());

        for entry in entries {
            let phone = CanonicalPhone::normalize(&entry.phone)
                .ok_or_else(|| DirectoryError::UnnormalizablePhone(entry.phone.clone()))?;
            if by_phone.contains_key(&phone) {
                return Err(DirectoryError::DuplicatePhone(phone));
            }
            by_phone.insert(phone.clone(), attendees.len());
            attendees.push(Attendee {
                phone,
                display_phone: entry.phone,
                name: entry.name,
                interests: entry.interests,
            });
        }

        Ok(Self { attendees, by_phone })
    }

    pub fn lookup(&self, phone: &CanonicalPhone) -> Option<&Attendee> {
        self.by_phone.get(phone).map(|&i| &self.attendees[i])
    }

    /// Normalize raw login input and match it against the roster.
    /// Every stored key is canonical (construction fails otherwise),
    /// so an index lookup matches exactly the entries a re-normalizing
    /// scan would.
    pub fn authenticate(&self, raw_phone: &str) -> Option<&Attendee> {
        let phone = CanonicalPhone::normalize(raw_phone)?;
        self.lookup(&phone)
    }

    /// All attendees sorted case-insensitively by name, ascending.
    /// Ties keep configured order (stable sort).
    pub fn list_by_name(&self) -> Vec<&Attendee> {
        let mut listed: Vec<&Attendee> = self.attendees.iter().collect();
        listed.sort_by_key(|a| a.name.to_lowercase());
        listed
    }

    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(phone: &str, name: &str) -> RosterEntry {
        RosterEntry {
            phone: phone.to_string(),
            name: name.to_string(),
            interests: BTreeMap::new(),
        }
    }

    #[test]
    fn builds_and_looks_up_by_canonical_phone() {
        let directory =
            AttendeeDirectory::from_entries(vec![entry("555-123-4567", "Ada")]).unwrap();
        let phone = CanonicalPhone::normalize("(555) 123-4567").unwrap();
        assert_eq!(directory.lookup(&phone).unwrap().name, "Ada");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn authenticate_normalizes_raw_input() {
        let directory =
            AttendeeDirectory::from_entries(vec![entry("555-123-4567", "Ada")]).unwrap();
        assert!(directory.authenticate("1 (555) 123-4567").is_some());
        assert!(directory.authenticate("555-999-0000").is_none());
        assert!(directory.authenticate("not a phone").is_none());
    }

    #[test]
    fn unnormalizable_entry_fails_construction() {
        let result = AttendeeDirectory::from_entries(vec![entry("12345", "Bad Entry")]);
        assert!(matches!(result, Err(DirectoryError::UnnormalizablePhone(_))));
    }

    #[test]
    fn duplicate_canonical_phone_fails_construction() {
        // Same number written two ways normalizes to one key.
        let result = AttendeeDirectory::from_entries(vec![
            entry("555-123-4567", "Ada"),
            entry("1-555-123-4567", "Also Ada"),
        ]);
        assert!(matches!(result, Err(DirectoryError::DuplicatePhone(_))));
    }

    #[test]
    fn listing_sorts_case_insensitively_with_stable_ties() {
        let directory = AttendeeDirectory::from_entries(vec![
            entry("555-000-0001", "Bob"),
            entry("555-000-0002", "alice"),
            entry("555-000-0003", "ALICE"),
        ])
        .unwrap();

        let names: Vec<&str> = directory
            .list_by_name()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        // "alice" before "Bob"; the two alices keep input order.
        assert_eq!(names, vec!["alice", "ALICE", "Bob"]);
    }
}
