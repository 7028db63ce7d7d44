//! Append-only interaction event log.

pub mod log;

pub use log::EventLog;

/// Interaction events recorded by the web handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    DirectoryViewed,
    PhoneCopied,
    PhoneClicked,
    FilterApplied,
}

impl EventType {
    /// Stable label stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::DirectoryViewed => "directory_viewed",
            EventType::PhoneCopied => "phone_copied",
            EventType::PhoneClicked => "phone_clicked",
            EventType::FilterApplied => "filter_applied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(EventType::DirectoryViewed.as_str(), "directory_viewed");
        assert_eq!(EventType::PhoneCopied.as_str(), "phone_copied");
        assert_eq!(EventType::PhoneClicked.as_str(), "phone_clicked");
        assert_eq!(EventType::FilterApplied.as_str(), "filter_applied");
    }
}
