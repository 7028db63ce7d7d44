// Gated Attendee Directory - core library
//
// Attendees identified by phone number log in, view a hardcoded roster
// with interest tags, and their interactions are appended to a
// relational event log. The whole directory is gated by a fixed
// expiration instant.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
