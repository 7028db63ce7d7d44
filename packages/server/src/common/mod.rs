// Shared leaf types
pub mod phone;

pub use phone::*;
