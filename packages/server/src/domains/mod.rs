// Domain layer
pub mod directory;
pub mod events;
