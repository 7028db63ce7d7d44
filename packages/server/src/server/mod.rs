// HTTP server setup (Axum)
pub mod app;
pub mod auth;
pub mod middleware;
pub mod pages;
pub mod routes;

pub use app::*;
