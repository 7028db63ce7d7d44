use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use std::env;

/// Fallback cutoff when DIRECTORY_EXPIRES_AT is not set.
const DEFAULT_EXPIRES_AT: &str = "2026-12-15T07:59:59Z";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the event log store. Absent means event
    /// logging is disabled; the rest of the app still runs.
    pub database_url: Option<String>,
    pub port: u16,
    /// Instant after which the directory becomes inaccessible.
    pub expires_at: DateTime<Utc>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let expires_at = env::var("DIRECTORY_EXPIRES_AT")
            .unwrap_or_else(|_| DEFAULT_EXPIRES_AT.to_string());
        let expires_at = DateTime::parse_from_rfc3339(&expires_at)
            .context("DIRECTORY_EXPIRES_AT must be an RFC 3339 timestamp")?
            .with_timezone(&Utc);

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            expires_at,
        })
    }
}
