// Main entry point for the attendee directory server

use anyhow::{Context, Result};
use directory_core::{
    domains::directory::{builtin_roster, AttendeeDirectory, ExpirationGate},
    domains::events::EventLog,
    server::{build_app, AppState},
    Config,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Attendee Directory server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(expires_at = %config.expires_at, "Configuration loaded");

    // Connect to the event log store, if configured. Absence disables
    // event logging but not the rest of the app.
    let events = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to event log store...");
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .context("Failed to connect to event log store")?;

            EventLog::init_schema(&pool)
                .await
                .context("Failed to initialize logs schema")?;
            tracing::info!("Event log store ready");

            EventLog::new(Some(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, event logging disabled");
            EventLog::disabled()
        }
    };

    // Build the roster; bad entries abort startup rather than leaving
    // an attendee silently unable to log in.
    let directory =
        AttendeeDirectory::from_entries(builtin_roster()).context("Invalid roster entry")?;
    tracing::info!(attendees = directory.len(), "Roster loaded");

    let state = AppState::new(directory, ExpirationGate::new(config.expires_at), events);
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
