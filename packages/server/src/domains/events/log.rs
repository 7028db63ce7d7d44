//! Best-effort writer for the `logs` table.
//!
//! Writes are fallible by signature but deliberately ignored at call
//! sites beyond a warning: a failed audit write must never change the
//! HTTP response that triggered it. Rows are independent and never
//! updated, so concurrent inserts need no coordination beyond the
//! store's own insert atomicity.

use super::EventType;
use crate::common::CanonicalPhone;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::PgPool;

#[derive(Clone)]
pub struct EventLog {
    pool: Option<PgPool>,
}

impl EventLog {
    /// A log backed by `pool`, or disabled when `None` (no
    /// DATABASE_URL configured).
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    pub fn disabled() -> Self {
        Self { pool: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    /// Create the `logs` table if it does not exist. Run once at
    /// startup, before serving traffic; schema errors abort startup.
    pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS logs (
                id SERIAL PRIMARY KEY,
                event_type VARCHAR(255) NOT NULL,
                phone VARCHAR(20),
                user_agent TEXT,
                timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Append one event. With structured metadata the `user_agent`
    /// column carries a JSON envelope of `{user_agent, metadata}`;
    /// otherwise the raw client user-agent string.
    pub async fn record(
        &self,
        event: EventType,
        phone: Option<&CanonicalPhone>,
        user_agent: &str,
        metadata: Option<Value>,
    ) -> Result<(), sqlx::Error> {
        let Some(pool) = &self.pool else {
            tracing::debug!(event = event.as_str(), "event logging disabled, dropping event");
            return Ok(());
        };

        let user_agent = match metadata {
            Some(metadata) => json!({ "user_agent": user_agent, "metadata": metadata }).to_string(),
            None => user_agent.to_string(),
        };

        sqlx::query(
            "INSERT INTO logs (event_type, phone, user_agent, timestamp) VALUES ($1, $2, $3, $4)",
        )
        .bind(event.as_str())
        .bind(phone.map(|p| p.as_str().to_string()))
        .bind(user_agent)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(())
    }
}
