//! Audit sink — records every inbound turn.
//!
//! Invoked fire-and-forget by the bot runtime; a failing sink is logged and
//! never alters the user-visible response.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::AuditError;
use crate::session::SessionId;

/// One recorded user action.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub user_id: SessionId,
    pub username: Option<String>,
    pub at: DateTime<Utc>,
    pub action: String,
}

impl AuditEntry {
    pub fn now(user_id: SessionId, username: Option<String>, action: impl Into<String>) -> Self {
        Self {
            user_id,
            username,
            at: Utc::now(),
            action: action.into(),
        }
    }
}

#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditError>;
}

/// Sink that only writes to the tracing log.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditError> {
        tracing::info!(
            user_id = entry.user_id,
            username = entry.username.as_deref().unwrap_or("unknown"),
            at = %entry.at.to_rfc3339(),
            action = %entry.action,
            "audit"
        );
        Ok(())
    }
}

/// libSQL-backed sink. Timestamps are stored as UTC ISO 8601 text.
pub struct LibSqlAuditSink {
    conn: Connection,
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS audit_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        username TEXT,
        time_utc TEXT NOT NULL,
        action TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_audit_log_user ON audit_log(user_id);
";

impl LibSqlAuditSink {
    /// Open (or create) a local database file and ensure the schema.
    pub async fn new_local(path: &std::path::Path) -> Result<Self, AuditError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AuditError::Open(format!("create audit directory: {e}")))?;
        }
        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AuditError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| AuditError::Open(e.to_string()))?;
        let sink = Self { conn };
        sink.init_schema().await?;
        tracing::info!(path = %path.display(), "Audit store opened");
        Ok(sink)
    }

    /// In-memory sink (for tests).
    pub async fn new_memory() -> Result<Self, AuditError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| AuditError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| AuditError::Open(e.to_string()))?;
        let sink = Self { conn };
        sink.init_schema().await?;
        Ok(sink)
    }

    async fn init_schema(&self) -> Result<(), AuditError> {
        self.conn
            .execute_batch(SCHEMA)
            .await
            .map(|_| ())
            .map_err(|e| AuditError::Open(e.to_string()))
    }

    /// Most recent actions, newest first (for operators and tests).
    pub async fn recent(&self, limit: u32) -> Result<Vec<AuditEntry>, AuditError> {
        let mut rows = self
            .conn
            .query(
                "SELECT user_id, username, time_utc, action FROM audit_log
                 ORDER BY id DESC LIMIT ?1",
                params![limit as i64],
            )
            .await
            .map_err(|e| AuditError::Write(e.to_string()))?;

        let mut entries = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AuditError::Write(e.to_string()))?
        {
            let user_id: i64 = row.get(0).map_err(|e| AuditError::Write(e.to_string()))?;
            let username: Option<String> = row.get(1).ok();
            let time_utc: String = row.get(2).map_err(|e| AuditError::Write(e.to_string()))?;
            let action: String = row.get(3).map_err(|e| AuditError::Write(e.to_string()))?;
            entries.push(AuditEntry {
                user_id,
                username,
                at: DateTime::parse_from_rfc3339(&time_utc)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
                action,
            });
        }
        Ok(entries)
    }
}

fn opt_text(s: Option<String>) -> libsql::Value {
    match s {
        Some(s) => libsql::Value::Text(s),
        None => libsql::Value::Null,
    }
}

#[async_trait]
impl AuditSink for LibSqlAuditSink {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditError> {
        self.conn
            .execute(
                "INSERT INTO audit_log (user_id, username, time_utc, action)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    entry.user_id,
                    opt_text(entry.username),
                    entry.at.to_rfc3339(),
                    entry.action
                ],
            )
            .await
            .map_err(|e| AuditError::Write(e.to_string()))?;
        Ok(())
    }
}
