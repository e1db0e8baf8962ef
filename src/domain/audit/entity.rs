// src/domain/audit/entity.rs
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(DomainError::Validation(format!(
                "unknown log level '{other}'"
            ))),
        }
    }
}

/// Row to be appended. Sanitization has already happened by the time one of
/// these reaches a repository.
#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub level: LogLevel,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// Persisted, append-only audit row. Never updated; deleted only through the
/// retention operations.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub level: LogLevel,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// AND-combined filters; both timestamp bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct AuditStats {
    pub total_logs: u64,
    pub action_counts: Vec<(String, u64)>,
    pub entity_counts: Vec<(String, u64)>,
}
