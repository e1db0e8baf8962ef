use crate::domain::audit::{AuditLog, AuditStats, LogLevel};
use crate::domain::user::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::pagination::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRefDto {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

impl From<&UserSummary> for UserRefDto {
    fn from(summary: &UserSummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name.clone(),
            email: summary.email.to_string(),
        }
    }
}

/// An audit row denormalized with the referenced user's and admin's
/// name/email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogDto {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<UserRefDto>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl AuditLogDto {
    pub fn from_log(log: AuditLog, users: &HashMap<i64, UserSummary>) -> Self {
        let user = log.user_id.and_then(|id| users.get(&id)).map(UserRefDto::from);
        let admin = log.admin_id.and_then(|id| users.get(&id)).map(UserRefDto::from);
        Self {
            id: log.id,
            timestamp: log.timestamp,
            level: log.level,
            action: log.action,
            entity_type: log.entity_type,
            entity_id: log.entity_id,
            user_id: log.user_id,
            admin_id: log.admin_id,
            user,
            admin,
            details: log.details,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogPageDto {
    pub logs: Vec<AuditLogDto>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStatsDto {
    pub total_logs: u64,
    pub action_stats: BTreeMap<String, u64>,
    pub entity_stats: BTreeMap<String, u64>,
}

impl From<AuditStats> for AuditStatsDto {
    fn from(stats: AuditStats) -> Self {
        Self {
            total_logs: stats.total_logs,
            action_stats: stats.action_counts.into_iter().collect(),
            entity_stats: stats.entity_counts.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupReportDto {
    pub deleted: u64,
    pub cutoff: DateTime<Utc>,
}
