// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::{
    AuditLog, AuditLogFilter, AuditLogRepository, AuditStats, LogLevel, NewAuditLog,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    action: String,
    entity_type: String,
    entity_id: Option<i64>,
    user_id: Option<i64>,
    admin_id: Option<i64>,
    level: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    details: Option<serde_json::Value>,
    timestamp: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: row.id,
            action: row.action,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            user_id: row.user_id,
            admin_id: row.admin_id,
            level: row.level.parse::<LogLevel>()?,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            details: row.details,
            timestamp: row.timestamp,
        })
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &AuditLogFilter) {
    builder.push(" WHERE 1 = 1");
    if let Some(action) = &filter.action {
        builder.push(" AND action = ").push_bind(action.clone());
    }
    if let Some(entity_type) = &filter.entity_type {
        builder
            .push(" AND entity_type = ")
            .push_bind(entity_type.clone());
    }
    if let Some(user_id) = filter.user_id {
        builder.push(" AND user_id = ").push_bind(user_id);
    }
    if let Some(admin_id) = filter.admin_id {
        builder.push(" AND admin_id = ").push_bind(admin_id);
    }
    if let Some(start) = filter.start {
        builder.push(" AND \"timestamp\" >= ").push_bind(start);
    }
    if let Some(end) = filter.end {
        builder.push(" AND \"timestamp\" <= ").push_bind(end);
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<AuditLog> {
        let row = sqlx::query_as::<_, AuditLogRow>(
            r#"
            INSERT INTO audit_logs
                (action, entity_type, entity_id, user_id, admin_id, level,
                 ip_address, user_agent, details, "timestamp")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, action, entity_type, entity_id, user_id, admin_id, level,
                      ip_address, user_agent, details, "timestamp"
            "#,
        )
        .bind(&log.action)
        .bind(&log.entity_type)
        .bind(log.entity_id)
        .bind(log.user_id)
        .bind(log.admin_id)
        .bind(log.level.as_str())
        .bind(&log.ip_address)
        .bind(&log.user_agent)
        .bind(&log.details)
        .bind(log.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        AuditLog::try_from(row)
    }

    async fn list(
        &self,
        filter: &AuditLogFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<AuditLog>, u64)> {
        let mut count_builder = QueryBuilder::new("SELECT COUNT(1) FROM audit_logs");
        push_filters(&mut count_builder, filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder = QueryBuilder::new(
            "SELECT id, action, entity_type, entity_id, user_id, admin_id, level, \
             ip_address, user_agent, details, \"timestamp\" FROM audit_logs",
        );
        push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY \"timestamp\" DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(offset as i64);

        let rows = builder
            .build_query_as::<AuditLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let logs = rows
            .into_iter()
            .map(AuditLog::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((logs, total as u64))
    }

    async fn stats(&self, since: DateTime<Utc>) -> DomainResult<AuditStats> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(1) FROM audit_logs WHERE "timestamp" >= $1"#,
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let action_counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT action, COUNT(1) FROM audit_logs
            WHERE "timestamp" >= $1
            GROUP BY action ORDER BY COUNT(1) DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let entity_counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT entity_type, COUNT(1) FROM audit_logs
            WHERE "timestamp" >= $1
            GROUP BY entity_type ORDER BY COUNT(1) DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(AuditStats {
            total_logs: total as u64,
            action_counts: action_counts
                .into_iter()
                .map(|(action, count)| (action, count as u64))
                .collect(),
            entity_counts: entity_counts
                .into_iter()
                .map(|(entity, count)| (entity, count as u64))
                .collect(),
        })
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query(r#"DELETE FROM audit_logs WHERE "timestamp" <= $1"#)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let result = sqlx::query(
            r#"DELETE FROM audit_logs WHERE "timestamp" >= $1 AND "timestamp" <= $2"#,
        )
        .bind(start)
        .bind(end)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
