use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::application::{
    access::ensure_admin,
    dto::{AuditLogDto, AuditLogPageDto, AuditStatsDto, Pagination, Principal},
    error::ApplicationResult,
    ports::time::Clock,
};
use crate::domain::audit::{AuditLogFilter, AuditLogRepository};
use crate::domain::user::{UserRepository, UserSummary};

use super::csv::write_csv;

const DEFAULT_PAGE_SIZE: u32 = 50;
const MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_STATS_WINDOW_DAYS: i64 = 30;
const EXPORT_ROW_LIMIT: u32 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl LogQuery {
    fn filter(&self) -> AuditLogFilter {
        AuditLogFilter {
            action: self.action.clone(),
            entity_type: self.entity_type.clone(),
            user_id: self.user_id,
            admin_id: self.admin_id,
            start: self.start,
            end: self.end,
        }
    }
}

pub struct AuditQueryService {
    audit_repo: Arc<dyn AuditLogRepository>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl AuditQueryService {
    pub fn new(
        audit_repo: Arc<dyn AuditLogRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            audit_repo,
            user_repo,
            clock,
        }
    }

    /// One page of the trail, newest first, with referenced users resolved
    /// in a single batch lookup.
    pub async fn get_logs(
        &self,
        actor: &Principal,
        query: LogQuery,
    ) -> ApplicationResult<AuditLogPageDto> {
        ensure_admin(actor)?;

        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = u64::from(page - 1) * u64::from(limit);

        let (logs, total) = self.audit_repo.list(&query.filter(), offset, limit).await?;
        let users = self.resolve_users(&logs).await?;

        Ok(AuditLogPageDto {
            logs: logs
                .into_iter()
                .map(|log| AuditLogDto::from_log(log, &users))
                .collect(),
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Aggregate counts over the trailing window (default 30 days).
    pub async fn get_stats(
        &self,
        actor: &Principal,
        days: Option<i64>,
    ) -> ApplicationResult<AuditStatsDto> {
        ensure_admin(actor)?;

        let window = days.unwrap_or(DEFAULT_STATS_WINDOW_DAYS).max(1);
        let since = self.clock.now() - Duration::days(window);
        let stats = self.audit_repo.stats(since).await?;
        Ok(stats.into())
    }

    /// The filtered trail as a CSV document, capped at 10k rows. Starts with
    /// a UTF-8 BOM so spreadsheet tools pick the right encoding.
    pub async fn export_csv(&self, actor: &Principal, query: LogQuery) -> ApplicationResult<String> {
        ensure_admin(actor)?;

        let (logs, _) = self
            .audit_repo
            .list(&query.filter(), 0, EXPORT_ROW_LIMIT)
            .await?;
        let users = self.resolve_users(&logs).await?;
        let rows: Vec<AuditLogDto> = logs
            .into_iter()
            .map(|log| AuditLogDto::from_log(log, &users))
            .collect();

        Ok(write_csv(&rows))
    }

    async fn resolve_users(
        &self,
        logs: &[crate::domain::audit::AuditLog],
    ) -> ApplicationResult<HashMap<i64, UserSummary>> {
        let mut ids: Vec<i64> = logs
            .iter()
            .flat_map(|log| [log.user_id, log.admin_id])
            .flatten()
            .collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let summaries = self.user_repo.summaries_by_ids(&ids).await?;
        Ok(summaries
            .into_iter()
            .map(|s| (i64::from(s.id), s))
            .collect())
    }
}
