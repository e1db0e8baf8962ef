use crate::domain::audit::entity::{AuditLog, AuditLogFilter, AuditStats, NewAuditLog};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<AuditLog>;
    /// Newest-first page plus the total row count matching the filter.
    async fn list(
        &self,
        filter: &AuditLogFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<AuditLog>, u64)>;
    async fn stats(&self, since: DateTime<Utc>) -> DomainResult<AuditStats>;
    /// Deletes rows with `timestamp <= cutoff`; returns the number removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;
    /// Deletes rows inside the inclusive range; returns the number removed.
    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<u64>;
}
