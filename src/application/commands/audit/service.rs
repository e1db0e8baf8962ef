use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::application::{
    access::ensure_admin,
    audit::{AuditEntry, AuditRecorder},
    dto::{CleanupReportDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::audit::{AuditLogRepository, LogLevel};

/// Retention maintenance for the audit trail. Both operations are
/// admin-only and write their own audit entry describing the purge.
pub struct AuditMaintenanceService {
    audit_repo: Arc<dyn AuditLogRepository>,
    recorder: Arc<AuditRecorder>,
    clock: Arc<dyn Clock>,
    retention_floor_days: i64,
}

impl AuditMaintenanceService {
    pub fn new(
        audit_repo: Arc<dyn AuditLogRepository>,
        recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
        retention_floor_days: i64,
    ) -> Self {
        Self {
            audit_repo,
            recorder,
            clock,
            retention_floor_days,
        }
    }

    /// Deletes every log whose timestamp is at or before `now - older_than_days`.
    /// Requests below the retention floor are rejected so a typo cannot
    /// wipe the recent trail.
    pub async fn clean_old_logs(
        &self,
        actor: &Principal,
        older_than_days: i64,
        meta: RequestMeta,
    ) -> ApplicationResult<CleanupReportDto> {
        ensure_admin(actor)?;

        if older_than_days < self.retention_floor_days {
            return Err(ApplicationError::validation(format!(
                "retention period must be at least {} days",
                self.retention_floor_days
            )));
        }

        let cutoff = self.clock.now() - Duration::days(older_than_days);
        let deleted = self.audit_repo.delete_older_than(cutoff).await?;

        self.recorder
            .record(
                AuditEntry::new("AUDIT_LOGS_CLEANED")
                    .entity_type("AUDIT_LOG")
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .additional_info(json!({
                        "deleted": deleted,
                        "olderThanDays": older_than_days,
                        "cutoff": cutoff,
                    })),
            )
            .await;

        Ok(CleanupReportDto { deleted, cutoff })
    }

    /// Deletes every log with a timestamp inside `[start, end]`.
    pub async fn clean_by_date_range(
        &self,
        actor: &Principal,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        meta: RequestMeta,
    ) -> ApplicationResult<CleanupReportDto> {
        ensure_admin(actor)?;

        if start > end {
            return Err(ApplicationError::validation(
                "start date must not be after end date",
            ));
        }

        let deleted = self.audit_repo.delete_between(start, end).await?;

        self.recorder
            .record(
                AuditEntry::new("AUDIT_LOGS_CLEANED")
                    .entity_type("AUDIT_LOG")
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .additional_info(json!({
                        "deleted": deleted,
                        "start": start,
                        "end": end,
                    })),
            )
            .await;

        Ok(CleanupReportDto { deleted, cutoff: end })
    }
}
