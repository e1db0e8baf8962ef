use super::DashboardCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::audit::LogLevel;
use crate::domain::dashboard::DashboardId;
use serde_json::json;

impl DashboardCommandService {
    pub async fn delete_dashboard(
        &self,
        actor: &Principal,
        dashboard_id: i64,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let dashboard_id = DashboardId::new(dashboard_id)?;
        let dashboard = self
            .dashboard_repo
            .find_by_id(dashboard_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dashboard not found"))?;

        self.dashboard_repo.delete(dashboard_id).await?;

        self.recorder
            .record(
                AuditEntry::new("DASHBOARD_DELETED")
                    .entity_type("DASHBOARD")
                    .entity_id(i64::from(dashboard_id))
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({
                        "name": dashboard.name,
                        "areaId": i64::from(dashboard.area_id),
                    })),
            )
            .await;

        Ok(())
    }
}
