use super::DashboardCommandService;
use crate::application::{
    dto::{Principal, RequestMeta},
    error::ApplicationResult,
};
use crate::domain::dashboard::DashboardId;
use serde_json::json;

impl DashboardCommandService {
    /// Records that a principal opened a dashboard. The policy check runs
    /// first, so a view event is only ever written for an authorized access.
    pub async fn track_access(
        &self,
        actor: &Principal,
        dashboard_id: i64,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        let dashboard_id = DashboardId::new(dashboard_id)?;
        self.policy
            .ensure_dashboard_access(actor, dashboard_id)
            .await?;

        self.recorder
            .record(
                crate::application::audit::AuditEntry::new("DASHBOARD_VIEWED")
                    .entity_type("DASHBOARD")
                    .entity_id(i64::from(dashboard_id))
                    .user_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .additional_info(json!({ "viewedAt": self.clock.now() })),
            )
            .await;

        Ok(())
    }
}
