use super::DashboardCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{DashboardDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaId;
use crate::domain::dashboard::{DashboardId, DashboardUpdate};
use serde_json::json;

pub struct UpdateDashboardCommand {
    pub dashboard_id: i64,
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: i64,
}

impl DashboardCommandService {
    pub async fn update_dashboard(
        &self,
        actor: &Principal,
        command: UpdateDashboardCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<DashboardDto> {
        ensure_admin(actor)?;

        let dashboard_id = DashboardId::new(command.dashboard_id)?;
        let area_id = AreaId::new(command.area_id)?;

        if self.area_repo.find_by_id(area_id).await?.is_none() {
            return Err(ApplicationError::validation(
                "specified area does not exist",
            ));
        }

        let existing = self
            .dashboard_repo
            .find_by_id(dashboard_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dashboard not found"))?;

        let view = self
            .dashboard_repo
            .update(DashboardUpdate {
                id: dashboard_id,
                name: command.name,
                url: command.url,
                information: command.information,
                area_id,
            })
            .await?;

        self.recorder
            .record(
                AuditEntry::new("DASHBOARD_UPDATED")
                    .entity_type("DASHBOARD")
                    .entity_id(i64::from(dashboard_id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({
                        "name": existing.name,
                        "url": existing.url,
                        "areaId": i64::from(existing.area_id),
                    }))
                    .new_data(json!({
                        "name": view.dashboard.name,
                        "url": view.dashboard.url,
                        "areaId": i64::from(view.dashboard.area_id),
                    })),
            )
            .await;

        Ok(view.into())
    }
}
