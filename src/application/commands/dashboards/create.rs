use super::DashboardCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{DashboardDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaId;
use crate::domain::dashboard::NewDashboard;
use serde_json::json;

pub struct CreateDashboardCommand {
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: i64,
}

impl DashboardCommandService {
    pub async fn create_dashboard(
        &self,
        actor: &Principal,
        command: CreateDashboardCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<DashboardDto> {
        ensure_admin(actor)?;

        let area_id = AreaId::new(command.area_id)?;
        if self.area_repo.find_by_id(area_id).await?.is_none() {
            return Err(ApplicationError::validation(
                "specified area does not exist",
            ));
        }

        let view = self
            .dashboard_repo
            .insert(NewDashboard {
                name: command.name,
                url: command.url,
                information: command.information,
                area_id,
                created_at: self.clock.now(),
            })
            .await?;

        self.recorder
            .record(
                AuditEntry::new("DASHBOARD_CREATED")
                    .entity_type("DASHBOARD")
                    .entity_id(i64::from(view.dashboard.id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
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
