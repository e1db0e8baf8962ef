use super::AreaCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaId;
use crate::domain::audit::LogLevel;
use serde_json::json;

impl AreaCommandService {
    /// Deletion is refused while dependents exist; no cascade. Dashboards
    /// and area grants have to be removed first, so no grant can ever point
    /// at a vanished area.
    pub async fn delete_area(
        &self,
        actor: &Principal,
        area_id: i64,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let area_id = AreaId::new(area_id)?;
        let area = self
            .area_repo
            .find_by_id(area_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("area not found"))?;

        if self.dashboard_repo.count_by_area(area_id).await? > 0 {
            return Err(ApplicationError::conflict(
                "area still has dashboards; remove them first",
            ));
        }
        if self.access_repo.count_for_area(area_id).await? > 0 {
            return Err(ApplicationError::conflict(
                "area still has user access grants; remove them first",
            ));
        }

        self.area_repo.delete(area_id).await?;

        self.recorder
            .record(
                AuditEntry::new("AREA_DELETED")
                    .entity_type("AREA")
                    .entity_id(i64::from(area_id))
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({ "name": area.name.as_str() })),
            )
            .await;

        Ok(())
    }
}
