use super::AreaCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{AreaDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::{AreaId, AreaName};
use serde_json::json;

pub struct UpdateAreaCommand {
    pub area_id: i64,
    pub name: String,
}

impl AreaCommandService {
    pub async fn update_area(
        &self,
        actor: &Principal,
        command: UpdateAreaCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<AreaDto> {
        ensure_admin(actor)?;

        let area_id = AreaId::new(command.area_id)?;
        let existing = self
            .area_repo
            .find_by_id(area_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("area not found"))?;

        let name = AreaName::new(command.name)?;
        if let Some(other) = self.area_repo.find_by_name(&name).await? {
            if other.id != area_id {
                return Err(ApplicationError::conflict(
                    "another area with this name already exists",
                ));
            }
        }

        let area = self.area_repo.update_name(area_id, name).await?;

        self.recorder
            .record(
                AuditEntry::new("AREA_UPDATED")
                    .entity_type("AREA")
                    .entity_id(i64::from(area.id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({ "name": existing.name.as_str() }))
                    .new_data(json!({ "name": area.name.as_str() })),
            )
            .await;

        Ok(area.into())
    }
}
