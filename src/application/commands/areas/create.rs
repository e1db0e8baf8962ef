use super::AreaCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{AreaDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaName;
use serde_json::json;

pub struct CreateAreaCommand {
    pub name: String,
}

impl AreaCommandService {
    pub async fn create_area(
        &self,
        actor: &Principal,
        command: CreateAreaCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<AreaDto> {
        ensure_admin(actor)?;

        let name = AreaName::new(command.name)?;
        if self.area_repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(
                "an area with this name already exists",
            ));
        }

        let area = self.area_repo.insert(name).await?;

        self.recorder
            .record(
                AuditEntry::new("AREA_CREATED")
                    .entity_type("AREA")
                    .entity_id(i64::from(area.id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .new_data(json!({ "name": area.name.as_str() })),
            )
            .await;

        Ok(area.into())
    }
}
