use super::UserCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{Principal, RequestMeta, UserWithAreasDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaId;
use crate::domain::user::{Email, NewUser, PasswordHash, Role};
use serde_json::json;

pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub area_ids: Vec<i64>,
}

impl UserCommandService {
    pub async fn create_user(
        &self,
        actor: &Principal,
        command: CreateUserCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<UserWithAreasDto> {
        ensure_admin(actor)?;

        let email = Email::new(command.email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a user with this email already exists",
            ));
        }

        let hash = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            email,
            name: command.name,
            password_hash: PasswordHash::new(hash)?,
            role: command.role.unwrap_or_default(),
            created_at: self.clock.now(),
        };

        let area_ids = command
            .area_ids
            .into_iter()
            .map(AreaId::new)
            .collect::<Result<Vec<_>, _>>()?;

        // User row and initial area grants commit or roll back together.
        let user = self.user_repo.insert(new_user, area_ids).await?;
        let areas = self.areas_for(&user).await?;

        self.recorder
            .record(
                AuditEntry::new("USER_CREATED")
                    .entity_type("USER")
                    .entity_id(i64::from(user.id))
                    .user_id(i64::from(user.id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .new_data(json!({
                        "email": user.email.as_str(),
                        "role": user.role.as_str(),
                        "areaIds": areas.iter().map(|a| a.id).collect::<Vec<_>>(),
                    })),
            )
            .await;

        Ok(UserWithAreasDto::new(user, areas))
    }
}
