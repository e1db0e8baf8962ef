use super::UserCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{Principal, RequestMeta, UserWithAreasDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::area::AreaId;
use crate::domain::user::{Email, PasswordHash, Role, UserId, UserUpdate};
use serde_json::json;

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    /// `Some` replaces the whole area-grant set; `None` leaves it alone.
    pub area_ids: Option<Vec<i64>>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &Principal,
        command: UpdateUserCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<UserWithAreasDto> {
        ensure_admin(actor)?;

        let user_id = UserId::new(command.user_id)?;
        let existing = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(user_id);

        if let Some(raw) = command.email {
            let email = Email::new(raw)?;
            if email != existing.email {
                if self.user_repo.find_by_email(&email).await?.is_some() {
                    return Err(ApplicationError::conflict(
                        "this email is already in use by another user",
                    ));
                }
                update = update.with_email(email);
            }
        }
        if let Some(name) = command.name {
            update = update.with_name(name);
        }
        if let Some(role) = command.role {
            update = update.with_role(role);
        }
        if let Some(password) = command.password {
            let hash = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hash)?);
        }

        let user = if update.is_empty() {
            existing.clone()
        } else {
            self.user_repo.update(update).await?
        };

        if let Some(raw_ids) = command.area_ids {
            let area_ids = raw_ids
                .into_iter()
                .map(AreaId::new)
                .collect::<Result<Vec<_>, _>>()?;
            self.access_repo
                .replace_area_grants(user_id, area_ids)
                .await?;
        }

        let areas = self.areas_for(&user).await?;

        self.recorder
            .record(
                AuditEntry::new("USER_UPDATED")
                    .entity_type("USER")
                    .entity_id(i64::from(user.id))
                    .user_id(i64::from(user.id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({
                        "email": existing.email.as_str(),
                        "role": existing.role.as_str(),
                        "name": existing.name,
                    }))
                    .new_data(json!({
                        "email": user.email.as_str(),
                        "role": user.role.as_str(),
                        "name": user.name,
                    })),
            )
            .await;

        Ok(UserWithAreasDto::new(user, areas))
    }
}
