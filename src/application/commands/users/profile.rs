use super::UserCommandService;
use crate::application::{
    audit::AuditEntry,
    dto::{Principal, RequestMeta, UserWithAreasDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{PasswordHash, UserUpdate};
use serde_json::json;

/// Self-service profile change. Deliberately narrower than
/// `UpdateUserCommand`: no email, role, or area-grant fields, so a
/// non-admin can never escalate through this path.
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    /// Required when `new_password` is set; verified against the
    /// stored hash before anything changes.
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &Principal,
        command: UpdateProfileCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<UserWithAreasDto> {
        let existing = self
            .user_repo
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(actor.user_id);
        let mut password_changed = false;

        if let Some(name) = command.name {
            update = update.with_name(name);
        }

        if let Some(new_password) = command.new_password {
            let current = command.current_password.ok_or_else(|| {
                ApplicationError::validation(
                    "current password is required to set a new one",
                )
            })?;
            self.password_hasher
                .verify(&current, existing.password_hash.as_str())
                .await
                .map_err(|err| match err {
                    ApplicationError::Unauthorized(_) => {
                        ApplicationError::validation("current password is incorrect")
                    }
                    other => other,
                })?;

            let hash = self.password_hasher.hash(&new_password).await?;
            update = update.with_password_hash(PasswordHash::new(hash)?);
            password_changed = true;
        }

        let user = if update.is_empty() {
            existing.clone()
        } else {
            self.user_repo.update(update).await?
        };

        let areas = self.areas_for(&user).await?;

        self.recorder
            .record(
                AuditEntry::new("USER_UPDATED")
                    .entity_type("USER")
                    .entity_id(i64::from(user.id))
                    .user_id(i64::from(user.id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({ "name": existing.name }))
                    .new_data(json!({ "name": user.name }))
                    .additional_info(json!({
                        "selfService": true,
                        "passwordChanged": password_changed,
                    })),
            )
            .await;

        Ok(UserWithAreasDto::new(user, areas))
    }
}
