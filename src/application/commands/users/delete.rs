use super::UserCommandService;
use crate::application::{
    access::ensure_admin,
    audit::AuditEntry,
    dto::{Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::audit::LogLevel;
use crate::domain::user::UserId;
use serde_json::json;

impl UserCommandService {
    /// Area and dashboard grants go with the user via the FK cascade.
    pub async fn delete_user(
        &self,
        actor: &Principal,
        user_id: i64,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let user_id = UserId::new(user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.user_repo.delete(user_id).await?;

        self.recorder
            .record(
                AuditEntry::new("USER_DELETED")
                    .entity_type("USER")
                    .entity_id(i64::from(user_id))
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .old_data(json!({
                        "email": user.email.as_str(),
                        "role": user.role.as_str(),
                    })),
            )
            .await;

        Ok(())
    }
}
