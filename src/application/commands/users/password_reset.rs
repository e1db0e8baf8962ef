use super::UserCommandService;
use crate::application::{
    audit::AuditEntry,
    dto::RequestMeta,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Email, PasswordHash, UserUpdate};
use chrono::Duration;
use serde_json::json;

pub struct ForgotPasswordCommand {
    pub email: String,
}

pub struct ResetPasswordCommand {
    pub token: String,
    pub new_password: String,
}

impl UserCommandService {
    /// Stores a reset token with a 1-hour expiry on the user row. Succeeds
    /// silently for unknown emails so the endpoint cannot be used to probe
    /// which accounts exist. Mail delivery is an external collaborator.
    pub async fn forgot_password(
        &self,
        command: ForgotPasswordCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        let Ok(email) = Email::new(command.email) else {
            return Ok(());
        };
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            return Ok(());
        };

        let token = self.reset_tokens.generate();
        let expiry = self.clock.now() + Duration::hours(1);

        self.user_repo
            .update(
                UserUpdate::new(user.id)
                    .with_reset_token(Some(token))
                    .with_reset_token_expiry(Some(expiry)),
            )
            .await?;

        self.recorder
            .record(
                AuditEntry::new("PASSWORD_RESET_REQUESTED")
                    .entity_type("AUTH")
                    .user_id(i64::from(user.id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .additional_info(json!({ "email": user.email.as_str() })),
            )
            .await;

        Ok(())
    }

    /// Redeems a reset token: the password update and the clearing of both
    /// reset fields land in the same UPDATE.
    pub async fn reset_password(
        &self,
        command: ResetPasswordCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        let user = self
            .user_repo
            .find_by_reset_token(&command.token)
            .await?
            .filter(|user| user.reset_token_is_valid(self.clock.now()))
            .ok_or_else(|| {
                ApplicationError::validation("invalid or expired reset token")
            })?;

        let hash = self.password_hasher.hash(&command.new_password).await?;

        self.user_repo
            .update(
                UserUpdate::new(user.id)
                    .with_password_hash(PasswordHash::new(hash)?)
                    .with_reset_token(None)
                    .with_reset_token_expiry(None),
            )
            .await?;

        self.recorder
            .record(
                AuditEntry::new("PASSWORD_RESET_COMPLETED")
                    .entity_type("AUTH")
                    .user_id(i64::from(user.id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent),
            )
            .await;

        Ok(())
    }
}
