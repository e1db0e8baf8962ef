use super::UserCommandService;
use crate::application::{
    audit::AuditEntry,
    dto::{AreaDto, AuthTokenDto, RequestMeta, TokenSubject, UserWithAreasDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::audit::LogLevel;
use crate::domain::user::{Email, User};
use serde_json::json;

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserWithAreasDto,
}

/// The one error shape both failure paths share, so a caller cannot tell an
/// unknown email from a wrong password.
fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized("invalid credentials")
}

impl UserCommandService {
    pub async fn login(
        &self,
        command: LoginCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<LoginResult> {
        let user = match self.find_and_verify(&command).await {
            Ok(user) => user,
            Err(err) => {
                self.audit_login_failure(&command.email, &meta).await;
                return Err(err);
            }
        };

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                email: user.email.to_string(),
                role: user.role,
            })
            .await?;

        let areas = self.areas_for(&user).await?;

        self.recorder
            .record(
                AuditEntry::new("LOGIN_SUCCESS")
                    .entity_type("AUTH")
                    .user_id(i64::from(user.id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .new_data(json!({
                        "email": user.email.as_str(),
                        "role": user.role.as_str(),
                    })),
            )
            .await;

        Ok(LoginResult {
            token,
            user: UserWithAreasDto::new(user, areas),
        })
    }

    async fn find_and_verify(&self, command: &LoginCommand) -> ApplicationResult<User> {
        // A malformed email cannot match a stored one; same opaque error.
        let email = Email::new(command.email.clone()).map_err(|_| invalid_credentials())?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| invalid_credentials())?;

        Ok(user)
    }

    pub(super) async fn areas_for(&self, user: &User) -> ApplicationResult<Vec<AreaDto>> {
        let areas = if user.role.is_admin() {
            self.area_repo.list().await?
        } else {
            self.access_repo.areas_for_user(user.id).await?
        };
        Ok(areas.into_iter().map(Into::into).collect())
    }

    async fn audit_login_failure(&self, email: &str, meta: &RequestMeta) {
        self.recorder
            .record(
                AuditEntry::new("LOGIN_FAILED")
                    .entity_type("AUTH")
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address.clone())
                    .user_agent(meta.user_agent.clone())
                    .additional_info(json!({
                        "email": email,
                        "reason": "invalid credentials",
                    })),
            )
            .await;
    }
}
