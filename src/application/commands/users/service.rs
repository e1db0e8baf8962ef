use std::sync::Arc;

use crate::application::audit::AuditRecorder;
use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::ResetTokenGenerator,
};
use crate::domain::{
    access::AccessRepository, area::AreaRepository, user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) area_repo: Arc<dyn AreaRepository>,
    pub(super) access_repo: Arc<dyn AccessRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) reset_tokens: Arc<dyn ResetTokenGenerator>,
    pub(super) recorder: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        area_repo: Arc<dyn AreaRepository>,
        access_repo: Arc<dyn AccessRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        reset_tokens: Arc<dyn ResetTokenGenerator>,
        recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            area_repo,
            access_repo,
            password_hasher,
            token_manager,
            reset_tokens,
            recorder,
            clock,
        }
    }
}
