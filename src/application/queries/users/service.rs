use std::sync::Arc;

use crate::application::{
    access::ensure_admin,
    dto::{AreaDto, Principal, UserWithAreasDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    access::AccessRepository,
    area::AreaRepository,
    user::{User, UserId, UserRepository},
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    area_repo: Arc<dyn AreaRepository>,
    access_repo: Arc<dyn AccessRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        area_repo: Arc<dyn AreaRepository>,
        access_repo: Arc<dyn AccessRepository>,
    ) -> Self {
        Self {
            user_repo,
            area_repo,
            access_repo,
        }
    }

    async fn areas_for(&self, user: &User) -> ApplicationResult<Vec<AreaDto>> {
        let areas = if user.role.is_admin() {
            self.area_repo.list().await?
        } else {
            self.access_repo.areas_for_user(user.id).await?
        };
        Ok(areas.into_iter().map(AreaDto::from).collect())
    }

    pub async fn list_users(&self, actor: &Principal) -> ApplicationResult<Vec<UserWithAreasDto>> {
        ensure_admin(actor)?;

        let users = self.user_repo.list().await?;
        let mut out = Vec::with_capacity(users.len());
        for user in users {
            let areas = self.areas_for(&user).await?;
            out.push(UserWithAreasDto::new(user, areas));
        }
        Ok(out)
    }

    pub async fn get_user(
        &self,
        actor: &Principal,
        user_id: i64,
    ) -> ApplicationResult<UserWithAreasDto> {
        ensure_admin(actor)?;

        let user_id = UserId::new(user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let areas = self.areas_for(&user).await?;
        Ok(UserWithAreasDto::new(user, areas))
    }

    /// Who-am-I for the bearer of the token. A valid token whose user row
    /// has since been deleted resolves to NotFound, not a stale profile.
    pub async fn profile(&self, principal: &Principal) -> ApplicationResult<UserWithAreasDto> {
        let user = self
            .user_repo
            .find_by_id(principal.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let areas = self.areas_for(&user).await?;
        Ok(UserWithAreasDto::new(user, areas))
    }
}
