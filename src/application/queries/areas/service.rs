use std::sync::Arc;

use crate::application::{
    access::AccessPolicyService,
    dto::{AreaDto, Principal},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    access::AccessRepository,
    area::{AreaId, AreaRepository},
};

pub struct AreaQueryService {
    area_repo: Arc<dyn AreaRepository>,
    access_repo: Arc<dyn AccessRepository>,
    policy: Arc<AccessPolicyService>,
}

impl AreaQueryService {
    pub fn new(
        area_repo: Arc<dyn AreaRepository>,
        access_repo: Arc<dyn AccessRepository>,
        policy: Arc<AccessPolicyService>,
    ) -> Self {
        Self {
            area_repo,
            access_repo,
            policy,
        }
    }

    /// Admins see every area; everyone else sees only the areas they hold
    /// a grant for. No Forbidden here, an empty list is a valid answer.
    pub async fn list_areas(&self, actor: &Principal) -> ApplicationResult<Vec<AreaDto>> {
        let areas = if actor.is_admin() {
            self.area_repo.list().await?
        } else {
            self.access_repo.areas_for_user(actor.user_id).await?
        };
        Ok(areas.into_iter().map(AreaDto::from).collect())
    }

    pub async fn get_area(&self, actor: &Principal, area_id: i64) -> ApplicationResult<AreaDto> {
        let area_id = AreaId::new(area_id)?;
        let area = self
            .area_repo
            .find_by_id(area_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("area not found"))?;

        self.policy.ensure_area_access(actor, area_id).await?;
        Ok(area.into())
    }
}
