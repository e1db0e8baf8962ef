use std::sync::Arc;

use crate::application::{
    access::AccessPolicyService,
    dto::{DashboardDto, Principal},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::dashboard::{DashboardId, DashboardRepository};

pub struct DashboardQueryService {
    dashboard_repo: Arc<dyn DashboardRepository>,
    policy: Arc<AccessPolicyService>,
}

impl DashboardQueryService {
    pub fn new(
        dashboard_repo: Arc<dyn DashboardRepository>,
        policy: Arc<AccessPolicyService>,
    ) -> Self {
        Self {
            dashboard_repo,
            policy,
        }
    }

    /// Admins see everything. Non-admins see exactly the dashboards they
    /// hold a dashboard-level grant for; an area grant alone lists nothing.
    pub async fn list_dashboards(
        &self,
        actor: &Principal,
    ) -> ApplicationResult<Vec<DashboardDto>> {
        let views = if actor.is_admin() {
            self.dashboard_repo.list().await?
        } else {
            self.dashboard_repo.list_granted(actor.user_id).await?
        };
        Ok(views.into_iter().map(DashboardDto::from).collect())
    }

    pub async fn get_dashboard(
        &self,
        actor: &Principal,
        dashboard_id: i64,
    ) -> ApplicationResult<DashboardDto> {
        let dashboard_id = DashboardId::new(dashboard_id)?;
        let view = self
            .dashboard_repo
            .find_view(dashboard_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dashboard not found"))?;

        self.policy
            .ensure_dashboard_access(actor, dashboard_id)
            .await?;
        Ok(view.into())
    }
}
