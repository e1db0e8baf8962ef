use super::AccessPolicyService;
use crate::application::{
    dto::Principal,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{area::AreaId, dashboard::DashboardId};

/// Guard for operations that are Admin-only regardless of access tier.
pub fn ensure_admin(principal: &Principal) -> ApplicationResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "administrator privileges required",
        ))
    }
}

impl AccessPolicyService {
    /// Tier-2 check: Admins always pass; everyone else needs an area grant.
    pub async fn authorize_area_access(
        &self,
        principal: &Principal,
        area_id: AreaId,
    ) -> ApplicationResult<bool> {
        if principal.is_admin() {
            return Ok(true);
        }
        let granted = self
            .access_repo
            .area_grant_exists(principal.user_id, area_id)
            .await?;
        Ok(granted)
    }

    /// Tier-3 check: Admins always pass; everyone else needs the area grant
    /// for the dashboard's area AND the dashboard grant itself.
    pub async fn authorize_dashboard_access(
        &self,
        principal: &Principal,
        dashboard_id: DashboardId,
    ) -> ApplicationResult<bool> {
        let dashboard = self
            .dashboard_repo
            .find_by_id(dashboard_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dashboard not found"))?;

        if principal.is_admin() {
            return Ok(true);
        }

        if !self
            .access_repo
            .area_grant_exists(principal.user_id, dashboard.area_id)
            .await?
        {
            return Ok(false);
        }

        let granted = self
            .access_repo
            .dashboard_grant_exists(principal.user_id, dashboard_id)
            .await?;
        Ok(granted)
    }

    pub async fn ensure_area_access(
        &self,
        principal: &Principal,
        area_id: AreaId,
    ) -> ApplicationResult<()> {
        if self.authorize_area_access(principal, area_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("no access to this area"))
        }
    }

    pub async fn ensure_dashboard_access(
        &self,
        principal: &Principal,
        dashboard_id: DashboardId,
    ) -> ApplicationResult<()> {
        if self
            .authorize_dashboard_access(principal, dashboard_id)
            .await?
        {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("no access to this dashboard"))
        }
    }
}
