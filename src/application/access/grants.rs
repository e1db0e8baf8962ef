use super::{AccessPolicyService, authorize::ensure_admin};
use crate::application::{
    audit::AuditEntry,
    dto::{DashboardGrantDto, Principal, RequestMeta},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::audit::LogLevel;
use crate::domain::{dashboard::DashboardId, user::UserId};
use serde_json::json;

pub struct GrantDashboardAccessCommand {
    pub user_id: i64,
    pub dashboard_id: i64,
}

pub struct RevokeDashboardAccessCommand {
    pub user_id: i64,
    pub dashboard_id: i64,
}

impl AccessPolicyService {
    /// Grant a user access to a specific dashboard. The target must already
    /// hold the area grant for the dashboard's area; a re-grant refreshes
    /// granted_by/granted_at instead of erroring.
    pub async fn grant_dashboard_access(
        &self,
        actor: &Principal,
        command: GrantDashboardAccessCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<DashboardGrantDto> {
        ensure_admin(actor)?;

        let user_id = UserId::new(command.user_id)?;
        let dashboard_id = DashboardId::new(command.dashboard_id)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let dashboard = self
            .dashboard_repo
            .find_by_id(dashboard_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("dashboard not found"))?;

        if !self
            .access_repo
            .area_grant_exists(user_id, dashboard.area_id)
            .await?
        {
            return Err(ApplicationError::conflict(
                "user has no access to the dashboard's area",
            ));
        }

        let grant = self
            .access_repo
            .upsert_dashboard_grant(user_id, dashboard_id, actor.user_id, self.clock.now())
            .await?;

        self.recorder
            .record(
                AuditEntry::new("DASHBOARD_ACCESS_GRANTED")
                    .entity_type("PERMISSION")
                    .entity_id(i64::from(dashboard_id))
                    .user_id(i64::from(user_id))
                    .admin_id(i64::from(actor.user_id))
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent)
                    .new_data(json!({
                        "userId": i64::from(user_id),
                        "dashboardId": i64::from(dashboard_id),
                        "dashboardName": dashboard.name,
                    })),
            )
            .await;

        Ok(grant.into())
    }

    pub async fn revoke_dashboard_access(
        &self,
        actor: &Principal,
        command: RevokeDashboardAccessCommand,
        meta: RequestMeta,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;

        let user_id = UserId::new(command.user_id)?;
        let dashboard_id = DashboardId::new(command.dashboard_id)?;

        let deleted = self
            .access_repo
            .delete_dashboard_grant(user_id, dashboard_id)
            .await?;
        if !deleted {
            return Err(ApplicationError::not_found("dashboard grant not found"));
        }

        self.recorder
            .record(
                AuditEntry::new("DASHBOARD_ACCESS_REVOKED")
                    .entity_type("PERMISSION")
                    .entity_id(i64::from(dashboard_id))
                    .user_id(i64::from(user_id))
                    .admin_id(i64::from(actor.user_id))
                    .level(LogLevel::Warn)
                    .ip_address(meta.ip_address)
                    .user_agent(meta.user_agent),
            )
            .await;

        Ok(())
    }

    pub async fn grants_for_user(
        &self,
        actor: &Principal,
        user_id: i64,
    ) -> ApplicationResult<Vec<DashboardGrantDto>> {
        ensure_admin(actor)?;
        let user_id = UserId::new(user_id)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let grants = self.access_repo.dashboard_grants_for_user(user_id).await?;
        Ok(grants.into_iter().map(Into::into).collect())
    }
}
