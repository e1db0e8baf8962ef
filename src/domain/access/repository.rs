use crate::domain::access::{AreaGrant, DashboardGrant};
use crate::domain::area::{Area, AreaId};
use crate::domain::dashboard::DashboardId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AccessRepository: Send + Sync {
    async fn area_grant_exists(&self, user_id: UserId, area_id: AreaId) -> DomainResult<bool>;
    /// Areas reachable through the user's tier-2 grants, ordered by name.
    async fn areas_for_user(&self, user_id: UserId) -> DomainResult<Vec<Area>>;
    async fn count_for_area(&self, area_id: AreaId) -> DomainResult<u64>;
    /// Replace the user's whole area-grant set in one transaction.
    async fn replace_area_grants(&self, user_id: UserId, area_ids: Vec<AreaId>)
        -> DomainResult<Vec<AreaGrant>>;

    async fn dashboard_grant_exists(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool>;
    /// Upsert semantics: a re-grant updates granted_by/granted_at instead of
    /// erroring on the composite key.
    async fn upsert_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
        granted_by: UserId,
        granted_at: DateTime<Utc>,
    ) -> DomainResult<DashboardGrant>;
    /// Returns false when no grant existed.
    async fn delete_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool>;
    async fn dashboard_grants_for_user(&self, user_id: UserId)
        -> DomainResult<Vec<DashboardGrant>>;
}
