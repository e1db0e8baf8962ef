use crate::domain::area::AreaId;
use crate::domain::dashboard::{Dashboard, DashboardId, DashboardUpdate, DashboardView, NewDashboard};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn insert(&self, new_dashboard: NewDashboard) -> DomainResult<DashboardView>;
    async fn find_by_id(&self, id: DashboardId) -> DomainResult<Option<Dashboard>>;
    async fn find_view(&self, id: DashboardId) -> DomainResult<Option<DashboardView>>;
    /// All dashboards, ordered by area then name.
    async fn list(&self) -> DomainResult<Vec<DashboardView>>;
    /// Exactly the dashboards the user holds a dashboard-level grant for.
    async fn list_granted(&self, user_id: UserId) -> DomainResult<Vec<DashboardView>>;
    async fn update(&self, update: DashboardUpdate) -> DomainResult<DashboardView>;
    async fn delete(&self, id: DashboardId) -> DomainResult<()>;
    async fn count_by_area(&self, area_id: AreaId) -> DomainResult<u64>;
}
