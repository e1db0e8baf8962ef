use crate::domain::area::{Area, AreaId, AreaName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AreaRepository: Send + Sync {
    async fn insert(&self, name: AreaName) -> DomainResult<Area>;
    async fn find_by_id(&self, id: AreaId) -> DomainResult<Option<Area>>;
    async fn find_by_name(&self, name: &AreaName) -> DomainResult<Option<Area>>;
    /// All areas, ordered by name.
    async fn list(&self) -> DomainResult<Vec<Area>>;
    async fn update_name(&self, id: AreaId, name: AreaName) -> DomainResult<Area>;
    async fn delete(&self, id: AreaId) -> DomainResult<()>;
}
