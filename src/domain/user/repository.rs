use crate::domain::area::AreaId;
use crate::domain::errors::DomainResult;
use crate::domain::user::{Email, NewUser, User, UserId, UserSummary, UserUpdate};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user together with its initial area grants in one
    /// transaction; either everything commits or nothing does.
    async fn insert(&self, new_user: NewUser, area_ids: Vec<AreaId>) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
    async fn find_by_reset_token(&self, token: &str) -> DomainResult<Option<User>>;
    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
    async fn delete(&self, id: UserId) -> DomainResult<()>;
    async fn list(&self) -> DomainResult<Vec<User>>;
    /// Batch lookup for audit denormalization; one query, not N+1.
    async fn summaries_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<UserSummary>>;
}
