// src/infrastructure/repositories/postgres_access.rs
use super::map_sqlx;
use crate::domain::access::{AccessRepository, AreaGrant, DashboardGrant};
use crate::domain::area::{Area, AreaId, AreaName};
use crate::domain::dashboard::DashboardId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAccessRepository {
    pool: PgPool,
}

impl PostgresAccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AreaGrantRow {
    user_id: i64,
    area_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<AreaGrantRow> for AreaGrant {
    type Error = DomainError;

    fn try_from(row: AreaGrantRow) -> Result<Self, Self::Error> {
        Ok(AreaGrant {
            user_id: UserId::new(row.user_id)?,
            area_id: AreaId::new(row.area_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DashboardGrantRow {
    user_id: i64,
    dashboard_id: i64,
    granted_by: Option<i64>,
    granted_at: DateTime<Utc>,
}

impl TryFrom<DashboardGrantRow> for DashboardGrant {
    type Error = DomainError;

    fn try_from(row: DashboardGrantRow) -> Result<Self, Self::Error> {
        Ok(DashboardGrant {
            user_id: UserId::new(row.user_id)?,
            dashboard_id: DashboardId::new(row.dashboard_id)?,
            granted_by: row.granted_by.map(UserId::new).transpose()?,
            granted_at: row.granted_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AreaRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AreaRow> for Area {
    type Error = DomainError;

    fn try_from(row: AreaRow) -> Result<Self, Self::Error> {
        Ok(Area {
            id: AreaId::new(row.id)?,
            name: AreaName::new(row.name)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccessRepository for PostgresAccessRepository {
    async fn area_grant_exists(&self, user_id: UserId, area_id: AreaId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM user_area_access WHERE user_id = $1 AND area_id = $2
             )",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(area_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn areas_for_user(&self, user_id: UserId) -> DomainResult<Vec<Area>> {
        let rows = sqlx::query_as::<_, AreaRow>(
            "SELECT a.id, a.name, a.created_at
             FROM areas a
             JOIN user_area_access g ON g.area_id = a.id
             WHERE g.user_id = $1
             ORDER BY a.name",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Area::try_from).collect()
    }

    async fn count_for_area(&self, area_id: AreaId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM user_area_access WHERE area_id = $1",
        )
        .bind(i64::from(area_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn replace_area_grants(
        &self,
        user_id: UserId,
        area_ids: Vec<AreaId>,
    ) -> DomainResult<Vec<AreaGrant>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM user_area_access WHERE user_id = $1")
            .bind(i64::from(user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut grants = Vec::with_capacity(area_ids.len());
        for area_id in area_ids {
            let row = sqlx::query_as::<_, AreaGrantRow>(
                "INSERT INTO user_area_access (user_id, area_id) VALUES ($1, $2)
                 RETURNING user_id, area_id, created_at",
            )
            .bind(i64::from(user_id))
            .bind(i64::from(area_id))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            grants.push(AreaGrant::try_from(row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(grants)
    }

    async fn dashboard_grant_exists(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM user_dashboard_access WHERE user_id = $1 AND dashboard_id = $2
             )",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(dashboard_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn upsert_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
        granted_by: UserId,
        granted_at: DateTime<Utc>,
    ) -> DomainResult<DashboardGrant> {
        let row = sqlx::query_as::<_, DashboardGrantRow>(
            "INSERT INTO user_dashboard_access (user_id, dashboard_id, granted_by, granted_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, dashboard_id)
             DO UPDATE SET granted_by = EXCLUDED.granted_by, granted_at = EXCLUDED.granted_at
             RETURNING user_id, dashboard_id, granted_by, granted_at",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(dashboard_id))
        .bind(i64::from(granted_by))
        .bind(granted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        DashboardGrant::try_from(row)
    }

    async fn delete_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM user_dashboard_access WHERE user_id = $1 AND dashboard_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(dashboard_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn dashboard_grants_for_user(
        &self,
        user_id: UserId,
    ) -> DomainResult<Vec<DashboardGrant>> {
        let rows = sqlx::query_as::<_, DashboardGrantRow>(
            "SELECT user_id, dashboard_id, granted_by, granted_at
             FROM user_dashboard_access
             WHERE user_id = $1
             ORDER BY granted_at",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(DashboardGrant::try_from).collect()
    }
}
