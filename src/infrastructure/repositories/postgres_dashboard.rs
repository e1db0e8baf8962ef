// src/infrastructure/repositories/postgres_dashboard.rs
use super::map_sqlx;
use crate::domain::area::AreaId;
use crate::domain::dashboard::{
    Dashboard, DashboardId, DashboardRepository, DashboardUpdate, DashboardView, NewDashboard,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const VIEW_SELECT: &str = "SELECT d.id, d.name, d.url, d.information, d.area_id, \
                           d.created_at, d.updated_at, a.name AS area_name \
                           FROM dashboards d JOIN areas a ON a.id = d.area_id";

#[derive(Debug, FromRow)]
struct DashboardRow {
    id: i64,
    name: String,
    url: String,
    information: Option<String>,
    area_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DashboardRow> for Dashboard {
    type Error = DomainError;

    fn try_from(row: DashboardRow) -> Result<Self, Self::Error> {
        Ok(Dashboard {
            id: DashboardId::new(row.id)?,
            name: row.name,
            url: row.url,
            information: row.information,
            area_id: AreaId::new(row.area_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DashboardViewRow {
    id: i64,
    name: String,
    url: String,
    information: Option<String>,
    area_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    area_name: String,
}

impl TryFrom<DashboardViewRow> for DashboardView {
    type Error = DomainError;

    fn try_from(row: DashboardViewRow) -> Result<Self, Self::Error> {
        Ok(DashboardView {
            dashboard: Dashboard {
                id: DashboardId::new(row.id)?,
                name: row.name,
                url: row.url,
                information: row.information,
                area_id: AreaId::new(row.area_id)?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            area_name: row.area_name,
        })
    }
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    async fn insert(&self, new_dashboard: NewDashboard) -> DomainResult<DashboardView> {
        let NewDashboard {
            name,
            url,
            information,
            area_id,
            created_at,
        } = new_dashboard;

        let row = sqlx::query_as::<_, DashboardViewRow>(
            "WITH inserted AS (
                 INSERT INTO dashboards (name, url, information, area_id, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $5)
                 RETURNING id, name, url, information, area_id, created_at, updated_at
             )
             SELECT i.id, i.name, i.url, i.information, i.area_id, i.created_at, i.updated_at,
                    a.name AS area_name
             FROM inserted i JOIN areas a ON a.id = i.area_id",
        )
        .bind(&name)
        .bind(&url)
        .bind(&information)
        .bind(i64::from(area_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        DashboardView::try_from(row)
    }

    async fn find_by_id(&self, id: DashboardId) -> DomainResult<Option<Dashboard>> {
        let row = sqlx::query_as::<_, DashboardRow>(
            "SELECT id, name, url, information, area_id, created_at, updated_at
             FROM dashboards WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Dashboard::try_from).transpose()
    }

    async fn find_view(&self, id: DashboardId) -> DomainResult<Option<DashboardView>> {
        let row = sqlx::query_as::<_, DashboardViewRow>(&format!(
            "{VIEW_SELECT} WHERE d.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(DashboardView::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<DashboardView>> {
        let rows = sqlx::query_as::<_, DashboardViewRow>(&format!(
            "{VIEW_SELECT} ORDER BY a.name, d.name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(DashboardView::try_from).collect()
    }

    async fn list_granted(&self, user_id: UserId) -> DomainResult<Vec<DashboardView>> {
        let rows = sqlx::query_as::<_, DashboardViewRow>(&format!(
            "{VIEW_SELECT} JOIN user_dashboard_access g ON g.dashboard_id = d.id \
             WHERE g.user_id = $1 ORDER BY a.name, d.name"
        ))
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(DashboardView::try_from).collect()
    }

    async fn update(&self, update: DashboardUpdate) -> DomainResult<DashboardView> {
        let DashboardUpdate {
            id,
            name,
            url,
            information,
            area_id,
        } = update;

        let row = sqlx::query_as::<_, DashboardViewRow>(
            "WITH updated AS (
                 UPDATE dashboards
                 SET name = $2, url = $3, information = $4, area_id = $5, updated_at = now()
                 WHERE id = $1
                 RETURNING id, name, url, information, area_id, created_at, updated_at
             )
             SELECT u.id, u.name, u.url, u.information, u.area_id, u.created_at, u.updated_at,
                    a.name AS area_name
             FROM updated u JOIN areas a ON a.id = u.area_id",
        )
        .bind(i64::from(id))
        .bind(&name)
        .bind(&url)
        .bind(&information)
        .bind(i64::from(area_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("dashboard not found".into()))?;

        DashboardView::try_from(row)
    }

    async fn delete(&self, id: DashboardId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM dashboards WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("dashboard not found".into()));
        }
        Ok(())
    }

    async fn count_by_area(&self, area_id: AreaId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM dashboards WHERE area_id = $1")
            .bind(i64::from(area_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }
}
