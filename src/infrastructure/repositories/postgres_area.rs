// src/infrastructure/repositories/postgres_area.rs
use super::map_sqlx;
use crate::domain::area::{Area, AreaId, AreaName, AreaRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAreaRepository {
    pool: PgPool,
}

impl PostgresAreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
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
impl AreaRepository for PostgresAreaRepository {
    async fn insert(&self, name: AreaName) -> DomainResult<Area> {
        let row = sqlx::query_as::<_, AreaRow>(
            "INSERT INTO areas (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Area::try_from(row)
    }

    async fn find_by_id(&self, id: AreaId) -> DomainResult<Option<Area>> {
        let row = sqlx::query_as::<_, AreaRow>(
            "SELECT id, name, created_at FROM areas WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Area::try_from).transpose()
    }

    async fn find_by_name(&self, name: &AreaName) -> DomainResult<Option<Area>> {
        let row = sqlx::query_as::<_, AreaRow>(
            "SELECT id, name, created_at FROM areas WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Area::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Area>> {
        let rows = sqlx::query_as::<_, AreaRow>(
            "SELECT id, name, created_at FROM areas ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Area::try_from).collect()
    }

    async fn update_name(&self, id: AreaId, name: AreaName) -> DomainResult<Area> {
        let row = sqlx::query_as::<_, AreaRow>(
            "UPDATE areas SET name = $2 WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(i64::from(id))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("area not found".into()))?;

        Area::try_from(row)
    }

    async fn delete(&self, id: AreaId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("area not found".into()));
        }
        Ok(())
    }
}
