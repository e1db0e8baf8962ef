// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::area::AreaId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserSummary, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, name, password_hash, role, reset_token, \
                            reset_token_expiry, created_at, updated_at";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: Option<String>,
    password_hash: String,
    role: String,
    reset_token: Option<String>,
    reset_token_expiry: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            name: row.name,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            reset_token: row.reset_token,
            reset_token_expiry: row.reset_token_expiry,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    name: Option<String>,
    email: String,
}

impl TryFrom<SummaryRow> for UserSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(UserSummary {
            id: UserId::new(row.id)?,
            name: row.name,
            email: Email::new(row.email)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser, area_ids: Vec<AreaId>) -> DomainResult<User> {
        let NewUser {
            email,
            name,
            password_hash,
            role,
            created_at,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, name, password_hash, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, email, name, password_hash, role, reset_token,
                       reset_token_expiry, created_at, updated_at",
        )
        .bind(email.as_str())
        .bind(&name)
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for area_id in &area_ids {
            sqlx::query("INSERT INTO user_area_access (user_id, area_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(i64::from(*area_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_reset_token(&self, token: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE reset_token = $1"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return self
                .find_by_id(update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("user not found".into()));
        }

        let mut builder = QueryBuilder::new("UPDATE users SET updated_at = now()");

        if let Some(email) = &update.email {
            builder.push(", email = ").push_bind(email.as_str());
        }
        if let Some(name) = &update.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(role) = &update.role {
            builder.push(", role = ").push_bind(role.as_str());
        }
        if let Some(hash) = &update.password_hash {
            builder.push(", password_hash = ").push_bind(hash.as_str());
        }
        if let Some(token) = &update.reset_token {
            builder.push(", reset_token = ").push_bind(token.clone());
        }
        if let Some(expiry) = &update.reset_token_expiry {
            builder.push(", reset_token_expiry = ").push_bind(*expiry);
        }

        builder
            .push(" WHERE id = ")
            .push_bind(i64::from(update.id))
            .push(format!(" RETURNING {USER_COLUMNS}"));

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn summaries_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<UserSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT id, name, email FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(UserSummary::try_from).collect()
    }
}
