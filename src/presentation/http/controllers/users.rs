// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{CreateUserCommand, UpdateUserCommand},
    dto::UserWithAreasDto,
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role: Option<Role>,
    #[serde(default)]
    pub area_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub area_ids: Option<Vec<i64>>,
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<Vec<UserWithAreasDto>>> {
    state
        .services
        .user_queries
        .list_users(&actor)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(user_id): Path<i64>,
) -> HttpResult<Json<UserWithAreasDto>> {
    state
        .services
        .user_queries
        .get_user(&actor, user_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<UserWithAreasDto>)> {
    let user = state
        .services
        .user_commands
        .create_user(
            &actor,
            CreateUserCommand {
                email: payload.email,
                password: payload.password,
                name: payload.name,
                role: payload.role,
                area_ids: payload.area_ids,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserWithAreasDto>> {
    state
        .services
        .user_commands
        .update_user(
            &actor,
            UpdateUserCommand {
                user_id,
                email: payload.email,
                name: payload.name,
                password: payload.password,
                role: payload.role,
                area_ids: payload.area_ids,
            },
            meta,
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(user_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(&actor, user_id, meta)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
