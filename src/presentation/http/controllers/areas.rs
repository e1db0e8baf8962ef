// src/presentation/http/controllers/areas.rs
use crate::application::{
    commands::areas::{CreateAreaCommand, UpdateAreaCommand},
    dto::AreaDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AreaRequest {
    pub name: String,
}

pub async fn list_areas(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<Vec<AreaDto>>> {
    state
        .services
        .area_queries
        .list_areas(&actor)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_area(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(area_id): Path<i64>,
) -> HttpResult<Json<AreaDto>> {
    state
        .services
        .area_queries
        .get_area(&actor, area_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_area(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<AreaRequest>,
) -> HttpResult<(StatusCode, Json<AreaDto>)> {
    let area = state
        .services
        .area_commands
        .create_area(&actor, CreateAreaCommand { name: payload.name }, meta)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(area)))
}

pub async fn update_area(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(area_id): Path<i64>,
    Json(payload): Json<AreaRequest>,
) -> HttpResult<Json<AreaDto>> {
    state
        .services
        .area_commands
        .update_area(
            &actor,
            UpdateAreaCommand {
                area_id,
                name: payload.name,
            },
            meta,
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_area(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(area_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .area_commands
        .delete_area(&actor, area_id, meta)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
