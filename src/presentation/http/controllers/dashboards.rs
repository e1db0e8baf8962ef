// src/presentation/http/controllers/dashboards.rs
use crate::application::{
    commands::dashboards::{CreateDashboardCommand, UpdateDashboardCommand},
    dto::DashboardDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: i64,
}

#[derive(Debug, Serialize)]
pub struct TrackAccessResponse {
    pub tracked: bool,
}

pub async fn list_dashboards(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<Vec<DashboardDto>>> {
    state
        .services
        .dashboard_queries
        .list_dashboards(&actor)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(dashboard_id): Path<i64>,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_queries
        .get_dashboard(&actor, dashboard_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<DashboardRequest>,
) -> HttpResult<(StatusCode, Json<DashboardDto>)> {
    let dashboard = state
        .services
        .dashboard_commands
        .create_dashboard(
            &actor,
            CreateDashboardCommand {
                name: payload.name,
                url: payload.url,
                information: payload.information,
                area_id: payload.area_id,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(dashboard)))
}

pub async fn update_dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(dashboard_id): Path<i64>,
    Json(payload): Json<DashboardRequest>,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_commands
        .update_dashboard(
            &actor,
            UpdateDashboardCommand {
                dashboard_id,
                name: payload.name,
                url: payload.url,
                information: payload.information,
                area_id: payload.area_id,
            },
            meta,
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(dashboard_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .dashboard_commands
        .delete_dashboard(&actor, dashboard_id, meta)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn track_access(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(dashboard_id): Path<i64>,
) -> HttpResult<Json<TrackAccessResponse>> {
    state
        .services
        .dashboard_commands
        .track_access(&actor, dashboard_id, meta)
        .await
        .into_http()?;

    Ok(Json(TrackAccessResponse { tracked: true }))
}
