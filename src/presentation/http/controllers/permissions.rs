// src/presentation/http/controllers/permissions.rs
use crate::application::{
    access::{GrantDashboardAccessCommand, RevokeDashboardAccessCommand},
    dto::DashboardGrantDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GrantRequest {
    pub user_id: i64,
    pub dashboard_id: i64,
}

pub async fn grant_access(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<GrantRequest>,
) -> HttpResult<(StatusCode, Json<DashboardGrantDto>)> {
    let grant = state
        .services
        .access_policy
        .grant_dashboard_access(
            &actor,
            GrantDashboardAccessCommand {
                user_id: payload.user_id,
                dashboard_id: payload.dashboard_id,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(grant)))
}

pub async fn revoke_access(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<GrantRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .access_policy
        .revoke_dashboard_access(
            &actor,
            RevokeDashboardAccessCommand {
                user_id: payload.user_id,
                dashboard_id: payload.dashboard_id,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_user_grants(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(user_id): Path<i64>,
) -> HttpResult<Json<Vec<DashboardGrantDto>>> {
    state
        .services
        .access_policy
        .grants_for_user(&actor, user_id)
        .await
        .into_http()
        .map(Json)
}
