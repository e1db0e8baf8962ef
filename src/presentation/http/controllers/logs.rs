// src/presentation/http/controllers/logs.rs
use crate::application::{
    dto::{AuditLogPageDto, AuditStatsDto, CleanupReportDto},
    queries::audit::LogQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, HeaderValue, header},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct LogParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub user_id: Option<i64>,
    pub admin_id: Option<i64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl From<LogParams> for LogQuery {
    fn from(params: LogParams) -> Self {
        LogQuery {
            page: params.page,
            limit: params.limit,
            action: params.action,
            entity_type: params.entity_type,
            user_id: params.user_id,
            admin_id: params.admin_id,
            start: params.start,
            end: params.end,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CleanupParams {
    pub older_than_days: i64,
}

#[derive(Debug, Deserialize)]
pub struct RangeCleanupParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub async fn get_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<LogParams>,
) -> HttpResult<Json<AuditLogPageDto>> {
    state
        .services
        .audit_queries
        .get_logs(&actor, params.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<StatsParams>,
) -> HttpResult<Json<AuditStatsDto>> {
    state
        .services
        .audit_queries
        .get_stats(&actor, params.days)
        .await
        .into_http()
        .map(Json)
}

pub async fn export_csv(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<LogParams>,
) -> HttpResult<(HeaderMap, String)> {
    let csv = state
        .services
        .audit_queries
        .export_csv(&actor, params.into())
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"audit-logs.csv\""),
    );
    Ok((headers, csv))
}

pub async fn clean_old_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Query(params): Query<CleanupParams>,
) -> HttpResult<Json<CleanupReportDto>> {
    state
        .services
        .audit_maintenance
        .clean_old_logs(&actor, params.older_than_days, meta)
        .await
        .into_http()
        .map(Json)
}

pub async fn clean_logs_by_range(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Query(params): Query<RangeCleanupParams>,
) -> HttpResult<Json<CleanupReportDto>> {
    state
        .services
        .audit_maintenance
        .clean_by_date_range(&actor, params.start, params.end, meta)
        .await
        .into_http()
        .map(Json)
}
