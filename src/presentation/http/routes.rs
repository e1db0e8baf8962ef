// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{areas, auth, dashboards, logs, permissions, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{delete, get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::profile).put(auth::update_profile))
        .route("/api/auth/validate", get(auth::validate))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/areas", get(areas::list_areas).post(areas::create_area))
        .route(
            "/api/areas/{id}",
            get(areas::get_area)
                .put(areas::update_area)
                .delete(areas::delete_area),
        )
        .route(
            "/api/dashboards",
            get(dashboards::list_dashboards).post(dashboards::create_dashboard),
        )
        .route(
            "/api/dashboards/{id}",
            get(dashboards::get_dashboard)
                .put(dashboards::update_dashboard)
                .delete(dashboards::delete_dashboard),
        )
        .route("/api/dashboards/{id}/access", post(dashboards::track_access))
        .route(
            "/api/dashboard-permissions/grant",
            post(permissions::grant_access),
        )
        .route(
            "/api/dashboard-permissions/revoke",
            post(permissions::revoke_access),
        )
        .route(
            "/api/dashboard-permissions/user/{user_id}",
            get(permissions::list_user_grants),
        )
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/logs", get(logs::get_logs).delete(logs::clean_old_logs))
        .route("/api/logs/range", delete(logs::clean_logs_by_range))
        .route("/api/logs/stats", get(logs::get_stats))
        .route("/api/logs/export", get(logs::export_csv))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
