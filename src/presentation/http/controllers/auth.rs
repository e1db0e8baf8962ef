// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        ForgotPasswordCommand, LoginCommand, ResetPasswordCommand, UpdateProfileCommand,
    },
    dto::{AuthTokenDto, UserWithAreasDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserWithAreasDto,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(
            LoginCommand {
                email: payload.email,
                password: payload.password,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
) -> HttpResult<Json<UserWithAreasDto>> {
    state
        .services
        .user_queries
        .profile(&principal)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserWithAreasDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &principal,
            UpdateProfileCommand {
                name: payload.name,
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
            meta,
        )
        .await
        .into_http()
        .map(Json)
}

/// Cheap token probe: the extractor does the work, the handler only
/// confirms it passed.
pub async fn validate(Authenticated(_principal): Authenticated) -> Json<ValidateResponse> {
    Json(ValidateResponse { valid: true })
}

pub async fn forgot_password(
    Extension(state): Extension<HttpState>,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<ForgotPasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .forgot_password(ForgotPasswordCommand { email: payload.email }, meta)
        .await
        .into_http()?;

    // Always the same answer, whether or not the account exists.
    Ok(Json(MessageResponse {
        message: "if the account exists, a reset link has been sent".into(),
    }))
}

pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .reset_password(
            ResetPasswordCommand {
                token: payload.token,
                new_password: payload.new_password,
            },
            meta,
        )
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "password has been reset".into(),
    }))
}
