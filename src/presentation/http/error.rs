// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application error plus the status it maps to. Built at the handler
/// boundary via `IntoHttpResult`; handlers never construct one by hand.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

fn status_of(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Conflict(_) => StatusCode::CONFLICT,
        ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Domain(domain_err) => match domain_err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        let status = status_of(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
            // Storage details stay out of response bodies.
            return Self {
                status,
                message: "internal error".to_string(),
            };
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from)
    }
}
