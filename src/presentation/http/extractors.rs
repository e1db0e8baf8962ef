// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::{Principal, RequestMeta},
        error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from(ApplicationError::infrastructure("application state missing"))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from(ApplicationError::unauthorized("missing bearer token"))
            })?;

        let principal = app_state
            .services
            .token_manager()
            .authenticate(header.token())
            .await
            .map_err(HttpError::from)?;

        Ok(Self(principal))
    }
}

/// Best-effort client metadata for the audit trail. Never rejects; a
/// request without the headers just audits without them.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta(pub RequestMeta);

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let user_agent = parts
            .headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        Ok(Self(RequestMeta {
            ip_address,
            user_agent,
        }))
    }
}
