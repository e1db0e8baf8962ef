// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, Principal, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    email: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Stateless HS256 bearer tokens. Verification needs only the shared
/// secret; there is no server-side session to revoke.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: i64::from(subject.user_id),
            email: subject.email,
            role: subject.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<Principal> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => ApplicationError::unauthorized("token expired"),
                _ => ApplicationError::unauthorized("invalid token"),
            }
        })?;

        let claims = data.claims;
        let user_id = UserId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
        let role = Role::from_str(&claims.role)
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;

        Ok(Principal {
            user_id,
            email: claims.email,
            role,
            issued_at: timestamp_to_datetime(claims.iat)?,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }
}

fn timestamp_to_datetime(ts: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_back_to_the_same_principal() {
        let manager = JwtTokenManager::new("test-secret", 3600);
        let issued = manager
            .issue(TokenSubject {
                user_id: UserId::new(42).unwrap(),
                email: "ops@example.com".into(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        let principal = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(i64::from(principal.user_id), 42);
        assert_eq!(principal.email, "ops@example.com");
        assert!(principal.is_admin());
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let manager = JwtTokenManager::new("test-secret", 3600);
        let other = JwtTokenManager::new("other-secret", 3600);
        let issued = other
            .issue(TokenSubject {
                user_id: UserId::new(1).unwrap(),
                email: "a@b.c".into(),
                role: Role::User,
            })
            .await
            .unwrap();

        let err = manager.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_not_a_token() {
        let manager = JwtTokenManager::new("test-secret", 3600);
        assert!(manager.authenticate("not-a-jwt").await.is_err());
    }
}
