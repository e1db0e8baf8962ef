// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate defaults. Both operations are CPU-bound and
/// run on the blocking pool so the async executor keeps serving
/// requests while a hash computes.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn hash_failed(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("password hashing failed: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(hash_failed)?;
            Ok(hash.to_string())
        })
        .await
        .map_err(hash_failed)?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let verified = tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(hash_failed)?;
            Ok::<bool, ApplicationError>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
            )
        })
        .await
        .map_err(hash_failed)??;

        if verified {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
