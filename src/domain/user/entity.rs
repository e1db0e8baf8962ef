// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub reset_token: Option<String>,
    pub reset_token_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn reset_token_is_valid(&self, now: DateTime<Utc>) -> bool {
        match (&self.reset_token, self.reset_token_expiry) {
            (Some(_), Some(expiry)) => now <= expiry,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: Option<Email>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<PasswordHash>,
    /// `Some(None)` clears the reset fields; `None` leaves them untouched.
    pub reset_token: Option<Option<String>>,
    pub reset_token_expiry: Option<Option<DateTime<Utc>>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            name: None,
            role: None,
            password_hash: None,
            reset_token: None,
            reset_token_expiry: None,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_reset_token(mut self, token: Option<String>) -> Self {
        self.reset_token = Some(token);
        self
    }

    pub fn with_reset_token_expiry(mut self, expiry: Option<DateTime<Utc>>) -> Self {
        self.reset_token_expiry = Some(expiry);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
            && self.reset_token.is_none()
            && self.reset_token_expiry.is_none()
    }
}

/// Lightweight projection used to denormalize audit rows without dragging
/// the full entity (and its password hash) around.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Email,
}
