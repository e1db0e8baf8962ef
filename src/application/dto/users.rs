use crate::application::dto::areas::AreaDto;
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public shape of a user. The password hash never crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.to_string(),
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// User plus the areas reachable through their grants; the shape returned by
/// login, profile, and the admin user listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithAreasDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub areas: Vec<AreaDto>,
}

impl UserWithAreasDto {
    pub fn new(user: User, areas: Vec<AreaDto>) -> Self {
        Self {
            user: user.into(),
            areas,
        }
    }
}
