use crate::domain::area::Area;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Area> for AreaDto {
    fn from(area: Area) -> Self {
        Self {
            id: area.id.into(),
            name: area.name.to_string(),
            created_at: area.created_at,
        }
    }
}
