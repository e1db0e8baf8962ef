// src/domain/dashboard/entity.rs
use crate::domain::area::AreaId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DashboardId(pub i64);

impl DashboardId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "dashboard id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DashboardId> for i64 {
    fn from(value: DashboardId) -> Self {
        value.0
    }
}

/// A dashboard belongs to exactly one area.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub id: DashboardId,
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: AreaId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDashboard {
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: AreaId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DashboardUpdate {
    pub id: DashboardId,
    pub name: String,
    pub url: String,
    pub information: Option<String>,
    pub area_id: AreaId,
}

/// Read model for listings; carries the denormalized area name so
/// responses do not need a second lookup.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub dashboard: Dashboard,
    pub area_name: String,
}
