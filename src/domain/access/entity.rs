// src/domain/access/entity.rs
use crate::domain::area::AreaId;
use crate::domain::dashboard::DashboardId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Tier-2 grant: user may see an area (and request dashboards under it).
#[derive(Debug, Clone)]
pub struct AreaGrant {
    pub user_id: UserId,
    pub area_id: AreaId,
    pub created_at: DateTime<Utc>,
}

/// Tier-3 grant: user may see one specific dashboard. Only valid while the
/// matching tier-2 grant exists; that prerequisite is enforced at grant time.
#[derive(Debug, Clone)]
pub struct DashboardGrant {
    pub user_id: UserId,
    pub dashboard_id: DashboardId,
    pub granted_by: Option<UserId>,
    pub granted_at: DateTime<Utc>,
}
