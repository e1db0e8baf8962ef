use crate::domain::access::DashboardGrant;
use crate::domain::dashboard::DashboardView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    pub area_id: i64,
    pub area_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DashboardView> for DashboardDto {
    fn from(view: DashboardView) -> Self {
        let d = view.dashboard;
        Self {
            id: d.id.into(),
            name: d.name,
            url: d.url,
            information: d.information,
            area_id: d.area_id.into(),
            area_name: view.area_name,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardGrantDto {
    pub user_id: i64,
    pub dashboard_id: i64,
    pub granted_by: Option<i64>,
    pub granted_at: DateTime<Utc>,
}

impl From<DashboardGrant> for DashboardGrantDto {
    fn from(grant: DashboardGrant) -> Self {
        Self {
            user_id: grant.user_id.into(),
            dashboard_id: grant.dashboard_id.into(),
            granted_by: grant.granted_by.map(Into::into),
            granted_at: grant.granted_at,
        }
    }
}
