pub mod areas;
pub mod audit;
pub mod auth;
pub mod dashboards;
pub mod pagination;
pub mod users;

pub use areas::AreaDto;
pub use audit::{AuditLogDto, AuditLogPageDto, AuditStatsDto, CleanupReportDto, UserRefDto};
pub use auth::{AuthTokenDto, Principal, RequestMeta, TokenSubject};
pub use dashboards::{DashboardDto, DashboardGrantDto};
pub use pagination::Pagination;
pub use users::{UserDto, UserWithAreasDto};
