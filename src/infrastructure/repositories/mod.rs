pub mod error;
pub mod postgres_access;
pub mod postgres_area;
pub mod postgres_audit_log;
pub mod postgres_dashboard;
pub mod postgres_user;

pub use error::map_sqlx;
pub use postgres_access::PostgresAccessRepository;
pub use postgres_area::PostgresAreaRepository;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_dashboard::PostgresDashboardRepository;
pub use postgres_user::PostgresUserRepository;
