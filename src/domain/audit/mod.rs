pub mod entity;
pub mod repository;

pub use entity::{AuditLog, AuditLogFilter, AuditStats, LogLevel, NewAuditLog};
pub use repository::AuditLogRepository;
