mod csv;
mod service;

pub use service::{AuditQueryService, LogQuery};
