mod service;

pub use service::AuditMaintenanceService;
