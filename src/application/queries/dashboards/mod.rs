mod service;

pub use service::DashboardQueryService;
