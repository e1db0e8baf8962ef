mod create;
mod delete;
mod service;
mod track_access;
mod update;

pub use create::CreateDashboardCommand;
pub use service::DashboardCommandService;
pub use update::UpdateDashboardCommand;
