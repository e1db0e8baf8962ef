pub mod entity;
pub mod repository;

pub use entity::{Dashboard, DashboardId, DashboardUpdate, DashboardView, NewDashboard};
pub use repository::DashboardRepository;
