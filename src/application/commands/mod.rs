pub mod areas;
pub mod audit;
pub mod dashboards;
pub mod users;
