pub mod areas;
pub mod auth;
pub mod dashboards;
pub mod logs;
pub mod permissions;
pub mod users;
