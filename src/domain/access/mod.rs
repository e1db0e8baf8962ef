pub mod entity;
pub mod repository;

pub use entity::{AreaGrant, DashboardGrant};
pub use repository::AccessRepository;
