pub mod entity;
pub mod repository;

pub use entity::{Area, AreaId, AreaName};
pub use repository::AreaRepository;
