pub mod access;
pub mod area;
pub mod audit;
pub mod dashboard;
pub mod errors;
pub mod user;
