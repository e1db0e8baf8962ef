mod create;
mod delete;
mod service;
mod update;

pub use create::CreateAreaCommand;
pub use service::AreaCommandService;
pub use update::UpdateAreaCommand;
