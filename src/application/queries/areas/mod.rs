mod service;

pub use service::AreaQueryService;
