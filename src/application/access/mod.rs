pub mod authorize;
pub mod grants;
pub mod service;

pub use authorize::ensure_admin;
pub use grants::{GrantDashboardAccessCommand, RevokeDashboardAccessCommand};
pub use service::AccessPolicyService;
