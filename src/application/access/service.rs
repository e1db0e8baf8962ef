use std::sync::Arc;

use crate::application::audit::AuditRecorder;
use crate::application::ports::time::Clock;
use crate::domain::access::AccessRepository;
use crate::domain::dashboard::DashboardRepository;
use crate::domain::user::UserRepository;

/// Decides, per request, whether a principal may see or modify a resource,
/// and owns the dashboard-grant lifecycle.
pub struct AccessPolicyService {
    pub(super) access_repo: Arc<dyn AccessRepository>,
    pub(super) dashboard_repo: Arc<dyn DashboardRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) recorder: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccessPolicyService {
    pub fn new(
        access_repo: Arc<dyn AccessRepository>,
        dashboard_repo: Arc<dyn DashboardRepository>,
        user_repo: Arc<dyn UserRepository>,
        recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            access_repo,
            dashboard_repo,
            user_repo,
            recorder,
            clock,
        }
    }
}
