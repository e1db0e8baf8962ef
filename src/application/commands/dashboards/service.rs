use std::sync::Arc;

use crate::application::access::AccessPolicyService;
use crate::application::audit::AuditRecorder;
use crate::application::ports::time::Clock;
use crate::domain::{area::AreaRepository, dashboard::DashboardRepository};

pub struct DashboardCommandService {
    pub(super) dashboard_repo: Arc<dyn DashboardRepository>,
    pub(super) area_repo: Arc<dyn AreaRepository>,
    pub(super) policy: Arc<AccessPolicyService>,
    pub(super) recorder: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DashboardCommandService {
    pub fn new(
        dashboard_repo: Arc<dyn DashboardRepository>,
        area_repo: Arc<dyn AreaRepository>,
        policy: Arc<AccessPolicyService>,
        recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            dashboard_repo,
            area_repo,
            policy,
            recorder,
            clock,
        }
    }
}
