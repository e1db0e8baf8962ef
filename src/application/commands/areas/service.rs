use std::sync::Arc;

use crate::application::audit::AuditRecorder;
use crate::application::ports::time::Clock;
use crate::domain::{
    access::AccessRepository, area::AreaRepository, dashboard::DashboardRepository,
};

pub struct AreaCommandService {
    pub(super) area_repo: Arc<dyn AreaRepository>,
    pub(super) dashboard_repo: Arc<dyn DashboardRepository>,
    pub(super) access_repo: Arc<dyn AccessRepository>,
    pub(super) recorder: Arc<AuditRecorder>,
    #[allow(dead_code)]
    pub(super) clock: Arc<dyn Clock>,
}

impl AreaCommandService {
    pub fn new(
        area_repo: Arc<dyn AreaRepository>,
        dashboard_repo: Arc<dyn DashboardRepository>,
        access_repo: Arc<dyn AccessRepository>,
        recorder: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            area_repo,
            dashboard_repo,
            access_repo,
            recorder,
            clock,
        }
    }
}
