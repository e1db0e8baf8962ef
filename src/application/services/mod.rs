use std::sync::Arc;

use crate::application::{
    access::AccessPolicyService,
    audit::AuditRecorder,
    commands::{
        areas::AreaCommandService, audit::AuditMaintenanceService,
        dashboards::DashboardCommandService, users::UserCommandService,
    },
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::ResetTokenGenerator,
    },
    queries::{
        areas::AreaQueryService, audit::AuditQueryService, dashboards::DashboardQueryService,
        users::UserQueryService,
    },
};
use crate::domain::{
    access::AccessRepository, area::AreaRepository, audit::AuditLogRepository,
    dashboard::DashboardRepository, user::UserRepository,
};

/// Everything the application layer exposes, wired once at startup and
/// shared behind an `Arc` by the HTTP layer.
pub struct ApplicationServices {
    pub access_policy: Arc<AccessPolicyService>,
    pub user_commands: UserCommandService,
    pub area_commands: AreaCommandService,
    pub dashboard_commands: DashboardCommandService,
    pub audit_maintenance: AuditMaintenanceService,
    pub user_queries: UserQueryService,
    pub area_queries: AreaQueryService,
    pub dashboard_queries: DashboardQueryService,
    pub audit_queries: AuditQueryService,
    token_manager: Arc<dyn TokenManager>,
}

pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub area_repo: Arc<dyn AreaRepository>,
    pub dashboard_repo: Arc<dyn DashboardRepository>,
    pub access_repo: Arc<dyn AccessRepository>,
    pub audit_repo: Arc<dyn AuditLogRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub reset_tokens: Arc<dyn ResetTokenGenerator>,
    pub clock: Arc<dyn Clock>,
    pub audit_enabled: bool,
    pub audit_retention_floor_days: i64,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let recorder = Arc::new(AuditRecorder::new(
            Arc::clone(&deps.audit_repo),
            Arc::clone(&deps.clock),
            deps.audit_enabled,
        ));

        let access_policy = Arc::new(AccessPolicyService::new(
            Arc::clone(&deps.access_repo),
            Arc::clone(&deps.dashboard_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&recorder),
            Arc::clone(&deps.clock),
        ));

        let user_commands = UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.area_repo),
            Arc::clone(&deps.access_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            Arc::clone(&deps.reset_tokens),
            Arc::clone(&recorder),
            Arc::clone(&deps.clock),
        );

        let area_commands = AreaCommandService::new(
            Arc::clone(&deps.area_repo),
            Arc::clone(&deps.dashboard_repo),
            Arc::clone(&deps.access_repo),
            Arc::clone(&recorder),
            Arc::clone(&deps.clock),
        );

        let dashboard_commands = DashboardCommandService::new(
            Arc::clone(&deps.dashboard_repo),
            Arc::clone(&deps.area_repo),
            Arc::clone(&access_policy),
            Arc::clone(&recorder),
            Arc::clone(&deps.clock),
        );

        let audit_maintenance = AuditMaintenanceService::new(
            Arc::clone(&deps.audit_repo),
            Arc::clone(&recorder),
            Arc::clone(&deps.clock),
            deps.audit_retention_floor_days,
        );

        let user_queries = UserQueryService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.area_repo),
            Arc::clone(&deps.access_repo),
        );

        let area_queries = AreaQueryService::new(
            Arc::clone(&deps.area_repo),
            Arc::clone(&deps.access_repo),
            Arc::clone(&access_policy),
        );

        let dashboard_queries = DashboardQueryService::new(
            Arc::clone(&deps.dashboard_repo),
            Arc::clone(&access_policy),
        );

        let audit_queries = AuditQueryService::new(
            Arc::clone(&deps.audit_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.clock),
        );

        Self {
            access_policy,
            user_commands,
            area_commands,
            dashboard_commands,
            audit_maintenance,
            user_queries,
            area_queries,
            dashboard_queries,
            audit_queries,
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> &Arc<dyn TokenManager> {
        &self.token_manager
    }
}
