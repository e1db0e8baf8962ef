// tests/support/mod.rs
// Shared in-memory doubles used by multiple integration test binaries. Some
// symbols are unused in individual test crates; allow the warnings at module
// level to keep CI output clean.
#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use dashgate::application::{
    ApplicationResult,
    dto::{Principal, RequestMeta},
    error::ApplicationError,
    ports::{security::PasswordHasher, time::Clock, util::ResetTokenGenerator},
    services::{ApplicationServices, ServiceDependencies},
};
use dashgate::domain::{
    access::{AccessRepository, AreaGrant, DashboardGrant},
    area::{Area, AreaId, AreaName, AreaRepository},
    audit::{AuditLog, AuditLogFilter, AuditLogRepository, AuditStats, NewAuditLog},
    dashboard::{
        Dashboard, DashboardId, DashboardRepository, DashboardUpdate, DashboardView, NewDashboard,
    },
    errors::{DomainError, DomainResult},
    user::{
        Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, UserSummary, UserUpdate,
    },
};
use dashgate::infrastructure::security::JwtTokenManager;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// One shared backing store so the repository doubles see each other's rows,
/// the way the real tables do through foreign keys.
#[derive(Default)]
pub struct MemStore {
    pub users: Mutex<Vec<User>>,
    pub areas: Mutex<Vec<Area>>,
    pub dashboards: Mutex<Vec<Dashboard>>,
    pub area_grants: Mutex<Vec<AreaGrant>>,
    pub dashboard_grants: Mutex<Vec<DashboardGrant>>,
    pub logs: Mutex<Vec<AuditLog>>,
    next_user_id: AtomicI64,
    next_area_id: AtomicI64,
    next_dashboard_id: AtomicI64,
    next_log_id: AtomicI64,
}

impl MemStore {
    pub fn next_user_id(&self) -> i64 {
        self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1
    }
    pub fn next_area_id(&self) -> i64 {
        self.next_area_id.fetch_add(1, Ordering::SeqCst) + 1
    }
    pub fn next_dashboard_id(&self) -> i64 {
        self.next_dashboard_id.fetch_add(1, Ordering::SeqCst) + 1
    }
    pub fn next_log_id(&self) -> i64 {
        self.next_log_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct InMemoryUserRepo(pub Arc<MemStore>);

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser, area_ids: Vec<AreaId>) -> DomainResult<User> {
        let user = User {
            id: UserId::new(self.0.next_user_id())?,
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            reset_token: None,
            reset_token_expiry: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        self.0.users.lock().unwrap().push(user.clone());
        let mut grants = self.0.area_grants.lock().unwrap();
        for area_id in area_ids {
            grants.push(AreaGrant {
                user_id: user.id,
                area_id,
                created_at: new_user.created_at,
            });
        }
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.reset_token.as_deref() == Some(token))
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.0.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = Some(name);
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(token) = update.reset_token {
            user.reset_token = token;
        }
        if let Some(expiry) = update.reset_token_expiry {
            user.reset_token_expiry = expiry;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut users = self.0.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(DomainError::NotFound("user not found".into()));
        }
        self.0
            .area_grants
            .lock()
            .unwrap()
            .retain(|g| g.user_id != id);
        self.0
            .dashboard_grants
            .lock()
            .unwrap()
            .retain(|g| g.user_id != id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.0.users.lock().unwrap().clone())
    }

    async fn summaries_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<UserSummary>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&i64::from(u.id)))
            .map(|u| UserSummary {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
            })
            .collect())
    }
}

pub struct InMemoryAreaRepo(pub Arc<MemStore>);

#[async_trait]
impl AreaRepository for InMemoryAreaRepo {
    async fn insert(&self, name: AreaName) -> DomainResult<Area> {
        let area = Area {
            id: AreaId::new(self.0.next_area_id())?,
            name,
            created_at: Utc::now(),
        };
        self.0.areas.lock().unwrap().push(area.clone());
        Ok(area)
    }

    async fn find_by_id(&self, id: AreaId) -> DomainResult<Option<Area>> {
        Ok(self
            .0
            .areas
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &AreaName) -> DomainResult<Option<Area>> {
        Ok(self
            .0
            .areas
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.name == *name)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Area>> {
        let mut areas = self.0.areas.lock().unwrap().clone();
        areas.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(areas)
    }

    async fn update_name(&self, id: AreaId, name: AreaName) -> DomainResult<Area> {
        let mut areas = self.0.areas.lock().unwrap();
        let area = areas
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("area not found".into()))?;
        area.name = name;
        Ok(area.clone())
    }

    async fn delete(&self, id: AreaId) -> DomainResult<()> {
        let mut areas = self.0.areas.lock().unwrap();
        let before = areas.len();
        areas.retain(|a| a.id != id);
        if areas.len() == before {
            return Err(DomainError::NotFound("area not found".into()));
        }
        Ok(())
    }
}

pub struct InMemoryDashboardRepo(pub Arc<MemStore>);

impl InMemoryDashboardRepo {
    fn view(&self, dashboard: Dashboard) -> DashboardView {
        let area_name = self
            .0
            .areas
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == dashboard.area_id)
            .map(|a| a.name.to_string())
            .unwrap_or_default();
        DashboardView {
            dashboard,
            area_name,
        }
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepo {
    async fn insert(&self, new_dashboard: NewDashboard) -> DomainResult<DashboardView> {
        let dashboard = Dashboard {
            id: DashboardId::new(self.0.next_dashboard_id())?,
            name: new_dashboard.name,
            url: new_dashboard.url,
            information: new_dashboard.information,
            area_id: new_dashboard.area_id,
            created_at: new_dashboard.created_at,
            updated_at: new_dashboard.created_at,
        };
        self.0.dashboards.lock().unwrap().push(dashboard.clone());
        Ok(self.view(dashboard))
    }

    async fn find_by_id(&self, id: DashboardId) -> DomainResult<Option<Dashboard>> {
        Ok(self
            .0
            .dashboards
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn find_view(&self, id: DashboardId) -> DomainResult<Option<DashboardView>> {
        Ok(self.find_by_id(id).await?.map(|d| self.view(d)))
    }

    async fn list(&self) -> DomainResult<Vec<DashboardView>> {
        let dashboards = self.0.dashboards.lock().unwrap().clone();
        Ok(dashboards.into_iter().map(|d| self.view(d)).collect())
    }

    async fn list_granted(&self, user_id: UserId) -> DomainResult<Vec<DashboardView>> {
        let granted: Vec<DashboardId> = self
            .0
            .dashboard_grants
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .map(|g| g.dashboard_id)
            .collect();
        let dashboards = self.0.dashboards.lock().unwrap().clone();
        Ok(dashboards
            .into_iter()
            .filter(|d| granted.contains(&d.id))
            .map(|d| self.view(d))
            .collect())
    }

    async fn update(&self, update: DashboardUpdate) -> DomainResult<DashboardView> {
        let updated = {
            let mut dashboards = self.0.dashboards.lock().unwrap();
            let dashboard = dashboards
                .iter_mut()
                .find(|d| d.id == update.id)
                .ok_or_else(|| DomainError::NotFound("dashboard not found".into()))?;
            dashboard.name = update.name;
            dashboard.url = update.url;
            dashboard.information = update.information;
            dashboard.area_id = update.area_id;
            dashboard.updated_at = Utc::now();
            dashboard.clone()
        };
        Ok(self.view(updated))
    }

    async fn delete(&self, id: DashboardId) -> DomainResult<()> {
        let mut dashboards = self.0.dashboards.lock().unwrap();
        let before = dashboards.len();
        dashboards.retain(|d| d.id != id);
        if dashboards.len() == before {
            return Err(DomainError::NotFound("dashboard not found".into()));
        }
        self.0
            .dashboard_grants
            .lock()
            .unwrap()
            .retain(|g| g.dashboard_id != id);
        Ok(())
    }

    async fn count_by_area(&self, area_id: AreaId) -> DomainResult<u64> {
        Ok(self
            .0
            .dashboards
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.area_id == area_id)
            .count() as u64)
    }
}

pub struct InMemoryAccessRepo(pub Arc<MemStore>);

#[async_trait]
impl AccessRepository for InMemoryAccessRepo {
    async fn area_grant_exists(&self, user_id: UserId, area_id: AreaId) -> DomainResult<bool> {
        Ok(self
            .0
            .area_grants
            .lock()
            .unwrap()
            .iter()
            .any(|g| g.user_id == user_id && g.area_id == area_id))
    }

    async fn areas_for_user(&self, user_id: UserId) -> DomainResult<Vec<Area>> {
        let granted: Vec<AreaId> = self
            .0
            .area_grants
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .map(|g| g.area_id)
            .collect();
        let mut areas: Vec<Area> = self
            .0
            .areas
            .lock()
            .unwrap()
            .iter()
            .filter(|a| granted.contains(&a.id))
            .cloned()
            .collect();
        areas.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(areas)
    }

    async fn count_for_area(&self, area_id: AreaId) -> DomainResult<u64> {
        Ok(self
            .0
            .area_grants
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.area_id == area_id)
            .count() as u64)
    }

    async fn replace_area_grants(
        &self,
        user_id: UserId,
        area_ids: Vec<AreaId>,
    ) -> DomainResult<Vec<AreaGrant>> {
        let mut grants = self.0.area_grants.lock().unwrap();
        grants.retain(|g| g.user_id != user_id);
        let now = Utc::now();
        let new_grants: Vec<AreaGrant> = area_ids
            .into_iter()
            .map(|area_id| AreaGrant {
                user_id,
                area_id,
                created_at: now,
            })
            .collect();
        grants.extend(new_grants.clone());
        Ok(new_grants)
    }

    async fn dashboard_grant_exists(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool> {
        Ok(self
            .0
            .dashboard_grants
            .lock()
            .unwrap()
            .iter()
            .any(|g| g.user_id == user_id && g.dashboard_id == dashboard_id))
    }

    async fn upsert_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
        granted_by: UserId,
        granted_at: DateTime<Utc>,
    ) -> DomainResult<DashboardGrant> {
        let mut grants = self.0.dashboard_grants.lock().unwrap();
        grants.retain(|g| !(g.user_id == user_id && g.dashboard_id == dashboard_id));
        let grant = DashboardGrant {
            user_id,
            dashboard_id,
            granted_by: Some(granted_by),
            granted_at,
        };
        grants.push(grant.clone());
        Ok(grant)
    }

    async fn delete_dashboard_grant(
        &self,
        user_id: UserId,
        dashboard_id: DashboardId,
    ) -> DomainResult<bool> {
        let mut grants = self.0.dashboard_grants.lock().unwrap();
        let before = grants.len();
        grants.retain(|g| !(g.user_id == user_id && g.dashboard_id == dashboard_id));
        Ok(grants.len() < before)
    }

    async fn dashboard_grants_for_user(
        &self,
        user_id: UserId,
    ) -> DomainResult<Vec<DashboardGrant>> {
        Ok(self
            .0
            .dashboard_grants
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryAuditRepo(pub Arc<MemStore>);

fn matches_filter(log: &AuditLog, filter: &AuditLogFilter) -> bool {
    if let Some(action) = &filter.action {
        if log.action != *action {
            return false;
        }
    }
    if let Some(entity_type) = &filter.entity_type {
        if log.entity_type != *entity_type {
            return false;
        }
    }
    if let Some(user_id) = filter.user_id {
        if log.user_id != Some(user_id) {
            return false;
        }
    }
    if let Some(admin_id) = filter.admin_id {
        if log.admin_id != Some(admin_id) {
            return false;
        }
    }
    if let Some(start) = filter.start {
        if log.timestamp < start {
            return false;
        }
    }
    if let Some(end) = filter.end {
        if log.timestamp > end {
            return false;
        }
    }
    true
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepo {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<AuditLog> {
        let stored = AuditLog {
            id: self.0.next_log_id(),
            action: log.action,
            entity_type: log.entity_type,
            entity_id: log.entity_id,
            user_id: log.user_id,
            admin_id: log.admin_id,
            level: log.level,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
            details: log.details,
            timestamp: log.timestamp,
        };
        self.0.logs.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list(
        &self,
        filter: &AuditLogFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<AuditLog>, u64)> {
        let mut matched: Vec<AuditLog> = self
            .0
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| matches_filter(log, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn stats(&self, since: DateTime<Utc>) -> DomainResult<AuditStats> {
        let logs = self.0.logs.lock().unwrap();
        let recent: Vec<&AuditLog> = logs.iter().filter(|l| l.timestamp >= since).collect();
        let mut action_counts: Vec<(String, u64)> = Vec::new();
        let mut entity_counts: Vec<(String, u64)> = Vec::new();
        for log in &recent {
            match action_counts.iter_mut().find(|(a, _)| *a == log.action) {
                Some((_, count)) => *count += 1,
                None => action_counts.push((log.action.clone(), 1)),
            }
            match entity_counts.iter_mut().find(|(e, _)| *e == log.entity_type) {
                Some((_, count)) => *count += 1,
                None => entity_counts.push((log.entity_type.clone(), 1)),
            }
        }
        Ok(AuditStats {
            total_logs: recent.len() as u64,
            action_counts,
            entity_counts,
        })
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let mut logs = self.0.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|l| l.timestamp > cutoff);
        Ok((before - logs.len()) as u64)
    }

    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut logs = self.0.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|l| l.timestamp < start || l.timestamp > end);
        Ok((before - logs.len()) as u64)
    }
}

/// Audit repository whose writes always fail, for exercising the recorder's
/// degraded path.
pub struct FailingAuditRepo;

#[async_trait]
impl AuditLogRepository for FailingAuditRepo {
    async fn insert(&self, _log: NewAuditLog) -> DomainResult<AuditLog> {
        Err(DomainError::Persistence("disk on fire".into()))
    }

    async fn list(
        &self,
        _filter: &AuditLogFilter,
        _offset: u64,
        _limit: u32,
    ) -> DomainResult<(Vec<AuditLog>, u64)> {
        Err(DomainError::Persistence("disk on fire".into()))
    }

    async fn stats(&self, _since: DateTime<Utc>) -> DomainResult<AuditStats> {
        Err(DomainError::Persistence("disk on fire".into()))
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> DomainResult<u64> {
        Err(DomainError::Persistence("disk on fire".into()))
    }

    async fn delete_between(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> DomainResult<u64> {
        Err(DomainError::Persistence("disk on fire".into()))
    }
}

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Reversible stand-in for Argon2 so tests can seed users without paying the
/// real hashing cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("plain:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct FixedResetTokens(pub String);

impl ResetTokenGenerator for FixedResetTokens {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

pub fn build_services(store: Arc<MemStore>) -> Arc<ApplicationServices> {
    build_services_with(store, true, "fixed-reset-token")
}

pub fn build_services_with(
    store: Arc<MemStore>,
    audit_enabled: bool,
    reset_token: &str,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: Arc::new(InMemoryUserRepo(Arc::clone(&store))),
        area_repo: Arc::new(InMemoryAreaRepo(Arc::clone(&store))),
        dashboard_repo: Arc::new(InMemoryDashboardRepo(Arc::clone(&store))),
        access_repo: Arc::new(InMemoryAccessRepo(Arc::clone(&store))),
        audit_repo: Arc::new(InMemoryAuditRepo(Arc::clone(&store))),
        password_hasher: Arc::new(PlainPasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(TEST_JWT_SECRET, 3600)),
        reset_tokens: Arc::new(FixedResetTokens(reset_token.to_string())),
        clock: Arc::new(FixedClock(fixed_now())),
        audit_enabled,
        audit_retention_floor_days: 7,
    }))
}

pub fn make_test_router(services: Arc<ApplicationServices>) -> axum::Router {
    dashgate::presentation::http::routes::build_router(
        dashgate::presentation::http::state::HttpState { services },
    )
}

pub fn admin_principal(id: i64) -> Principal {
    principal(id, "admin@example.com", Role::Admin)
}

pub fn user_principal(id: i64) -> Principal {
    principal(id, "user@example.com", Role::User)
}

pub fn principal(id: i64, email: &str, role: Role) -> Principal {
    let now = fixed_now();
    Principal {
        user_id: UserId::new(id).unwrap(),
        email: email.into(),
        role,
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

pub fn meta() -> RequestMeta {
    RequestMeta {
        ip_address: Some("203.0.113.7".into()),
        user_agent: Some("integration-test".into()),
    }
}

pub fn seed_user(store: &MemStore, id: i64, email: &str, password: &str, role: Role) -> User {
    let now = fixed_now();
    let user = User {
        id: UserId::new(id).unwrap(),
        email: Email::new(email).unwrap(),
        name: Some(format!("User {id}")),
        password_hash: PasswordHash::new(format!("plain:{password}")).unwrap(),
        role,
        reset_token: None,
        reset_token_expiry: None,
        created_at: now,
        updated_at: now,
    };
    store.users.lock().unwrap().push(user.clone());
    store
        .next_user_id
        .fetch_max(id, Ordering::SeqCst);
    user
}

pub fn seed_area(store: &MemStore, id: i64, name: &str) -> Area {
    let area = Area {
        id: AreaId::new(id).unwrap(),
        name: AreaName::new(name).unwrap(),
        created_at: fixed_now(),
    };
    store.areas.lock().unwrap().push(area.clone());
    store.next_area_id.fetch_max(id, Ordering::SeqCst);
    area
}

pub fn seed_dashboard(store: &MemStore, id: i64, name: &str, area_id: i64) -> Dashboard {
    let now = fixed_now();
    let dashboard = Dashboard {
        id: DashboardId::new(id).unwrap(),
        name: name.into(),
        url: format!("https://bi.example.com/{id}"),
        information: None,
        area_id: AreaId::new(area_id).unwrap(),
        created_at: now,
        updated_at: now,
    };
    store.dashboards.lock().unwrap().push(dashboard.clone());
    store
        .next_dashboard_id
        .fetch_max(id, Ordering::SeqCst);
    dashboard
}

pub fn grant_area(store: &MemStore, user_id: i64, area_id: i64) {
    store.area_grants.lock().unwrap().push(AreaGrant {
        user_id: UserId::new(user_id).unwrap(),
        area_id: AreaId::new(area_id).unwrap(),
        created_at: fixed_now(),
    });
}

pub fn grant_dashboard(store: &MemStore, user_id: i64, dashboard_id: i64, granted_by: i64) {
    store.dashboard_grants.lock().unwrap().push(DashboardGrant {
        user_id: UserId::new(user_id).unwrap(),
        dashboard_id: DashboardId::new(dashboard_id).unwrap(),
        granted_by: Some(UserId::new(granted_by).unwrap()),
        granted_at: fixed_now(),
    });
}

pub fn logged_actions(store: &MemStore) -> Vec<String> {
    store
        .logs
        .lock()
        .unwrap()
        .iter()
        .map(|l| l.action.clone())
        .collect()
}
