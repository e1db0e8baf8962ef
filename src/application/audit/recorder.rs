// src/application/audit/recorder.rs
use crate::application::audit::sanitize::{self, MAX_DETAILS_BYTES};
use crate::application::ports::time::Clock;
use crate::domain::audit::{AuditLog, AuditLogRepository, LogLevel, NewAuditLog};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Input to the recorder. Id fields are loosely typed on purpose: whatever a
/// caller scrapes together is coerced to an integer or dropped, never
/// rejected.
#[derive(Debug, Clone, Default)]
pub struct AuditEntry {
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<Value>,
    pub user_id: Option<Value>,
    pub admin_id: Option<Value>,
    pub level: LogLevel,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,
    pub additional_info: Option<Value>,
}

impl AuditEntry {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn entity_id(mut self, id: impl Into<Value>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn user_id(mut self, id: impl Into<Value>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn admin_id(mut self, id: impl Into<Value>) -> Self {
        self.admin_id = Some(id.into());
        self
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn ip_address(mut self, ip: Option<String>) -> Self {
        self.ip_address = ip;
        self
    }

    pub fn user_agent(mut self, agent: Option<String>) -> Self {
        self.user_agent = agent;
        self
    }

    pub fn old_data(mut self, data: Value) -> Self {
        self.old_data = Some(data);
        self
    }

    pub fn new_data(mut self, data: Value) -> Self {
        self.new_data = Some(data);
        self
    }

    pub fn additional_info(mut self, data: Value) -> Self {
        self.additional_info = Some(data);
        self
    }
}

/// Best-effort durable recorder for state-changing actions. Its failures are
/// absorbed here; no business operation ever aborts because logging did.
///
/// The recorder itself is not auditable: nothing it does feeds back into it,
/// and the in-flight flag drops (with a diagnostic) any entry arriving while
/// another write is in progress rather than queueing it.
pub struct AuditRecorder {
    repo: Arc<dyn AuditLogRepository>,
    clock: Arc<dyn Clock>,
    enabled: bool,
    in_flight: AtomicBool,
}

/// Resets the flag on every exit path, including early returns and panics
/// inside a write, so a failed call cannot wedge future ones.
struct InFlightReset<'a>(&'a AtomicBool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AuditRecorder {
    pub fn new(repo: Arc<dyn AuditLogRepository>, clock: Arc<dyn Clock>, enabled: bool) -> Self {
        Self {
            repo,
            clock,
            enabled,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append an audit record. Returns the stored row on success and `None`
    /// in every other case: auditing disabled, a write already in flight, or
    /// both the primary and the degraded write failing. Callers must not
    /// build control flow on the return value.
    pub async fn record(&self, entry: AuditEntry) -> Option<AuditLog> {
        if !self.enabled {
            return None;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(action = %entry.action, "audit write in flight, dropping entry");
            return None;
        }
        let _reset = InFlightReset(&self.in_flight);

        self.write(entry).await
    }

    async fn write(&self, entry: AuditEntry) -> Option<AuditLog> {
        let action = entry.action.clone();
        let entity_type = entry
            .entity_type
            .clone()
            .unwrap_or_else(|| "UNKNOWN".into());
        let user_id = sanitize::coerce_id(entry.user_id.as_ref());

        let mut details = json!({
            "oldData": entry.old_data.as_ref().map(sanitize::sanitize),
            "newData": entry.new_data.as_ref().map(sanitize::sanitize),
            "additionalInfo": entry.additional_info.as_ref().map(sanitize::sanitize),
        });

        let size = sanitize::details_size(&details);
        if size > MAX_DETAILS_BYTES {
            details = json!({
                "error": "audit payload too large",
                "size": size,
                "summary": {
                    "action": action,
                    "entityType": entity_type,
                    "userId": user_id,
                },
            });
        }

        let log = NewAuditLog {
            action: action.clone(),
            entity_type: entity_type.clone(),
            entity_id: sanitize::coerce_id(entry.entity_id.as_ref()),
            user_id,
            admin_id: sanitize::coerce_id(entry.admin_id.as_ref()),
            level: entry.level,
            ip_address: entry.ip_address,
            user_agent: entry.user_agent,
            details: Some(details),
            timestamp: self.clock.now(),
        };

        match self.repo.insert(log).await {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::error!(error = %err, action = %action, "audit write failed");
                self.write_degraded(action, err.to_string()).await
            }
        }
    }

    /// Single degraded retry carrying only the failure itself; if this one
    /// also fails, the loss is reported to diagnostics and swallowed.
    async fn write_degraded(&self, action: String, original_error: String) -> Option<AuditLog> {
        let fallback = NewAuditLog {
            action,
            entity_type: "SYSTEM".into(),
            entity_id: None,
            user_id: None,
            admin_id: None,
            level: LogLevel::Error,
            ip_address: None,
            user_agent: None,
            details: Some(json!({
                "error": "failed to store full audit record",
                "originalError": original_error,
            })),
            timestamp: self.clock.now(),
        };

        match self.repo.insert(fallback).await {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::error!(error = %err, "degraded audit write failed, entry lost");
                None
            }
        }
    }
}
