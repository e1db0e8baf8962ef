// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for services. Injected so audit timestamps, token
/// expiries, and retention cutoffs are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
