pub mod recorder;
pub mod sanitize;

pub use recorder::{AuditEntry, AuditRecorder};
