// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Shared router state. Handlers reach everything through the service
/// container; no handler talks to the database directly.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}
