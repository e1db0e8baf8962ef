// src/application/ports/util.rs

/// Source of opaque password-reset tokens.
pub trait ResetTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
