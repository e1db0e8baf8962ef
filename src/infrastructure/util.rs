use crate::application::ports::util::ResetTokenGenerator;
use uuid::Uuid;

/// 64 hex characters from two random UUIDs. Opaque and URL-safe; the token
/// carries no structure, its validity lives entirely in the users table.
#[derive(Default, Clone)]
pub struct UuidResetTokenGenerator;

impl ResetTokenGenerator for UuidResetTokenGenerator {
    fn generate(&self) -> String {
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars_and_unique() {
        let generator = UuidResetTokenGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
