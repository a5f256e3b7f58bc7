//! Share link token generation.

use rand::RngCore;

use domogate_core::types::LinkToken;

/// Generates bearer tokens for guest links.
#[derive(Debug, Clone)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Creates a new token generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a cryptographically secure random token.
    ///
    /// 128 bits of entropy, hex-encoded to 32 characters. The token is the
    /// only credential a guest carries, so it must be unguessable.
    pub fn generate(&self) -> LinkToken {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        LinkToken::new(hex::encode(&bytes))
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple hex encoding without external dependency.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_32_hex_chars() {
        let token = TokenGenerator::new().generate();
        assert_eq!(token.as_str().len(), 32);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        let generator = TokenGenerator::new();
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
    }
}
