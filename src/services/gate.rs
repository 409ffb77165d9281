//! Password gate service.
//!
//! A single shared password guards the chat widget. This is an access
//! gate, not an authentication system: one configured secret, compared by
//! SHA-256 digest equality. When no password is configured the site runs
//! open-access.

use sha2::{Digest, Sha256};

/// Gate configuration holding the digest of the configured password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    digest: [u8; 32],
}

impl GateConfig {
    #[must_use]
    pub fn new(password: &str) -> Self {
        Self { digest: sha256_digest(password) }
    }

    /// Load from `CHAT_PASSWORD`. `None` means open access.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var("CHAT_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())
            .map(|p| Self::new(&p))
    }

    /// Compare an attempt against the configured password. Exact match,
    /// no normalization.
    #[must_use]
    pub fn verify(&self, attempt: &str) -> bool {
        sha256_digest(attempt) == self.digest
    }
}

fn sha256_digest(input: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
