//! Clerk identity-provider configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Clerk secret key, used both for JWKS validation and for the Backend
    /// API admin calls (signup, role metadata).
    #[serde(default)]
    pub secret_key: String,

    /// Clerk publishable key, surfaced to browser clients.
    #[serde(default)]
    pub publishable_key: String,
}

impl ClerkConfig {
    /// Check if the Clerk config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!ClerkConfig::default().is_configured());
    }

    #[test]
    fn configured_when_secret_set() {
        let config = ClerkConfig {
            secret_key: "sk_test_456".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
