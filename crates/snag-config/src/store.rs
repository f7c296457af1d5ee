//! Record-store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "snag.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL database file holding the key-value records table.
    /// `":memory:"` gives an ephemeral store (used by tests).
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
