//! Ambient identity configuration for the operator binary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// User ID the binary acts as. Empty means no ambient identity.
    #[serde(default)]
    pub user_id: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    /// The configured user ID, or `None` when unset or blank.
    pub fn user_id(&self) -> Option<&str> {
        let trimmed = self.user_id.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}
