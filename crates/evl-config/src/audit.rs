//! Audit trail read settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Page size used when the caller does not ask for one.
const fn default_limit() -> u32 {
    50
}

/// Upper bound applied to any requested page size.
const fn default_max_limit() -> u32 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Default page size for audit log reads.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Largest page size a single read may request.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl AuditConfig {
    /// Reject combinations that would make every read fail or clamp oddly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "audit.max_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.default_limit > self.max_limit {
            return Err(ConfigError::InvalidValue {
                field: "audit.default_limit".into(),
                reason: format!("{} exceeds audit.max_limit {}", self.default_limit, self.max_limit),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuditConfig::default();
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.max_limit, 500);
        config.validate().unwrap();
    }

    #[test]
    fn default_above_max_is_invalid() {
        let config = AuditConfig {
            default_limit: 600,
            max_limit: 500,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("audit.default_limit"));
    }
}
