//! Identity resolvers.
//!
//! Authentication itself happens outside this crate; these resolvers only
//! hand the audit core whatever principal the surrounding surface already
//! established.

use evl_config::AuthConfig;
use evl_core::identity::CallerIdentity;

use crate::error::IdentityError;
use crate::ports::IdentityResolver;

/// A resolver fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<CallerIdentity>,
}

impl StaticIdentity {
    #[must_use]
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(CallerIdentity::new(user_id)),
        }
    }

    /// A resolver with no caller, for system-initiated work.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }
}

impl IdentityResolver for StaticIdentity {
    async fn current_user(&self) -> Result<Option<CallerIdentity>, IdentityError> {
        Ok(self.user.clone())
    }
}

/// Resolves the ambient identity from `auth.user_id`.
#[derive(Debug, Clone)]
pub struct ConfigIdentity {
    auth: AuthConfig,
}

impl ConfigIdentity {
    #[must_use]
    pub const fn new(auth: AuthConfig) -> Self {
        Self { auth }
    }
}

impl IdentityResolver for ConfigIdentity {
    async fn current_user(&self) -> Result<Option<CallerIdentity>, IdentityError> {
        match self.auth.user_id() {
            None => Ok(None),
            Some(id) if id.chars().any(char::is_whitespace) => Err(IdentityError::Invalid(
                format!("auth.user_id '{id}' contains whitespace"),
            )),
            Some(id) => Ok(Some(CallerIdentity::new(id))),
        }
    }
}
