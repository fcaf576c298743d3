use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolved identity of the principal making a call.
///
/// Produced by an identity resolver at the edge and consumed by the audit
/// recorder and reader. Carries data only; resolution lives in `evl-audit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CallerIdentity {
    /// Stable user ID of the principal.
    pub user_id: String,
}

impl CallerIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
