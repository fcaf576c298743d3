use serde::{Deserialize, Serialize};

use crate::enums::MemberRole;

/// A user's role within one event. Keyed by (`event_id`, `user_id`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Membership {
    pub event_id: String,
    pub user_id: String,
    pub role: MemberRole,
}
