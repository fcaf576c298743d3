//! In-memory audit and membership store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::Utc;
use evl_core::entities::{AuditLog, Membership, NewAuditLog};
use evl_core::enums::MemberRole;
use evl_core::ids::{PREFIX_AUDIT, format_id};
use evl_core::responses::AuditLogFilter;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::ports::{AuditStore, MembershipStore};

#[derive(Debug, Default)]
struct MemoryState {
    /// Insertion order; `created_at` is non-decreasing per event along it.
    logs: Vec<AuditLog>,
    members: HashMap<(String, String), MemberRole>,
    next_id: u32,
}

/// Audit trail and membership table held in memory.
///
/// Behaves like the libSQL store, including store-assigned IDs and
/// per-event monotonic timestamps. [`set_unavailable`](Self::set_unavailable)
/// makes every operation fail, to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    unavailable: AtomicBool,
    append_calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle simulated unavailability for all operations.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `append` calls received, successful or not.
    #[must_use]
    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }

    pub async fn add_member(&self, event_id: &str, user_id: &str, role: MemberRole) {
        self.state
            .write()
            .await
            .members
            .insert((event_id.to_string(), user_id.to_string()), role);
    }

    pub async fn remove_member(&self, event_id: &str, user_id: &str) -> bool {
        self.state
            .write()
            .await
            .members
            .remove(&(event_id.to_string(), user_id.to_string()))
            .is_some()
    }

    /// Every stored record in insertion order.
    pub async fn logs(&self) -> Vec<AuditLog> {
        self.state.read().await.logs.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

impl AuditStore for MemoryStore {
    async fn append(&self, entry: NewAuditLog) -> Result<AuditLog, StoreError> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut state = self.state.write().await;
        let floor = state
            .logs
            .iter()
            .rev()
            .find(|log| log.event_id == entry.event_id)
            .map(|log| log.created_at);
        let now = Utc::now();
        let created_at = floor.map_or(now, |floor| floor.max(now));

        state.next_id = state.next_id.wrapping_add(1);
        let id = format_id(PREFIX_AUDIT, &format!("{:016x}", state.next_id));

        let log = entry.into_log(id, created_at);
        state.logs.push(log.clone());
        Ok(log)
    }

    async fn query(&self, filter: &AuditLogFilter) -> Result<(Vec<AuditLog>, u64), StoreError> {
        self.check_available()?;

        let state = self.state.read().await;
        let matching: Vec<&AuditLog> = state
            .logs
            .iter()
            .rev()
            .filter(|log| log.event_id.as_deref() == Some(filter.event_id.as_str()))
            .filter(|log| filter.entity_type.is_none_or(|t| log.entity_type == t))
            .collect();

        let total = matching.len() as u64;
        let offset = usize::try_from(filter.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.limit).unwrap_or(usize::MAX);
        let window = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok((window, total))
    }
}

impl MembershipStore for MemoryStore {
    async fn get_membership(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<Membership>, StoreError> {
        self.check_available()?;

        let state = self.state.read().await;
        Ok(state
            .members
            .get(&(event_id.to_string(), user_id.to_string()))
            .map(|role| Membership {
                event_id: event_id.to_string(),
                user_id: user_id.to_string(),
                role: role.clone(),
            }))
    }
}
