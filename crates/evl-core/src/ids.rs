//! ID prefix constants.
//!
//! Store-generated IDs take the form `{prefix}-{16 hex chars}`, e.g. `aud-3f9a01bc77e0d412`.

/// Prefix for audit log rows.
pub const PREFIX_AUDIT: &str = "aud";

/// All prefixes issued by the store.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_AUDIT];

/// Format an ID from a prefix and a random hex suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}
