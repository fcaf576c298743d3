//! Actions, entity types, and membership roles for Eventline.
//!
//! Closed vocabularies use `snake_case` serialization via
//! `#[serde(rename_all = "snake_case")]` and expose `as_str()` for SQL storage.
//! `MemberRole` is the exception: the membership store may hold roles this
//! crate does not know about, so unknown strings are preserved verbatim.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Action recorded in the audit trail.
///
/// `Create` / `Update` / `Delete` describe mutations of domain entities.
/// The `Sheet*` family describes sync operations against an external
/// spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    SheetRead,
    SheetAppend,
    SheetUpdate,
    SheetDelete,
    SheetWrite,
}

impl AuditAction {
    pub const ALL: [Self; 8] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::SheetRead,
        Self::SheetAppend,
        Self::SheetUpdate,
        Self::SheetDelete,
        Self::SheetWrite,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::SheetRead => "sheet_read",
            Self::SheetAppend => "sheet_append",
            Self::SheetUpdate => "sheet_update",
            Self::SheetDelete => "sheet_delete",
            Self::SheetWrite => "sheet_write",
        }
    }

    /// Whether this action belongs to the `sheet_*` family.
    #[must_use]
    pub const fn is_sheet(self) -> bool {
        matches!(
            self,
            Self::SheetRead
                | Self::SheetAppend
                | Self::SheetUpdate
                | Self::SheetDelete
                | Self::SheetWrite
        )
    }

    /// Whether this action is a valid pairing for `entity_type`.
    ///
    /// Sheet actions pair only with [`AuditEntityType::Sheet`]; mutation
    /// actions pair with every other entity type. The store does not enforce
    /// this, the recorder logs a warning when it is violated.
    #[must_use]
    pub const fn pairs_with(self, entity_type: AuditEntityType) -> bool {
        self.is_sheet() == matches!(entity_type, AuditEntityType::Sheet)
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SheetAction
// ---------------------------------------------------------------------------

/// The `sheet_*` subset of [`AuditAction`].
///
/// Used by the sheet recorder entry point so a sheet record cannot carry a
/// mutation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SheetAction {
    SheetRead,
    SheetAppend,
    SheetUpdate,
    SheetDelete,
    SheetWrite,
}

impl SheetAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        AuditAction::from_sheet(self).as_str()
    }
}

impl AuditAction {
    #[must_use]
    pub const fn from_sheet(action: SheetAction) -> Self {
        match action {
            SheetAction::SheetRead => Self::SheetRead,
            SheetAction::SheetAppend => Self::SheetAppend,
            SheetAction::SheetUpdate => Self::SheetUpdate,
            SheetAction::SheetDelete => Self::SheetDelete,
            SheetAction::SheetWrite => Self::SheetWrite,
        }
    }
}

impl From<SheetAction> for AuditAction {
    fn from(action: SheetAction) -> Self {
        Self::from_sheet(action)
    }
}

impl fmt::Display for SheetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditEntityType
// ---------------------------------------------------------------------------

/// Kind of entity an audit record is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityType {
    Deal,
    Vehicle,
    Roster,
    Config,
    Lender,
    Sheet,
}

impl AuditEntityType {
    pub const ALL: [Self; 6] = [
        Self::Deal,
        Self::Vehicle,
        Self::Roster,
        Self::Config,
        Self::Lender,
        Self::Sheet,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deal => "deal",
            Self::Vehicle => "vehicle",
            Self::Roster => "roster",
            Self::Config => "config",
            Self::Lender => "lender",
            Self::Sheet => "sheet",
        }
    }
}

impl fmt::Display for AuditEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberRole
// ---------------------------------------------------------------------------

/// Role a user holds within one event.
///
/// ```text
/// owner   : full control, may read the audit trail
/// manager : day-to-day control, may read the audit trail
/// viewer  : read-only event access, no audit access
/// other   : any role string this crate does not recognise
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberRole {
    Owner,
    Manager,
    Viewer,
    Other(String),
}

impl MemberRole {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Viewer => "viewer",
            Self::Other(role) => role.as_str(),
        }
    }
}

impl From<String> for MemberRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "owner" => Self::Owner,
            "manager" => Self::Manager,
            "viewer" => Self::Viewer,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for MemberRole {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<MemberRole> for String {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
