use clap::{Args, Subcommand};

/// Audit trail commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// Show an event's audit trail, newest first (owner or manager only).
    List(AuditListArgs),
    /// Append a create/update/delete record as the current user.
    Record(AuditRecordArgs),
    /// Append a sheet sync record.
    Sheet(AuditSheetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuditListArgs {
    /// Event ID.
    pub event_id: String,
    /// Page size (defaults to audit.default_limit).
    #[arg(long)]
    pub limit: Option<u32>,
    /// Records to skip.
    #[arg(long)]
    pub offset: Option<u32>,
    /// Only records for this entity type.
    #[arg(long)]
    pub entity_type: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuditRecordArgs {
    /// Event ID.
    pub event_id: String,
    /// create, update or delete.
    #[arg(long)]
    pub action: String,
    /// deal, vehicle, roster, config or lender.
    #[arg(long)]
    pub entity_type: String,
    #[arg(long)]
    pub entity_id: Option<String>,
    /// Prior state as a JSON object.
    #[arg(long)]
    pub old: Option<String>,
    /// New state as a JSON object.
    #[arg(long)]
    pub new: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuditSheetArgs {
    /// read, append, update, delete or write (a `sheet_` prefix is optional).
    #[arg(long)]
    pub action: String,
    /// Sheet tab title.
    #[arg(long)]
    pub title: String,
    /// Event ID. Without one nothing is recorded.
    #[arg(long)]
    pub event: Option<String>,
    #[arg(long)]
    pub spreadsheet_id: Option<String>,
    /// Extra fields as a JSON object.
    #[arg(long)]
    pub changes: Option<String>,
    /// Role snapshot stored with the record.
    #[arg(long)]
    pub role: Option<String>,
}
