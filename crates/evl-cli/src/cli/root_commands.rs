use clap::Subcommand;

use crate::cli::subcommands::{AuditCommands, MemberCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Read and append event audit records.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Manage event membership roles.
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
}
