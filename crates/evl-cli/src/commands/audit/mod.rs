mod list;
mod record;
mod sheet;

use evl_audit::RecordOutcome;
use evl_core::entities::AuditLog;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `evl audit`.
pub async fn handle(
    action: &AuditCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuditCommands::List(args) => list::run(args, ctx, flags).await,
        AuditCommands::Record(args) => record::run(args, ctx, flags).await,
        AuditCommands::Sheet(args) => sheet::run(args, ctx, flags).await,
    }
}

/// Printable form of a [`RecordOutcome`].
#[derive(Debug, Serialize)]
struct RecordResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<AuditLog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<RecordOutcome> for RecordResponse {
    fn from(outcome: RecordOutcome) -> Self {
        match outcome {
            RecordOutcome::Written(log) => Self {
                status: "written",
                record: Some(log),
                reason: None,
            },
            RecordOutcome::Skipped(reason) => Self {
                status: "skipped",
                record: None,
                reason: Some(format!("{reason:?}")),
            },
            RecordOutcome::Swallowed(error) => Self {
                status: "swallowed",
                record: None,
                reason: Some(error.to_string()),
            },
        }
    }
}

/// Print the outcome; a swallowed write still exits non-zero for operators.
fn report(outcome: RecordOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = RecordResponse::from(outcome);
    output(&response, flags.format)?;
    if response.status == "swallowed" {
        anyhow::bail!(
            "audit record was not written: {}",
            response.reason.unwrap_or_default()
        );
    }
    Ok(())
}
