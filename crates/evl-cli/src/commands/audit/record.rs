use evl_audit::RecordOutcome;
use evl_core::enums::{AuditAction, AuditEntityType};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditRecordArgs;
use crate::commands::shared::parse::{parse_document, parse_enum};
use crate::context::AppContext;

use super::report;

pub async fn run(args: &AuditRecordArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = execute(args, ctx).await?;
    report(outcome, flags)
}

/// Validate arguments, then hand the entry to the recorder.
pub async fn execute(args: &AuditRecordArgs, ctx: &AppContext) -> anyhow::Result<RecordOutcome> {
    let action: AuditAction = parse_enum(&args.action, "action")?;
    let entity_type: AuditEntityType = parse_enum(&args.entity_type, "entity-type")?;
    if action.is_sheet() || entity_type == AuditEntityType::Sheet {
        anyhow::bail!("sheet records are written with `evl audit sheet`");
    }

    let old_values = parse_document(args.old.as_deref(), "old")?;
    let new_values = parse_document(args.new.as_deref(), "new")?;

    Ok(ctx
        .recorder()
        .record_action(
            Some(args.event_id.as_str()),
            action,
            entity_type,
            args.entity_id.as_deref(),
            old_values,
            new_values,
        )
        .await)
}
