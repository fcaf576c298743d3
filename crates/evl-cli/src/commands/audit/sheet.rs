use evl_audit::{RecordOutcome, SheetActionParams};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditSheetArgs;
use crate::commands::shared::parse::{parse_document, parse_sheet_action};
use crate::context::AppContext;

use super::report;

pub async fn run(args: &AuditSheetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = execute(args, ctx).await?;
    report(outcome, flags)
}

pub async fn execute(args: &AuditSheetArgs, ctx: &AppContext) -> anyhow::Result<RecordOutcome> {
    let Some(user_id) = ctx.config.auth.user_id() else {
        anyhow::bail!("sheet records need a user: pass --as-user or set auth.user_id");
    };

    let mut params = SheetActionParams::new(
        user_id,
        args.event.clone(),
        parse_sheet_action(&args.action)?,
        args.title.clone(),
    );
    params.spreadsheet_id.clone_from(&args.spreadsheet_id);
    params.changes = parse_document(args.changes.as_deref(), "changes")?;
    params.role.clone_from(&args.role);

    Ok(ctx.recorder().record_sheet_action(params).await)
}
