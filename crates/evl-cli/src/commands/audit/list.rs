use evl_audit::AuditQueryOptions;
use evl_core::enums::AuditEntityType;
use evl_core::responses::AuditLogPage;
use serde::Serialize;

use crate::cli::subcommands::AuditListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{audit::render_page_table, output};

#[derive(Debug, Serialize)]
struct AuditListResponse {
    #[serde(flatten)]
    page: AuditLogPage,
    has_more: bool,
    page_count: u64,
}

pub async fn run(args: &AuditListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = fetch(args, ctx).await?;
    if flags.format == OutputFormat::Table {
        println!("{}", render_page_table(&page));
        return Ok(());
    }

    output(
        &AuditListResponse {
            has_more: page.has_more(),
            page_count: page.page_count(),
            page,
        },
        flags.format,
    )
}

pub async fn fetch(args: &AuditListArgs, ctx: &AppContext) -> anyhow::Result<AuditLogPage> {
    let options = AuditQueryOptions {
        limit: args.limit,
        offset: args.offset,
        entity_type: args
            .entity_type
            .as_deref()
            .map(|value| parse_enum::<AuditEntityType>(value, "entity-type"))
            .transpose()?,
    };

    Ok(ctx.reader().get_audit_logs(&args.event_id, options).await?)
}
