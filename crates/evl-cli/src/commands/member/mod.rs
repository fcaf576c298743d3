//! Administrative membership commands.
//!
//! These write the table the audit gate reads; they are not themselves
//! gated or audited.

use evl_core::entities::Membership;
use evl_core::enums::MemberRole;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{MemberCommands, MemberEventArgs, MemberRemoveArgs, MemberSetArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    event_id: String,
    user_id: String,
    removed: bool,
}

/// Handle `evl member`.
pub async fn handle(
    action: &MemberCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MemberCommands::Set(args) => output(&set(args, ctx).await?, flags.format),
        MemberCommands::Remove(args) => output(&remove(args, ctx).await?, flags.format),
        MemberCommands::List(args) => output(&list(args, ctx).await?, flags.format),
    }
}

async fn set(args: &MemberSetArgs, ctx: &AppContext) -> anyhow::Result<Membership> {
    let role = args.role.trim();
    if role.is_empty() {
        anyhow::bail!("role must not be empty");
    }

    let membership = Membership {
        event_id: args.event_id.clone(),
        user_id: args.user_id.clone(),
        role: MemberRole::from(role),
    };
    ctx.db.upsert_membership(&membership).await?;
    if let MemberRole::Other(name) = &membership.role {
        tracing::info!(role = %name, "stored unrecognised role; it grants no audit access");
    }
    Ok(membership)
}

async fn remove(args: &MemberRemoveArgs, ctx: &AppContext) -> anyhow::Result<RemoveResponse> {
    let removed = ctx
        .db
        .remove_membership(&args.event_id, &args.user_id)
        .await?;
    Ok(RemoveResponse {
        event_id: args.event_id.clone(),
        user_id: args.user_id.clone(),
        removed,
    })
}

async fn list(args: &MemberEventArgs, ctx: &AppContext) -> anyhow::Result<Vec<Membership>> {
    Ok(ctx.db.list_members(&args.event_id).await?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::{json_flags, test_ctx};

    fn set_args(user_id: &str, role: &str) -> MemberSetArgs {
        MemberSetArgs {
            event_id: "evt-1".into(),
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    #[tokio::test]
    async fn set_then_list() {
        let ctx = test_ctx(None).await;
        set(&set_args("u2", "viewer"), &ctx).await.unwrap();
        set(&set_args("u1", "owner"), &ctx).await.unwrap();

        let members = list(
            &MemberEventArgs {
                event_id: "evt-1".into(),
            },
            &ctx,
        )
        .await
        .unwrap();
        let roles: Vec<_> = members
            .iter()
            .map(|m| (m.user_id.as_str(), m.role.clone()))
            .collect();
        assert_eq!(roles, vec![("u1", MemberRole::Owner), ("u2", MemberRole::Viewer)]);
    }

    #[tokio::test]
    async fn blank_role_is_rejected() {
        let ctx = test_ctx(None).await;
        assert!(set(&set_args("u1", "  "), &ctx).await.is_err());
    }

    #[tokio::test]
    async fn remove_reports_whether_row_existed() {
        let ctx = test_ctx(None).await;
        set(&set_args("u1", "manager"), &ctx).await.unwrap();

        let remove_args = MemberRemoveArgs {
            event_id: "evt-1".into(),
            user_id: "u1".into(),
        };
        assert!(remove(&remove_args, &ctx).await.unwrap().removed);
        assert!(!remove(&remove_args, &ctx).await.unwrap().removed);
    }

    #[tokio::test]
    async fn handle_prints_without_error() {
        let ctx = test_ctx(None).await;
        let action = MemberCommands::Set(set_args("u1", "finance_lead"));
        handle(&action, &ctx, &json_flags()).await.unwrap();
        assert_eq!(
            ctx.db.get_membership("evt-1", "u1").await.unwrap().unwrap().role,
            MemberRole::Other("finance_lead".into())
        );
    }
}
