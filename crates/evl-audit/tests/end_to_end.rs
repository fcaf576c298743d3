//! Recorder and reader wired to the libSQL store.

use std::sync::Arc;

use evl_audit::{
    AuditQueryOptions, AuditReadError, AuditReader, AuditRecorder, RecordOutcome,
    SheetActionParams, StaticIdentity,
};
use evl_core::entities::Membership;
use evl_core::enums::{AuditAction, AuditEntityType, MemberRole, SheetAction};
use evl_db::EvlDb;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn db_with_members(members: &[(&str, MemberRole)]) -> Arc<EvlDb> {
    let db = EvlDb::open_local(":memory:").await.unwrap();
    for (user_id, role) in members {
        db.upsert_membership(&Membership {
            event_id: "evt-1".into(),
            user_id: (*user_id).to_string(),
            role: role.clone(),
        })
        .await
        .unwrap();
    }
    Arc::new(db)
}

#[tokio::test]
async fn owner_records_and_reads_back_a_deal_update() {
    let db = db_with_members(&[("U", MemberRole::Owner)]).await;
    let recorder = AuditRecorder::new(Arc::clone(&db), StaticIdentity::user("U"));
    let reader = AuditReader::new(Arc::clone(&db), Arc::clone(&db), StaticIdentity::user("U"));

    let outcome = recorder
        .record_action(
            Some("evt-1"),
            AuditAction::Update,
            AuditEntityType::Deal,
            Some("D1"),
            json!({"value": 100}).as_object().cloned(),
            json!({"value": 150}).as_object().cloned(),
        )
        .await;
    assert!(outcome.is_written());

    let page = reader
        .get_audit_logs("evt-1", AuditQueryOptions::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.logs.len(), 1);
    let log = &page.logs[0];
    assert_eq!(log.user_id.as_deref(), Some("U"));
    assert_eq!(log.action, AuditAction::Update);
    assert_eq!(log.entity_type, AuditEntityType::Deal);
    assert_eq!(log.entity_id.as_deref(), Some("D1"));
    assert_eq!(log.old_values, json!({"value": 100}).as_object().cloned());
    assert_eq!(log.new_values, json!({"value": 150}).as_object().cloned());
    assert_eq!(Some(log), outcome.log());
}

#[tokio::test]
async fn sheet_records_are_filterable_and_ordered() {
    let db = db_with_members(&[("M", MemberRole::Manager)]).await;
    let recorder = AuditRecorder::new(Arc::clone(&db), StaticIdentity::anonymous());
    let reader = AuditReader::new(Arc::clone(&db), Arc::clone(&db), StaticIdentity::user("M"));

    for i in 0..4 {
        recorder
            .record_action(
                Some("evt-1"),
                AuditAction::Create,
                AuditEntityType::Vehicle,
                Some(&format!("V{i}")),
                None,
                None,
            )
            .await;
    }
    for action in [SheetAction::SheetRead, SheetAction::SheetAppend, SheetAction::SheetWrite] {
        let mut params = SheetActionParams::new("M", Some("evt-1".into()), action, "Inventory");
        params.role = Some("manager".into());
        assert!(recorder.record_sheet_action(params).await.is_written());
    }
    let skipped = recorder
        .record_sheet_action(SheetActionParams::new("M", None, SheetAction::SheetRead, "Inventory"))
        .await;
    assert!(matches!(skipped, RecordOutcome::Skipped(_)));

    let all = reader
        .get_audit_logs("evt-1", AuditQueryOptions::default())
        .await
        .unwrap();
    assert_eq!(all.total, 7);
    for pair in all.logs.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    assert_eq!(all.logs[0].action, AuditAction::SheetWrite);

    let sheets = reader
        .get_audit_logs(
            "evt-1",
            AuditQueryOptions::default().with_entity_type(AuditEntityType::Sheet),
        )
        .await
        .unwrap();
    assert_eq!(sheets.total, 3);
    assert!(sheets.logs.iter().all(|l| l.entity_type == AuditEntityType::Sheet));
    assert!(sheets.logs.iter().all(|l| l.user_id.as_deref() == Some("M")));
}

#[tokio::test]
async fn viewer_and_outsider_are_denied() {
    let db = db_with_members(&[("V", MemberRole::Viewer)]).await;

    let viewer = AuditReader::new(Arc::clone(&db), Arc::clone(&db), StaticIdentity::user("V"));
    let err = viewer
        .get_audit_logs("evt-1", AuditQueryOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AuditReadError::InsufficientPermissions { .. }));

    let outsider = AuditReader::new(Arc::clone(&db), Arc::clone(&db), StaticIdentity::user("X"));
    let err = outsider
        .get_audit_logs("evt-1", AuditQueryOptions::page(10, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, AuditReadError::NotAMember { .. }));
}
