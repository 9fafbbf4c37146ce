mod common;

use investtracker_core::services::NewAssignment;
use investtracker_core::CoreError;
use uuid::Uuid;

fn assignment_for(assignee: Uuid, branch: &str, project: &str) -> NewAssignment {
    NewAssignment {
        project: project.to_string(),
        client_name: "Acme Traders".to_string(),
        industry_name: "Textiles".to_string(),
        phone_number: "01700000000".to_string(),
        assigned_inspector: assignee,
        branch_name: branch.to_string(),
        status: Default::default(),
    }
}

#[tokio::test]
async fn create_rejects_non_inspector_assignee() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (ba, _) = common::seed_branch_admin(&core, "ba@x.com", "North").await;

    let err = core
        .assignments
        .create(&admin, assignment_for(ba.uuid, "North", "Warehouse audit"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(ref m) if m.contains("must be an inspector")));
}

#[tokio::test]
async fn create_rejects_unknown_assignee() {
    let (core, _dir) = common::setup().await;
    let err = core
        .assignments
        .create(
            &common::admin(),
            assignment_for(Uuid::new_v4(), "North", "Warehouse audit"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn inspectors_cannot_create_assignments() {
    let (core, _dir) = common::setup().await;
    let (model, actor) = common::seed_inspector(&core, "i@x.com", "North").await;

    let err = core
        .assignments
        .create(&actor, assignment_for(model.uuid, "North", "Self-assigned"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden(_)));
}

#[tokio::test]
async fn branch_admin_lists_only_own_branch() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (north_inspector, _) = common::seed_inspector(&core, "north@x.com", "North").await;
    let (south_inspector, _) = common::seed_inspector(&core, "south@x.com", "South").await;
    let (_, north_admin) = common::seed_branch_admin(&core, "nba@x.com", "North").await;

    core.assignments
        .create(&admin, assignment_for(north_inspector.uuid, "North", "North job"))
        .await
        .unwrap();
    core.assignments
        .create(&admin, assignment_for(south_inspector.uuid, "South", "South job"))
        .await
        .unwrap();

    let visible = core.assignments.list(&north_admin, None).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].branch_name, "North");
    assert_eq!(visible[0].assigned_inspector_name, "north@x.com");

    let everything = core.assignments.list(&admin, None).await.unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn inspector_lists_only_assigned_records() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (a, a_actor) = common::seed_inspector(&core, "a@x.com", "North").await;
    let (b, b_actor) = common::seed_inspector(&core, "b@x.com", "North").await;

    core.assignments
        .create(&admin, assignment_for(a.uuid, "North", "For A"))
        .await
        .unwrap();
    core.assignments
        .create(&admin, assignment_for(b.uuid, "North", "For B"))
        .await
        .unwrap();

    let mine = core.assignments.list(&a_actor, None).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].project, "For A");

    let theirs = core.assignments.list(&b_actor, None).await.unwrap();
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].project, "For B");
}

#[tokio::test]
async fn status_filter_and_all_sentinel() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (inspector, _) = common::seed_inspector(&core, "i@x.com", "North").await;

    let first = core
        .assignments
        .create(&admin, assignment_for(inspector.uuid, "North", "One"))
        .await
        .unwrap();
    core.assignments
        .create(&admin, assignment_for(inspector.uuid, "North", "Two"))
        .await
        .unwrap();
    core.assignments
        .update_status(&admin, first.id, "approved")
        .await
        .unwrap();

    let approved = core.assignments.list(&admin, Some("approved")).await.unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].project, "One");

    let all = core.assignments.list(&admin, Some("all")).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn invalid_status_fails_and_leaves_record_unchanged() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (inspector, _) = common::seed_inspector(&core, "i@x.com", "North").await;

    let record = core
        .assignments
        .create(&admin, assignment_for(inspector.uuid, "North", "Job"))
        .await
        .unwrap();

    // Survey-side casing is not valid on the assignment lifecycle
    let err = core
        .assignments
        .update_status(&admin, record.id, "In Progress")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(ref m) if m.contains("Must be one of")));

    let reloaded = core.assignments.get(&admin, record.id).await.unwrap();
    assert_eq!(reloaded.status, record.status);
}

#[tokio::test]
async fn delete_is_scoped_to_the_actor() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (inspector, _) = common::seed_inspector(&core, "i@x.com", "North").await;
    let (_, south_admin) = common::seed_branch_admin(&core, "sba@x.com", "South").await;

    let record = core
        .assignments
        .create(&admin, assignment_for(inspector.uuid, "North", "Job"))
        .await
        .unwrap();

    let err = core.assignments.delete(&south_admin, record.id).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    core.assignments.delete(&admin, record.id).await.unwrap();
    assert!(core.assignments.get(&admin, record.id).await.is_err());
}
