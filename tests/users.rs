mod common;

use investtracker_core::domain::Role;
use investtracker_core::services::UserPatch;
use investtracker_core::CoreError;
use uuid::Uuid;

#[tokio::test]
async fn create_stamps_the_role_for_the_operation() {
    let (core, _dir) = common::setup().await;

    let ba = core
        .users
        .create_branch_admin(common::new_user("ba", "ba@x.com", Some("North")))
        .await
        .unwrap();
    assert_eq!(ba.role, Role::BranchAdmin);
    assert!(ba.is_active);

    let inspector = core
        .users
        .create_inspector(common::new_user("i", "i@x.com", Some("North")))
        .await
        .unwrap();
    assert_eq!(inspector.role, Role::Inspector);
    // Stored hash is never the raw password
    assert_ne!(inspector.password_hash, "s3cret pass");
}

#[tokio::test]
async fn duplicate_email_fails_validation() {
    let (core, _dir) = common::setup().await;
    core.users
        .create_branch_admin(common::new_user("ba", "dup@x.com", None))
        .await
        .unwrap();

    let err = core
        .users
        .create_inspector(common::new_user("i", "dup@x.com", None))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(ref m) if m.contains("already exists")));
}

#[tokio::test]
async fn inspector_listing_is_branch_scoped() {
    let (core, _dir) = common::setup().await;
    let (_, north_admin) = common::seed_branch_admin(&core, "nba@x.com", "North").await;
    common::seed_inspector(&core, "n1@x.com", "North").await;
    common::seed_inspector(&core, "n2@x.com", "North").await;
    common::seed_inspector(&core, "s1@x.com", "South").await;

    let inspectors = core.users.list_inspectors(&north_admin).await.unwrap();
    assert_eq!(inspectors.len(), 2);
    assert!(inspectors.iter().all(|u| u.branch_name.as_deref() == Some("North")));

    let admins = core.users.list_branch_admins().await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email, "nba@x.com");
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let (core, _dir) = common::setup().await;
    let (model, _) = common::seed_inspector(&core, "i@x.com", "North").await;

    let updated = core
        .users
        .update(
            model.uuid,
            UserPatch {
                user_name: Some("Renamed".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.user_name, "Renamed");
    assert!(!updated.is_active);
    assert_eq!(updated.email, "i@x.com");
    assert_eq!(updated.branch_name.as_deref(), Some("North"));
    assert!(updated.updated_at >= model.updated_at);
}

#[tokio::test]
async fn password_change_through_patch_takes_effect() {
    let (core, _dir) = common::setup().await;
    let (model, _) = common::seed_inspector(&core, "i@x.com", "North").await;

    core.users
        .update(
            model.uuid,
            UserPatch {
                password: Some("rotated pass".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(core
        .auth
        .login("i@x.com", "s3cret pass", Role::Inspector)
        .await
        .is_err());
    core.auth
        .login("i@x.com", "rotated pass", Role::Inspector)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let (core, _dir) = common::setup().await;

    let err = core.users.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(ref m) if m == "User not found"));

    let err = core
        .users
        .update(Uuid::new_v4(), UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    let err = core.users.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn data_survives_reopening_the_same_data_dir() {
    let dir = {
        let (core, dir) = common::setup().await;
        core.users
            .create_inspector(common::new_user("i", "i@x.com", Some("North")))
            .await
            .unwrap();
        drop(core);
        dir
    };

    let core = investtracker_core::Core::new_with_config(dir.path().to_path_buf())
        .await
        .unwrap();
    core.auth
        .login("i@x.com", "s3cret pass", Role::Inspector)
        .await
        .unwrap();
}

#[tokio::test]
async fn deleting_a_user_cascades_to_owned_records() {
    let (core, _dir) = common::setup().await;
    let admin = common::admin();
    let (model, actor) = common::seed_inspector(&core, "i@x.com", "North").await;
    let (_, keeper_actor) = common::seed_inspector(&core, "keeper@x.com", "North").await;

    core.assignments
        .create(
            &admin,
            investtracker_core::services::NewAssignment {
                project: "Job".to_string(),
                client_name: "Acme".to_string(),
                industry_name: "Textiles".to_string(),
                phone_number: "01700000000".to_string(),
                assigned_inspector: model.uuid,
                branch_name: "North".to_string(),
                status: Default::default(),
            },
        )
        .await
        .unwrap();
    core.surveys
        .create(&actor, Default::default())
        .await
        .unwrap();
    core.surveys
        .create(&keeper_actor, Default::default())
        .await
        .unwrap();

    core.users.delete(model.uuid).await.unwrap();

    assert!(core.assignments.list(&admin, None).await.unwrap().is_empty());
    let remaining = core.stats.dashboard().await.unwrap();
    assert_eq!(remaining.all, 1);
}
