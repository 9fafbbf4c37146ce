//! Shared test fixtures: a fresh tempdir-backed core plus user seeding

use investtracker_core::domain::{Actor, Role};
use investtracker_core::infrastructure::database::entities::user;
use investtracker_core::services::NewUser;
use investtracker_core::Core;
use tempfile::TempDir;
use uuid::Uuid;

/// Fresh core against a temp data directory. The TempDir must stay alive
/// for the duration of the test.
pub async fn setup() -> (Core, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let core = Core::new_with_config(dir.path().to_path_buf())
        .await
        .expect("core init");
    investtracker_core::logging::init(&core.config).expect("logging init");
    (core, dir)
}

/// Admin actor. Admin accounts are provisioned outside the service surface,
/// so tests construct the identity directly.
pub fn admin() -> Actor {
    Actor::new(1_000_000, Uuid::new_v4(), Role::Admin, None)
}

pub fn new_user(name: &str, email: &str, branch: Option<&str>) -> NewUser {
    NewUser {
        user_name: name.to_string(),
        email: email.to_string(),
        password: "s3cret pass".to_string(),
        employee_id: None,
        branch_name: branch.map(str::to_string),
    }
}

pub async fn seed_inspector(core: &Core, email: &str, branch: &str) -> (user::Model, Actor) {
    let model = core
        .users
        .create_inspector(new_user(email, email, Some(branch)))
        .await
        .expect("seed inspector");
    let actor = model.actor();
    (model, actor)
}

pub async fn seed_branch_admin(core: &Core, email: &str, branch: &str) -> (user::Model, Actor) {
    let model = core
        .users
        .create_branch_admin(new_user(email, email, Some(branch)))
        .await
        .expect("seed branch admin");
    let actor = model.actor();
    (model, actor)
}
