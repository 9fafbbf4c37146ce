//! Identity store operations: role-stamped creation, branch-scoped listing,
//! update, delete

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::{Actor, Role};
use crate::error::{CoreError, Result};
use crate::infrastructure::database::entities::{user, User};
use crate::services::auth;

/// Input for creating a user account.
///
/// The role is never part of this shape: each create operation stamps the
/// role it is allowed to mint, ignoring anything the caller might have sent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub employee_id: Option<String>,
    pub branch_name: Option<String>,
}

/// Partial update; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub employee_id: Option<String>,
    pub branch_name: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

/// Public projection of a user record (no credential material)
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub employee_id: Option<String>,
    pub branch_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

impl From<user::Model> for UserView {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.uuid,
            user_name: m.user_name,
            email: m.email,
            employee_id: m.employee_id,
            branch_name: m.branch_name,
            role: m.role,
            is_active: m.is_active,
        }
    }
}

/// User management service
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a branch admin account (admin operation; role stamped)
    pub async fn create_branch_admin(&self, new: NewUser) -> Result<user::Model> {
        self.create_with_role(new, Role::BranchAdmin).await
    }

    /// Create an inspector account (branch admin operation; role stamped)
    pub async fn create_inspector(&self, new: NewUser) -> Result<user::Model> {
        self.create_with_role(new, Role::Inspector).await
    }

    async fn create_with_role(&self, new: NewUser, role: Role) -> Result<user::Model> {
        let existing = User::find()
            .filter(user::Column::Email.eq(new.email.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(CoreError::Validation(
                "A user with this email already exists".to_string(),
            ));
        }

        let mut active = user::ActiveModel::new();
        active.user_name = Set(new.user_name);
        active.email = Set(new.email);
        active.employee_id = Set(new.employee_id);
        active.branch_name = Set(new.branch_name);
        active.role = Set(role);
        active.password_hash = Set(auth::hash_password(&new.password)?);

        let model = active.insert(&self.db).await?;
        info!(user = %model.email, role = %model.role, "Created user");
        Ok(model)
    }

    /// All branch admin accounts
    pub async fn list_branch_admins(&self) -> Result<Vec<user::Model>> {
        Ok(User::find()
            .filter(user::Column::Role.eq(Role::BranchAdmin))
            .all(&self.db)
            .await?)
    }

    /// Inspectors in the acting branch admin's branch
    pub async fn list_inspectors(&self, actor: &Actor) -> Result<Vec<user::Model>> {
        let query = User::find().filter(user::Column::Role.eq(Role::Inspector));
        let query = match &actor.branch_name {
            Some(branch) => query.filter(user::Column::BranchName.eq(branch.as_str())),
            None => query.filter(user::Column::BranchName.is_null()),
        };
        Ok(query.all(&self.db).await?)
    }

    /// Look up a user by external id
    pub async fn get(&self, id: Uuid) -> Result<user::Model> {
        User::find()
            .filter(user::Column::Uuid.eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::NotFound("User not found".to_string()))
    }

    /// Look up a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Partial update of a user record.
    ///
    /// An absent target is a not-found error. No role check guards this
    /// operation; that matches the system this replaces.
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> Result<user::Model> {
        let model = self.get(id).await?;
        let mut active = model.into_active_model();

        if let Some(user_name) = patch.user_name {
            active.user_name = Set(user_name);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password) = patch.password {
            active.password_hash = Set(auth::hash_password(&password)?);
        }
        if let Some(employee_id) = patch.employee_id {
            active.employee_id = Set(Some(employee_id));
        }
        if let Some(branch_name) = patch.branch_name {
            active.branch_name = Set(Some(branch_name));
        }
        if let Some(role) = patch.role {
            active.role = Set(role);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now());

        Ok(active.update(&self.db).await?)
    }

    /// Delete a user; owned records cascade
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let model = self.get(id).await?;
        info!(user = %model.email, "Deleting user");
        User::delete_by_id(model.id).exec(&self.db).await?;
        Ok(())
    }
}
