//! Assignment record store: policy-gated create and role-scoped queries

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select, Set,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::{Actor, AssignmentStatus, Role};
use crate::error::{CoreError, Result};
use crate::infrastructure::database::entities::{assignment, user, Assignment, User};
use crate::policy::{self, AssignmentScope};

/// Input for creating an assignment record
#[derive(Debug, Clone, Deserialize)]
pub struct NewAssignment {
    pub project: String,
    pub client_name: String,
    pub industry_name: String,
    pub phone_number: String,
    /// External id of the inspector this work is assigned to
    pub assigned_inspector: Uuid,
    pub branch_name: String,
    #[serde(default)]
    pub status: AssignmentStatus,
}

/// Assignment record joined with its assignee's display name
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub id: Uuid,
    pub project: String,
    pub client_name: String,
    pub industry_name: String,
    pub phone_number: String,
    pub assigned_inspector: Uuid,
    pub assigned_inspector_name: String,
    pub branch_name: String,
    pub status: AssignmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AssignmentView {
    fn build(record: assignment::Model, assignee: Option<user::Model>) -> Self {
        let (assigned_inspector, assigned_inspector_name) = match assignee {
            Some(u) => (u.uuid, u.user_name),
            None => (Uuid::nil(), String::new()),
        };
        Self {
            id: record.uuid,
            project: record.project,
            client_name: record.client_name,
            industry_name: record.industry_name,
            phone_number: record.phone_number,
            assigned_inspector,
            assigned_inspector_name,
            branch_name: record.branch_name,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Assignment record service
#[derive(Clone)]
pub struct AssignmentService {
    db: DatabaseConnection,
}

impl AssignmentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an assignment record.
    ///
    /// Admin and branch admin only; the assignee must hold the inspector
    /// role, checked at write time.
    pub async fn create(&self, actor: &Actor, input: NewAssignment) -> Result<AssignmentView> {
        if !policy::can_create_assignment(actor) {
            return Err(CoreError::Forbidden(
                "You don't have permission to create inspections.".to_string(),
            ));
        }

        let assignee = User::find()
            .filter(user::Column::Uuid.eq(input.assigned_inspector))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::NotFound("Assigned inspector not found".to_string()))?;
        if assignee.role != Role::Inspector {
            return Err(CoreError::Validation(
                "The assigned user must be an inspector.".to_string(),
            ));
        }

        let mut active = assignment::ActiveModel::new();
        active.project = Set(input.project);
        active.client_name = Set(input.client_name);
        active.industry_name = Set(input.industry_name);
        active.phone_number = Set(input.phone_number);
        active.assigned_inspector_id = Set(assignee.id);
        active.branch_name = Set(input.branch_name);
        active.status = Set(input.status);

        let record = active.insert(&self.db).await?;
        info!(record = %record.uuid, assignee = %assignee.email, "Created assignment record");
        Ok(AssignmentView::build(record, Some(assignee)))
    }

    /// List assignment records visible to the actor, newest first.
    ///
    /// `status` of `None` or `"all"` means no status filtering.
    pub async fn list(&self, actor: &Actor, status: Option<&str>) -> Result<Vec<AssignmentView>> {
        let query = scoped(Assignment::find(), policy::assignment_list_scope(actor));
        let query = match status_filter(status)? {
            Some(wanted) => query.filter(assignment::Column::Status.eq(wanted)),
            None => query,
        };

        let rows = query
            .find_also_related(User)
            .order_by_desc(assignment::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(record, assignee)| AssignmentView::build(record, assignee))
            .collect())
    }

    /// Fetch one record, subject to the actor's list scope
    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<AssignmentView> {
        let (record, assignee) = self.find_scoped(actor, id).await?;
        Ok(AssignmentView::build(record, assignee))
    }

    /// Set a record's status; any enum value is settable at any time
    pub async fn update_status(
        &self,
        actor: &Actor,
        id: Uuid,
        status: &str,
    ) -> Result<AssignmentView> {
        let wanted = AssignmentStatus::parse(status).map_err(CoreError::Validation)?;
        let (record, assignee) = self.find_scoped(actor, id).await?;

        let mut active = record.into_active_model();
        active.status = Set(wanted);
        active.updated_at = Set(chrono::Utc::now());
        let record = active.update(&self.db).await?;

        Ok(AssignmentView::build(record, assignee))
    }

    /// Delete a record, subject to the actor's list scope
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let (record, _) = self.find_scoped(actor, id).await?;
        Assignment::delete_by_id(record.id).exec(&self.db).await?;
        Ok(())
    }

    async fn find_scoped(
        &self,
        actor: &Actor,
        id: Uuid,
    ) -> Result<(assignment::Model, Option<user::Model>)> {
        scoped(Assignment::find(), policy::assignment_list_scope(actor))
            .filter(assignment::Column::Uuid.eq(id))
            .find_also_related(User)
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::NotFound("Inspection not found".to_string()))
    }
}

/// Translate a policy scope into query filters
fn scoped(query: Select<Assignment>, scope: AssignmentScope) -> Select<Assignment> {
    match scope {
        AssignmentScope::All => query,
        AssignmentScope::Branch(Some(branch)) => {
            query.filter(assignment::Column::BranchName.eq(branch))
        }
        AssignmentScope::Branch(None) => query.filter(assignment::Column::BranchName.is_null()),
        AssignmentScope::AssignedTo(user_id) => {
            query.filter(assignment::Column::AssignedInspectorId.eq(user_id))
        }
    }
}

fn status_filter(status: Option<&str>) -> Result<Option<AssignmentStatus>> {
    match status {
        None | Some("all") => Ok(None),
        Some(value) => AssignmentStatus::parse(value)
            .map(Some)
            .map_err(CoreError::Validation),
    }
}
