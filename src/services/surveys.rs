//! Survey record store: owner-forced create and strict per-owner access
//!
//! Every read and write goes through the owner scope: an actor only ever
//! touches survey records it owns, whatever its role. Ownership is stamped
//! server-side at create time and never changes.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select, Set,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::location::LocationPoint;
use crate::domain::{Actor, SurveyDraft, SurveyStatus};
use crate::error::{CoreError, Result};
use crate::infrastructure::database::entities::{survey, Survey};
use crate::policy;

/// Survey record plus the derived location fields the read surface exposes
#[derive(Debug, Clone, Serialize)]
pub struct SurveyView {
    #[serde(flatten)]
    pub record: survey::Model,
    pub location_summary: String,
    pub first_location: Option<LocationPoint>,
    pub last_location: Option<LocationPoint>,
}

impl From<survey::Model> for SurveyView {
    fn from(record: survey::Model) -> Self {
        let log = record.location_log();
        Self {
            location_summary: log.summary(),
            first_location: log.first().cloned(),
            last_location: log.last().cloned(),
            record,
        }
    }
}

/// Survey record service
#[derive(Clone)]
pub struct SurveyService {
    db: DatabaseConnection,
}

impl SurveyService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a survey record owned by the requesting inspector.
    ///
    /// The owner is forced to the actor; any owner a caller might have
    /// supplied alongside the draft never reaches storage.
    pub async fn create(&self, actor: &Actor, draft: SurveyDraft) -> Result<SurveyView> {
        if !policy::can_create_survey(actor) {
            return Err(CoreError::Forbidden(
                "Only inspectors can create inspections.".to_string(),
            ));
        }

        let mut active = survey::ActiveModel::new();
        active.inspector_id = Set(actor.id);
        active.apply_draft(&draft)?;

        let record = active.insert(&self.db).await?;
        info!(record = %record.uuid, "Created survey record");
        Ok(record.into())
    }

    /// Fetch one owned record
    pub async fn get(&self, actor: &Actor, id: Uuid) -> Result<SurveyView> {
        Ok(self.find_owned(actor, id).await?.into())
    }

    /// List the actor's records, newest first.
    ///
    /// `status` of `None` or `"all"` means no status filtering.
    pub async fn list(&self, actor: &Actor, status: Option<&str>) -> Result<Vec<SurveyView>> {
        let query = self.owned(actor);
        let query = match status {
            None | Some("all") => query,
            Some(value) => {
                let wanted = SurveyStatus::parse(value).map_err(CoreError::Validation)?;
                query.filter(survey::Column::Status.eq(wanted))
            }
        };

        let records = query
            .order_by_desc(survey::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(records.into_iter().map(SurveyView::from).collect())
    }

    /// Full replace of an owned record's questionnaire and location log.
    ///
    /// Owner and creation time are immutable; the update time is refreshed.
    pub async fn update(&self, actor: &Actor, id: Uuid, draft: SurveyDraft) -> Result<SurveyView> {
        let record = self.find_owned(actor, id).await?;

        let mut active = record.into_active_model();
        active.apply_draft(&draft)?;
        active.updated_at = Set(chrono::Utc::now());

        let record = active.update(&self.db).await?;
        Ok(record.into())
    }

    /// Set an owned record's status after validating it against the enum.
    ///
    /// An invalid value fails validation and leaves the stored status
    /// unchanged.
    pub async fn update_status(&self, actor: &Actor, id: Uuid, status: &str) -> Result<SurveyView> {
        let wanted = SurveyStatus::parse(status).map_err(CoreError::Validation)?;
        let record = self.find_owned(actor, id).await?;

        let mut active = record.into_active_model();
        active.status = Set(wanted);
        active.updated_at = Set(chrono::Utc::now());

        let record = active.update(&self.db).await?;
        Ok(record.into())
    }

    /// Delete an owned record
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let record = self.find_owned(actor, id).await?;
        Survey::delete_by_id(record.id).exec(&self.db).await?;
        info!(record = %id, "Deleted survey record");
        Ok(())
    }

    fn owned(&self, actor: &Actor) -> Select<Survey> {
        let scope = policy::survey_scope(actor);
        Survey::find().filter(survey::Column::InspectorId.eq(scope.owner_id))
    }

    async fn find_owned(&self, actor: &Actor, id: Uuid) -> Result<survey::Model> {
        self.owned(actor)
            .filter(survey::Column::Uuid.eq(id))
            .one(&self.db)
            .await?
            .ok_or_else(|| CoreError::NotFound("Inspection not found".to_string()))
    }
}
