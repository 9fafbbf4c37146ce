//! Aggregate counts over survey records for the dashboards
//!
//! The admin-facing dashboards report a four-way split (all, pending,
//! approved, rejected); the inspector home screen reports a six-way split
//! covering the full status set. The two shapes drifted apart in the source
//! system and both are kept.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Actor, SurveyStatus};
use crate::error::{CoreError, Result};
use crate::infrastructure::database::entities::{survey, user, Survey, User};

/// Four-way split used by the admin and branch dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub all: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Six-way split used by the inspector home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspectorStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Per-inspector record volume for the admin rollup
#[derive(Debug, Clone, Serialize)]
pub struct InspectorTotal {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub branch_name: Option<String>,
    pub total_inspections: u64,
}

/// Dashboard statistics service
#[derive(Clone)]
pub struct StatsService {
    db: DatabaseConnection,
}

impl StatsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Global four-way split across every survey record
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.four_way(Survey::find()).await
    }

    /// Four-way split over one branch's survey records.
    ///
    /// An empty branch name is rejected rather than silently matching
    /// nothing.
    pub async fn branch(&self, branch_name: &str) -> Result<DashboardStats> {
        if branch_name.trim().is_empty() {
            return Err(CoreError::Validation("Branch name is required".to_string()));
        }
        self.four_way(Survey::find().filter(survey::Column::BranchName.eq(branch_name)))
            .await
    }

    /// Six-way split over the acting inspector's own records
    pub async fn inspector(&self, actor: &Actor) -> Result<InspectorStats> {
        let own = || Survey::find().filter(survey::Column::InspectorId.eq(actor.id));

        Ok(InspectorStats {
            total: own().count(&self.db).await?,
            pending: self.count_status(own(), SurveyStatus::Pending).await?,
            in_progress: self.count_status(own(), SurveyStatus::InProgress).await?,
            completed: self.count_status(own(), SurveyStatus::Completed).await?,
            approved: self.count_status(own(), SurveyStatus::Approved).await?,
            rejected: self.count_status(own(), SurveyStatus::Rejected).await?,
        })
    }

    /// Record volume per inspector, for every inspector with at least one
    /// survey record
    pub async fn inspector_wise(&self) -> Result<Vec<InspectorTotal>> {
        let totals: Vec<(i32, i64)> = Survey::find()
            .select_only()
            .column(survey::Column::InspectorId)
            .column_as(survey::Column::Id.count(), "total")
            .group_by(survey::Column::InspectorId)
            .into_tuple()
            .all(&self.db)
            .await?;

        let owners = User::find()
            .filter(user::Column::Id.is_in(totals.iter().map(|(id, _)| *id).collect::<Vec<_>>()))
            .all(&self.db)
            .await?;

        let mut rollup = Vec::with_capacity(totals.len());
        for (owner_id, total) in totals {
            // A count row without an owner row cannot happen under the FK
            let Some(owner) = owners.iter().find(|u| u.id == owner_id) else {
                continue;
            };
            rollup.push(InspectorTotal {
                id: owner.uuid,
                user_name: owner.user_name.clone(),
                email: owner.email.clone(),
                branch_name: owner.branch_name.clone(),
                total_inspections: total as u64,
            });
        }
        Ok(rollup)
    }

    async fn four_way(&self, base: sea_orm::Select<Survey>) -> Result<DashboardStats> {
        Ok(DashboardStats {
            all: base.clone().count(&self.db).await?,
            pending: self.count_status(base.clone(), SurveyStatus::Pending).await?,
            approved: self.count_status(base.clone(), SurveyStatus::Approved).await?,
            rejected: self.count_status(base, SurveyStatus::Rejected).await?,
        })
    }

    async fn count_status(
        &self,
        base: sea_orm::Select<Survey>,
        status: SurveyStatus,
    ) -> Result<u64> {
        Ok(base
            .filter(survey::Column::Status.eq(status))
            .count(&self.db)
            .await?)
    }
}
