//! Assignment record entity ("new inspections"): a client/project paired
//! with an assigned inspector

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::AssignmentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "new_inspections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub project: String,
    pub client_name: String,
    pub industry_name: String,
    pub phone_number: String,

    /// Must reference a user with role=inspector; enforced at write time,
    /// not as a storage-level constraint
    #[sea_orm(indexed)]
    pub assigned_inspector_id: i32,

    #[sea_orm(indexed)]
    pub branch_name: String,

    #[sea_orm(indexed)]
    pub status: AssignmentStatus,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedInspectorId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            uuid: Set(Uuid::new_v4()),
            status: Set(AssignmentStatus::Pending),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
