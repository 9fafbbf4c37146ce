//! User roles and the actor identity carried into every scoped operation

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "branch_admin")]
    BranchAdmin,
    #[sea_orm(string_value = "inspector")]
    Inspector,
}

impl Role {
    /// Stored string form, matching the database values
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::BranchAdmin => "branch_admin",
            Role::Inspector => "inspector",
        }
    }

    /// Parse a stored/requested role string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "branch_admin" => Some(Role::BranchAdmin),
            "inspector" => Some(Role::Inspector),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity performing an operation.
///
/// Replaces the ambient request-bound user of the original system: every
/// scoped service method takes an explicit `Actor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Row id of the backing user
    pub id: i32,
    /// External address of the backing user
    pub uuid: Uuid,
    pub role: Role,
    /// Branch affiliation; drives branch-scoped visibility
    pub branch_name: Option<String>,
}

impl Actor {
    pub fn new(id: i32, uuid: Uuid, role: Role, branch_name: Option<String>) -> Self {
        Self {
            id,
            uuid,
            role,
            branch_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_stored_strings() {
        for role in [Role::Admin, Role::BranchAdmin, Role::Inspector] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("supervisor"), None);
    }
}
