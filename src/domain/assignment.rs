//! Assignment record status lifecycle
//!
//! Assignment records pair a client/project with an assigned inspector. The
//! status values are lowercase and deliberately distinct from the survey
//! record's capitalized set; the two lifecycles drifted apart in the source
//! system and are kept separate here.

use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

/// Status of an assignment record.
///
/// Transitions are unconstrained: any value may be set at any time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    #[strum(serialize = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    #[strum(serialize = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    #[strum(serialize = "completed")]
    Completed,
    #[sea_orm(string_value = "approved")]
    #[strum(serialize = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    #[strum(serialize = "rejected")]
    Rejected,
}

impl AssignmentStatus {
    /// Parse a requested status value, or report the allowed set
    pub fn parse(value: &str) -> Result<Self, String> {
        value.parse::<AssignmentStatus>().map_err(|_| {
            let allowed: Vec<String> =
                AssignmentStatus::iter().map(|s| s.to_string()).collect();
            format!("Invalid status. Must be one of: {:?}", allowed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!(AssignmentStatus::parse("in_progress"), Ok(AssignmentStatus::InProgress));
        assert!(AssignmentStatus::parse("In Progress").is_err());
    }
}
