//! Role-scoped authorization policy
//!
//! Pure functions deciding, for a given actor, whether an operation is
//! admitted and which slice of records a list query may return. Services
//! translate the returned scopes into query filters; nothing here touches
//! the database.

use crate::domain::{Actor, Role};

/// Slice of assignment records visible to an actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentScope {
    /// Every record (admin)
    All,
    /// Records tagged with this branch name (branch admin).
    /// `None` matches records with no branch set.
    Branch(Option<String>),
    /// Records assigned to this inspector (by user row id)
    AssignedTo(i32),
}

/// Slice of survey records visible to an actor.
///
/// Survey visibility is strict per-owner isolation: every role sees only
/// records it owns. Admins and branch admins never reach other inspectors'
/// surveys through this surface, so for them the scope is simply empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyScope {
    /// Records owned by this user (by user row id)
    pub owner_id: i32,
}

/// Which assignment records a list query returns for this actor
pub fn assignment_list_scope(actor: &Actor) -> AssignmentScope {
    match actor.role {
        Role::Admin => AssignmentScope::All,
        Role::BranchAdmin => AssignmentScope::Branch(actor.branch_name.clone()),
        Role::Inspector => AssignmentScope::AssignedTo(actor.id),
    }
}

/// Whether this actor may create assignment records
pub fn can_create_assignment(actor: &Actor) -> bool {
    matches!(actor.role, Role::Admin | Role::BranchAdmin)
}

/// Which survey records a list query returns for this actor
pub fn survey_scope(actor: &Actor) -> SurveyScope {
    SurveyScope { owner_id: actor.id }
}

/// Whether this actor may create survey records (self-owned)
pub fn can_create_survey(actor: &Actor) -> bool {
    actor.role == Role::Inspector
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn actor(id: i32, role: Role, branch: Option<&str>) -> Actor {
        Actor::new(id, Uuid::new_v4(), role, branch.map(str::to_string))
    }

    #[test]
    fn admin_lists_all_assignments() {
        let a = actor(1, Role::Admin, None);
        assert_eq!(assignment_list_scope(&a), AssignmentScope::All);
        assert!(can_create_assignment(&a));
    }

    #[test]
    fn branch_admin_scoped_to_own_branch() {
        let a = actor(2, Role::BranchAdmin, Some("North"));
        assert_eq!(
            assignment_list_scope(&a),
            AssignmentScope::Branch(Some("North".to_string()))
        );
        assert!(can_create_assignment(&a));
    }

    #[test]
    fn inspector_sees_assigned_records_only() {
        let a = actor(7, Role::Inspector, Some("North"));
        assert_eq!(assignment_list_scope(&a), AssignmentScope::AssignedTo(7));
        assert!(!can_create_assignment(&a));
    }

    #[test]
    fn survey_scope_is_owner_regardless_of_branch_or_role() {
        for role in [Role::Admin, Role::BranchAdmin, Role::Inspector] {
            let a = actor(9, role, Some("East"));
            assert_eq!(survey_scope(&a).owner_id, 9);
        }
    }

    #[test]
    fn only_inspectors_create_surveys() {
        assert!(can_create_survey(&actor(1, Role::Inspector, None)));
        assert!(!can_create_survey(&actor(2, Role::Admin, None)));
        assert!(!can_create_survey(&actor(3, Role::BranchAdmin, Some("West"))));
    }
}
