//! Service layer: one service per resource, each holding a database handle

pub mod assignments;
pub mod auth;
pub mod stats;
pub mod surveys;
pub mod users;

pub use assignments::{AssignmentService, AssignmentView, NewAssignment};
pub use auth::{AuthService, LoginResponse, MailSender, TokenIssuer, TokenPair};
pub use stats::{DashboardStats, InspectorStats, InspectorTotal, StatsService};
pub use surveys::{SurveyService, SurveyView};
pub use users::{NewUser, UserPatch, UserService, UserView};
