//! SeaORM entity definitions
//!
//! These map the domain records to database tables.

pub mod assignment;
pub mod reset_token;
pub mod survey;
pub mod user;

// Re-export all entities
pub use assignment::Entity as Assignment;
pub use reset_token::Entity as ResetToken;
pub use survey::Entity as Survey;
pub use user::Entity as User;

// Re-export active models for easy access
pub use assignment::ActiveModel as AssignmentActive;
pub use reset_token::ActiveModel as ResetTokenActive;
pub use survey::ActiveModel as SurveyActive;
pub use user::ActiveModel as UserActive;
