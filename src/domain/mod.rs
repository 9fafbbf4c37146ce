//! Domain types shared across policy, storage, and services

pub mod assignment;
pub mod location;
pub mod survey;
pub mod user;

pub use assignment::AssignmentStatus;
pub use location::{LocationLog, LocationPoint};
pub use survey::{SurveyDraft, SurveyStatus};
pub use user::{Actor, Role};
