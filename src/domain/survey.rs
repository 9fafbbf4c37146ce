//! Survey record status and questionnaire section shapes
//!
//! The survey questionnaire is a large flat form grouped into named sections.
//! Nested collections (partners, key employees, competitors, working capital
//! rows, checklist, media references) were schema-less JSON blobs in the
//! source system; here they are explicit structs validated on write.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

use crate::domain::location::LocationPoint;

/// Status of a survey record.
///
/// Capitalized values, stored verbatim. A distinct set from
/// [`crate::domain::AssignmentStatus`]; the two are not unified.
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
pub enum SurveyStatus {
    #[default]
    #[sea_orm(string_value = "Pending")]
    #[strum(serialize = "Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[sea_orm(string_value = "In Progress")]
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    #[strum(serialize = "Completed")]
    #[serde(rename = "Completed")]
    Completed,
    #[sea_orm(string_value = "Approved")]
    #[strum(serialize = "Approved")]
    #[serde(rename = "Approved")]
    Approved,
    #[sea_orm(string_value = "Rejected")]
    #[strum(serialize = "Rejected")]
    #[serde(rename = "Rejected")]
    Rejected,
}

impl SurveyStatus {
    /// Parse a requested status value, or report the allowed set.
    ///
    /// An invalid value is a validation failure naming every accepted
    /// status; the stored status stays untouched in that case.
    pub fn parse(value: &str) -> Result<Self, String> {
        value.parse::<SurveyStatus>().map_err(|_| {
            let allowed: Vec<String> =
                SurveyStatus::iter().map(|s| s.to_string()).collect();
            format!("Invalid status. Must be one of: {:?}", allowed)
        })
    }
}

/// Section C: one partner or director
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub name: String,
    pub age: String,
    pub qualification: String,
    pub share: String,
    pub status: String,
    pub relationship: String,
}

/// One key employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyEmployee {
    pub name: String,
    pub designation: String,
    pub age: String,
    pub qualification: String,
    pub experience: String,
}

/// Section G: one competitor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    pub name: String,
    pub address: String,
    #[serde(rename = "marketShare")]
    pub market_share: String,
}

/// Section I: one working capital assessment row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingCapitalItem {
    pub name: String,
    pub unit: String,
    pub rate: String,
    pub amount: String,
    #[serde(rename = "tiedUpDays")]
    pub tied_up_days: String,
    #[serde(rename = "amountDxe")]
    pub amount_dxe: String,
}

/// Reference to an uploaded photo, video, or document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    pub name: String,
    pub path: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: Option<DateTime<Utc>>,
}

/// Section K: checklist entries keyed by item label.
///
/// Tri-state: `Some(true)` yes, `Some(false)` no, `None` unanswered.
pub type Checklist = BTreeMap<String, Option<bool>>;

/// Caller-supplied contents of a survey record.
///
/// Used for both create and full-replace update. The owning inspector is
/// never part of this shape: it is forced to the requesting actor
/// server-side, so a caller cannot impersonate another owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyDraft {
    /// Free text, independent of the owning inspector's stored branch
    pub branch_name: Option<String>,
    pub status: SurveyStatus,

    // Location tracking
    pub location_points: Vec<LocationPoint>,
    pub location_start_time: Option<DateTime<Utc>>,
    pub location_end_time: Option<DateTime<Utc>>,
    pub total_location_points: i32,

    // Section A: client information
    pub client_name: Option<String>,
    pub group_name: Option<String>,
    pub industry_name: Option<String>,
    pub nature_of_business: Option<String>,
    pub legal_status: Option<String>,
    pub date_of_establishment: Option<String>,
    pub office_address: Option<String>,
    pub showroom_address: Option<String>,
    pub factory_address: Option<String>,
    pub phone_number: Option<String>,
    pub account_number: Option<String>,
    pub account_id: Option<String>,
    pub tin_number: Option<String>,
    pub date_of_opening: Option<String>,
    pub vat_reg_number: Option<String>,
    pub first_investment_date: Option<String>,
    pub sector_code: Option<String>,
    pub trade_license: Option<String>,
    pub economic_purpose_code: Option<String>,
    pub investment_category: Option<String>,

    // Section B: owner information
    pub owner_name: Option<String>,
    pub owner_age: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub spouse_name: Option<String>,
    pub academic_qualification: Option<String>,
    pub children_info: Option<String>,
    pub business_successor: Option<String>,
    pub residential_address: Option<String>,
    pub permanent_address: Option<String>,

    // Section C: partners/directors
    pub partners_directors: Vec<Partner>,

    // Section D: purpose
    pub purpose_investment: Option<String>,
    pub purpose_bank_guarantee: Option<String>,
    pub period_investment: Option<String>,

    // Section E: proposed facilities
    pub facility_type: Option<String>,
    pub existing_limit: Option<String>,
    pub applied_limit: Option<String>,
    pub recommended_limit: Option<String>,
    pub bank_percentage: Option<String>,
    pub client_percentage: Option<String>,

    // Section F: present outstanding
    pub outstanding_type: Option<String>,
    pub limit_amount: Option<String>,
    pub net_outstanding: Option<String>,
    pub gross_outstanding: Option<String>,

    // Section G: business analysis
    pub market_situation: Option<String>,
    pub client_position: Option<String>,
    pub competitors: Vec<Competitor>,
    pub business_reputation: Option<String>,
    pub production_type: Option<String>,
    pub product_name: Option<String>,
    pub production_capacity: Option<String>,
    pub actual_production: Option<String>,
    pub profitability_observation: Option<String>,

    // Labor force
    pub male_officer: Option<String>,
    pub female_officer: Option<String>,
    pub skilled_officer: Option<String>,
    pub unskilled_officer: Option<String>,
    pub male_worker: Option<String>,
    pub female_worker: Option<String>,
    pub skilled_worker: Option<String>,
    pub unskilled_worker: Option<String>,

    // Key employees
    pub key_employees: Vec<KeyEmployee>,

    // Section H: property and assets
    pub cash_balance: Option<String>,
    pub stock_trade_finished: Option<String>,
    pub stock_trade_financial: Option<String>,
    pub accounts_receivable: Option<String>,
    pub advance_deposit: Option<String>,
    pub other_current_assets: Option<String>,
    pub land_building: Option<String>,
    pub plant_machinery: Option<String>,
    pub other_assets: Option<String>,
    pub ibbl_investment: Option<String>,
    pub other_banks_investment: Option<String>,
    pub borrowing_sources: Option<String>,
    pub accounts_payable: Option<String>,
    pub other_current_liabilities: Option<String>,
    pub long_term_liabilities: Option<String>,
    pub other_non_current_liabilities: Option<String>,
    pub paid_up_capital: Option<String>,
    pub retained_earning: Option<String>,
    pub resources: Option<String>,

    // Section I: working capital assessment
    pub working_capital_items: Vec<WorkingCapitalItem>,

    // Section J: godown particulars
    pub godown_location: Option<String>,
    pub godown_capacity: Option<String>,
    pub godown_space: Option<String>,
    pub godown_nature: Option<String>,
    pub godown_owner: Option<String>,
    pub distance_from_branch: Option<String>,
    pub items_to_store: Option<String>,
    pub warehouse_license: bool,
    pub godown_guard: bool,
    pub damp_proof: bool,
    pub easy_access: bool,
    pub letter_disclaimer: bool,
    pub insurance_policy: bool,
    pub godown_hired: bool,

    // Section K: checklist
    pub checklist_items: Checklist,

    // Sections L and M: media references
    pub site_photos: Vec<MediaRef>,
    pub site_video: Vec<MediaRef>,
    pub uploaded_documents: Vec<MediaRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_stored_casing() {
        assert_eq!(SurveyStatus::parse("In Progress"), Ok(SurveyStatus::InProgress));
        assert_eq!(SurveyStatus::parse("Pending"), Ok(SurveyStatus::Pending));
    }

    #[test]
    fn invalid_status_names_allowed_set() {
        let err = SurveyStatus::parse("in_progress").unwrap_err();
        assert!(err.starts_with("Invalid status. Must be one of:"));
        assert!(err.contains("In Progress"));
        assert!(err.contains("Rejected"));
    }

    #[test]
    fn draft_deserializes_from_sparse_json() {
        let draft: SurveyDraft = serde_json::from_str(
            r#"{"client_name": "Acme Traders", "warehouse_license": true}"#,
        )
        .unwrap();
        assert_eq!(draft.client_name.as_deref(), Some("Acme Traders"));
        assert!(draft.warehouse_license);
        assert_eq!(draft.status, SurveyStatus::Pending);
        assert!(draft.location_points.is_empty());
    }
}
