//! Survey record entity ("inspections"): the detailed questionnaire plus
//! embedded location log, owned by one inspector

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::location::LocationLog;
use crate::domain::{SurveyDraft, SurveyStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    /// Owning inspector; set at create time and immutable thereafter
    #[sea_orm(indexed)]
    pub inspector_id: i32,

    /// Free text, independent of the owning inspector's stored branch
    #[sea_orm(indexed)]
    pub branch_name: Option<String>,

    // Location tracking
    #[sea_orm(column_type = "Json")]
    pub location_points: Json,
    pub location_start_time: Option<DateTimeUtc>,
    pub location_end_time: Option<DateTimeUtc>,
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
    #[sea_orm(column_type = "Json")]
    pub partners_directors: Json,

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
    #[sea_orm(column_type = "Json")]
    pub competitors: Json,
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
    #[sea_orm(column_type = "Json")]
    pub key_employees: Json,

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
    #[sea_orm(column_type = "Json")]
    pub working_capital_items: Json,

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
    #[sea_orm(column_type = "Json")]
    pub checklist_items: Json,

    // Sections L and M: media references
    #[sea_orm(column_type = "Json")]
    pub site_photos: Json,
    #[sea_orm(column_type = "Json")]
    pub site_video: Json,
    #[sea_orm(column_type = "Json")]
    pub uploaded_documents: Json,

    #[sea_orm(indexed)]
    pub status: SurveyStatus,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InspectorId",
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
            status: Set(SurveyStatus::Pending),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

impl Model {
    /// The embedded location tracking data of this record.
    ///
    /// Unreadable point blobs fall back to an empty sequence rather than
    /// failing a read.
    pub fn location_log(&self) -> LocationLog {
        LocationLog {
            points: serde_json::from_value(self.location_points.clone()).unwrap_or_default(),
            start_time: self.location_start_time,
            end_time: self.location_end_time,
            total_points: self.total_location_points,
        }
    }
}

impl ActiveModel {
    /// Replace every caller-supplied field with the draft's contents.
    ///
    /// Owner, uuid, and created_at are never touched here; create forces the
    /// owner to the requesting actor and update leaves it as stored.
    pub fn apply_draft(&mut self, draft: &SurveyDraft) -> Result<(), serde_json::Error> {
        self.branch_name = Set(draft.branch_name.clone());
        self.status = Set(draft.status);

        self.location_points = Set(serde_json::to_value(&draft.location_points)?);
        self.location_start_time = Set(draft.location_start_time);
        self.location_end_time = Set(draft.location_end_time);
        self.total_location_points = Set(draft.total_location_points);

        self.client_name = Set(draft.client_name.clone());
        self.group_name = Set(draft.group_name.clone());
        self.industry_name = Set(draft.industry_name.clone());
        self.nature_of_business = Set(draft.nature_of_business.clone());
        self.legal_status = Set(draft.legal_status.clone());
        self.date_of_establishment = Set(draft.date_of_establishment.clone());
        self.office_address = Set(draft.office_address.clone());
        self.showroom_address = Set(draft.showroom_address.clone());
        self.factory_address = Set(draft.factory_address.clone());
        self.phone_number = Set(draft.phone_number.clone());
        self.account_number = Set(draft.account_number.clone());
        self.account_id = Set(draft.account_id.clone());
        self.tin_number = Set(draft.tin_number.clone());
        self.date_of_opening = Set(draft.date_of_opening.clone());
        self.vat_reg_number = Set(draft.vat_reg_number.clone());
        self.first_investment_date = Set(draft.first_investment_date.clone());
        self.sector_code = Set(draft.sector_code.clone());
        self.trade_license = Set(draft.trade_license.clone());
        self.economic_purpose_code = Set(draft.economic_purpose_code.clone());
        self.investment_category = Set(draft.investment_category.clone());

        self.owner_name = Set(draft.owner_name.clone());
        self.owner_age = Set(draft.owner_age.clone());
        self.father_name = Set(draft.father_name.clone());
        self.mother_name = Set(draft.mother_name.clone());
        self.spouse_name = Set(draft.spouse_name.clone());
        self.academic_qualification = Set(draft.academic_qualification.clone());
        self.children_info = Set(draft.children_info.clone());
        self.business_successor = Set(draft.business_successor.clone());
        self.residential_address = Set(draft.residential_address.clone());
        self.permanent_address = Set(draft.permanent_address.clone());

        self.partners_directors = Set(serde_json::to_value(&draft.partners_directors)?);

        self.purpose_investment = Set(draft.purpose_investment.clone());
        self.purpose_bank_guarantee = Set(draft.purpose_bank_guarantee.clone());
        self.period_investment = Set(draft.period_investment.clone());

        self.facility_type = Set(draft.facility_type.clone());
        self.existing_limit = Set(draft.existing_limit.clone());
        self.applied_limit = Set(draft.applied_limit.clone());
        self.recommended_limit = Set(draft.recommended_limit.clone());
        self.bank_percentage = Set(draft.bank_percentage.clone());
        self.client_percentage = Set(draft.client_percentage.clone());

        self.outstanding_type = Set(draft.outstanding_type.clone());
        self.limit_amount = Set(draft.limit_amount.clone());
        self.net_outstanding = Set(draft.net_outstanding.clone());
        self.gross_outstanding = Set(draft.gross_outstanding.clone());

        self.market_situation = Set(draft.market_situation.clone());
        self.client_position = Set(draft.client_position.clone());
        self.competitors = Set(serde_json::to_value(&draft.competitors)?);
        self.business_reputation = Set(draft.business_reputation.clone());
        self.production_type = Set(draft.production_type.clone());
        self.product_name = Set(draft.product_name.clone());
        self.production_capacity = Set(draft.production_capacity.clone());
        self.actual_production = Set(draft.actual_production.clone());
        self.profitability_observation = Set(draft.profitability_observation.clone());

        self.male_officer = Set(draft.male_officer.clone());
        self.female_officer = Set(draft.female_officer.clone());
        self.skilled_officer = Set(draft.skilled_officer.clone());
        self.unskilled_officer = Set(draft.unskilled_officer.clone());
        self.male_worker = Set(draft.male_worker.clone());
        self.female_worker = Set(draft.female_worker.clone());
        self.skilled_worker = Set(draft.skilled_worker.clone());
        self.unskilled_worker = Set(draft.unskilled_worker.clone());

        self.key_employees = Set(serde_json::to_value(&draft.key_employees)?);

        self.cash_balance = Set(draft.cash_balance.clone());
        self.stock_trade_finished = Set(draft.stock_trade_finished.clone());
        self.stock_trade_financial = Set(draft.stock_trade_financial.clone());
        self.accounts_receivable = Set(draft.accounts_receivable.clone());
        self.advance_deposit = Set(draft.advance_deposit.clone());
        self.other_current_assets = Set(draft.other_current_assets.clone());
        self.land_building = Set(draft.land_building.clone());
        self.plant_machinery = Set(draft.plant_machinery.clone());
        self.other_assets = Set(draft.other_assets.clone());
        self.ibbl_investment = Set(draft.ibbl_investment.clone());
        self.other_banks_investment = Set(draft.other_banks_investment.clone());
        self.borrowing_sources = Set(draft.borrowing_sources.clone());
        self.accounts_payable = Set(draft.accounts_payable.clone());
        self.other_current_liabilities = Set(draft.other_current_liabilities.clone());
        self.long_term_liabilities = Set(draft.long_term_liabilities.clone());
        self.other_non_current_liabilities = Set(draft.other_non_current_liabilities.clone());
        self.paid_up_capital = Set(draft.paid_up_capital.clone());
        self.retained_earning = Set(draft.retained_earning.clone());
        self.resources = Set(draft.resources.clone());

        self.working_capital_items = Set(serde_json::to_value(&draft.working_capital_items)?);

        self.godown_location = Set(draft.godown_location.clone());
        self.godown_capacity = Set(draft.godown_capacity.clone());
        self.godown_space = Set(draft.godown_space.clone());
        self.godown_nature = Set(draft.godown_nature.clone());
        self.godown_owner = Set(draft.godown_owner.clone());
        self.distance_from_branch = Set(draft.distance_from_branch.clone());
        self.items_to_store = Set(draft.items_to_store.clone());
        self.warehouse_license = Set(draft.warehouse_license);
        self.godown_guard = Set(draft.godown_guard);
        self.damp_proof = Set(draft.damp_proof);
        self.easy_access = Set(draft.easy_access);
        self.letter_disclaimer = Set(draft.letter_disclaimer);
        self.insurance_policy = Set(draft.insurance_policy);
        self.godown_hired = Set(draft.godown_hired);

        self.checklist_items = Set(serde_json::to_value(&draft.checklist_items)?);

        self.site_photos = Set(serde_json::to_value(&draft.site_photos)?);
        self.site_video = Set(serde_json::to_value(&draft.site_video)?);
        self.uploaded_documents = Set(serde_json::to_value(&draft.uploaded_documents)?);

        Ok(())
    }
}
