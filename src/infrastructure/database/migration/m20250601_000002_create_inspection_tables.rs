//! Migration: assignment and survey record tables

use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lightweight assignment records
        manager
            .create_table(
                Table::create()
                    .table(NewInspections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NewInspections::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(NewInspections::Uuid).uuid().not_null().unique_key())
                    .col(ColumnDef::new(NewInspections::Project).string().not_null())
                    .col(ColumnDef::new(NewInspections::ClientName).string().not_null())
                    .col(ColumnDef::new(NewInspections::IndustryName).string().not_null())
                    .col(ColumnDef::new(NewInspections::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(NewInspections::AssignedInspectorId).integer().not_null())
                    .col(ColumnDef::new(NewInspections::BranchName).string().not_null())
                    .col(ColumnDef::new(NewInspections::Status).text().not_null())
                    .col(ColumnDef::new(NewInspections::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(NewInspections::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(NewInspections::Table, NewInspections::AssignedInspectorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_new_inspections_branch")
                    .table(NewInspections::Table)
                    .col(NewInspections::BranchName)
                    .to_owned(),
            )
            .await?;

        // Detailed survey records: flat questionnaire plus location log
        manager
            .create_table(
                Table::create()
                    .table(Inspections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inspections::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Inspections::Uuid).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Inspections::InspectorId).integer().not_null())
                    .col(ColumnDef::new(Inspections::BranchName).string())
                    .col(ColumnDef::new(Inspections::LocationPoints).json().not_null())
                    .col(ColumnDef::new(Inspections::LocationStartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Inspections::LocationEndTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Inspections::TotalLocationPoints).integer().not_null().default(0))
                    .col(ColumnDef::new(Inspections::ClientName).string())
                    .col(ColumnDef::new(Inspections::GroupName).string())
                    .col(ColumnDef::new(Inspections::IndustryName).string())
                    .col(ColumnDef::new(Inspections::NatureOfBusiness).string())
                    .col(ColumnDef::new(Inspections::LegalStatus).string())
                    .col(ColumnDef::new(Inspections::DateOfEstablishment).string())
                    .col(ColumnDef::new(Inspections::OfficeAddress).string())
                    .col(ColumnDef::new(Inspections::ShowroomAddress).string())
                    .col(ColumnDef::new(Inspections::FactoryAddress).string())
                    .col(ColumnDef::new(Inspections::PhoneNumber).string())
                    .col(ColumnDef::new(Inspections::AccountNumber).string())
                    .col(ColumnDef::new(Inspections::AccountId).string())
                    .col(ColumnDef::new(Inspections::TinNumber).string())
                    .col(ColumnDef::new(Inspections::DateOfOpening).string())
                    .col(ColumnDef::new(Inspections::VatRegNumber).string())
                    .col(ColumnDef::new(Inspections::FirstInvestmentDate).string())
                    .col(ColumnDef::new(Inspections::SectorCode).string())
                    .col(ColumnDef::new(Inspections::TradeLicense).string())
                    .col(ColumnDef::new(Inspections::EconomicPurposeCode).string())
                    .col(ColumnDef::new(Inspections::InvestmentCategory).string())
                    .col(ColumnDef::new(Inspections::OwnerName).string())
                    .col(ColumnDef::new(Inspections::OwnerAge).string())
                    .col(ColumnDef::new(Inspections::FatherName).string())
                    .col(ColumnDef::new(Inspections::MotherName).string())
                    .col(ColumnDef::new(Inspections::SpouseName).string())
                    .col(ColumnDef::new(Inspections::AcademicQualification).string())
                    .col(ColumnDef::new(Inspections::ChildrenInfo).string())
                    .col(ColumnDef::new(Inspections::BusinessSuccessor).string())
                    .col(ColumnDef::new(Inspections::ResidentialAddress).string())
                    .col(ColumnDef::new(Inspections::PermanentAddress).string())
                    .col(ColumnDef::new(Inspections::PartnersDirectors).json().not_null())
                    .col(ColumnDef::new(Inspections::PurposeInvestment).string())
                    .col(ColumnDef::new(Inspections::PurposeBankGuarantee).string())
                    .col(ColumnDef::new(Inspections::PeriodInvestment).string())
                    .col(ColumnDef::new(Inspections::FacilityType).string())
                    .col(ColumnDef::new(Inspections::ExistingLimit).string())
                    .col(ColumnDef::new(Inspections::AppliedLimit).string())
                    .col(ColumnDef::new(Inspections::RecommendedLimit).string())
                    .col(ColumnDef::new(Inspections::BankPercentage).string())
                    .col(ColumnDef::new(Inspections::ClientPercentage).string())
                    .col(ColumnDef::new(Inspections::OutstandingType).string())
                    .col(ColumnDef::new(Inspections::LimitAmount).string())
                    .col(ColumnDef::new(Inspections::NetOutstanding).string())
                    .col(ColumnDef::new(Inspections::GrossOutstanding).string())
                    .col(ColumnDef::new(Inspections::MarketSituation).string())
                    .col(ColumnDef::new(Inspections::ClientPosition).string())
                    .col(ColumnDef::new(Inspections::Competitors).json().not_null())
                    .col(ColumnDef::new(Inspections::BusinessReputation).string())
                    .col(ColumnDef::new(Inspections::ProductionType).string())
                    .col(ColumnDef::new(Inspections::ProductName).string())
                    .col(ColumnDef::new(Inspections::ProductionCapacity).string())
                    .col(ColumnDef::new(Inspections::ActualProduction).string())
                    .col(ColumnDef::new(Inspections::ProfitabilityObservation).string())
                    .col(ColumnDef::new(Inspections::MaleOfficer).string())
                    .col(ColumnDef::new(Inspections::FemaleOfficer).string())
                    .col(ColumnDef::new(Inspections::SkilledOfficer).string())
                    .col(ColumnDef::new(Inspections::UnskilledOfficer).string())
                    .col(ColumnDef::new(Inspections::MaleWorker).string())
                    .col(ColumnDef::new(Inspections::FemaleWorker).string())
                    .col(ColumnDef::new(Inspections::SkilledWorker).string())
                    .col(ColumnDef::new(Inspections::UnskilledWorker).string())
                    .col(ColumnDef::new(Inspections::KeyEmployees).json().not_null())
                    .col(ColumnDef::new(Inspections::CashBalance).string())
                    .col(ColumnDef::new(Inspections::StockTradeFinished).string())
                    .col(ColumnDef::new(Inspections::StockTradeFinancial).string())
                    .col(ColumnDef::new(Inspections::AccountsReceivable).string())
                    .col(ColumnDef::new(Inspections::AdvanceDeposit).string())
                    .col(ColumnDef::new(Inspections::OtherCurrentAssets).string())
                    .col(ColumnDef::new(Inspections::LandBuilding).string())
                    .col(ColumnDef::new(Inspections::PlantMachinery).string())
                    .col(ColumnDef::new(Inspections::OtherAssets).string())
                    .col(ColumnDef::new(Inspections::IbblInvestment).string())
                    .col(ColumnDef::new(Inspections::OtherBanksInvestment).string())
                    .col(ColumnDef::new(Inspections::BorrowingSources).string())
                    .col(ColumnDef::new(Inspections::AccountsPayable).string())
                    .col(ColumnDef::new(Inspections::OtherCurrentLiabilities).string())
                    .col(ColumnDef::new(Inspections::LongTermLiabilities).string())
                    .col(ColumnDef::new(Inspections::OtherNonCurrentLiabilities).string())
                    .col(ColumnDef::new(Inspections::PaidUpCapital).string())
                    .col(ColumnDef::new(Inspections::RetainedEarning).string())
                    .col(ColumnDef::new(Inspections::Resources).string())
                    .col(ColumnDef::new(Inspections::WorkingCapitalItems).json().not_null())
                    .col(ColumnDef::new(Inspections::GodownLocation).string())
                    .col(ColumnDef::new(Inspections::GodownCapacity).string())
                    .col(ColumnDef::new(Inspections::GodownSpace).string())
                    .col(ColumnDef::new(Inspections::GodownNature).string())
                    .col(ColumnDef::new(Inspections::GodownOwner).string())
                    .col(ColumnDef::new(Inspections::DistanceFromBranch).string())
                    .col(ColumnDef::new(Inspections::ItemsToStore).string())
                    .col(ColumnDef::new(Inspections::WarehouseLicense).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::GodownGuard).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::DampProof).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::EasyAccess).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::LetterDisclaimer).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::InsurancePolicy).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::GodownHired).boolean().not_null().default(false))
                    .col(ColumnDef::new(Inspections::ChecklistItems).json().not_null())
                    .col(ColumnDef::new(Inspections::SitePhotos).json().not_null())
                    .col(ColumnDef::new(Inspections::SiteVideo).json().not_null())
                    .col(ColumnDef::new(Inspections::UploadedDocuments).json().not_null())
                    .col(ColumnDef::new(Inspections::Status).text().not_null())
                    .col(ColumnDef::new(Inspections::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Inspections::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Inspections::Table, Inspections::InspectorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inspections_inspector")
                    .table(Inspections::Table)
                    .col(Inspections::InspectorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inspections_status")
                    .table(Inspections::Table)
                    .col(Inspections::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inspections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NewInspections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewInspections {
    Table,
    Id,
    Uuid,
    Project,
    ClientName,
    IndustryName,
    PhoneNumber,
    AssignedInspectorId,
    BranchName,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Inspections {
    Table,
    Id,
    Uuid,
    InspectorId,
    BranchName,
    LocationPoints,
    LocationStartTime,
    LocationEndTime,
    TotalLocationPoints,
    ClientName,
    GroupName,
    IndustryName,
    NatureOfBusiness,
    LegalStatus,
    DateOfEstablishment,
    OfficeAddress,
    ShowroomAddress,
    FactoryAddress,
    PhoneNumber,
    AccountNumber,
    AccountId,
    TinNumber,
    DateOfOpening,
    VatRegNumber,
    FirstInvestmentDate,
    SectorCode,
    TradeLicense,
    EconomicPurposeCode,
    InvestmentCategory,
    OwnerName,
    OwnerAge,
    FatherName,
    MotherName,
    SpouseName,
    AcademicQualification,
    ChildrenInfo,
    BusinessSuccessor,
    ResidentialAddress,
    PermanentAddress,
    PartnersDirectors,
    PurposeInvestment,
    PurposeBankGuarantee,
    PeriodInvestment,
    FacilityType,
    ExistingLimit,
    AppliedLimit,
    RecommendedLimit,
    BankPercentage,
    ClientPercentage,
    OutstandingType,
    LimitAmount,
    NetOutstanding,
    GrossOutstanding,
    MarketSituation,
    ClientPosition,
    Competitors,
    BusinessReputation,
    ProductionType,
    ProductName,
    ProductionCapacity,
    ActualProduction,
    ProfitabilityObservation,
    MaleOfficer,
    FemaleOfficer,
    SkilledOfficer,
    UnskilledOfficer,
    MaleWorker,
    FemaleWorker,
    SkilledWorker,
    UnskilledWorker,
    KeyEmployees,
    CashBalance,
    StockTradeFinished,
    StockTradeFinancial,
    AccountsReceivable,
    AdvanceDeposit,
    OtherCurrentAssets,
    LandBuilding,
    PlantMachinery,
    OtherAssets,
    IbblInvestment,
    OtherBanksInvestment,
    BorrowingSources,
    AccountsPayable,
    OtherCurrentLiabilities,
    LongTermLiabilities,
    OtherNonCurrentLiabilities,
    PaidUpCapital,
    RetainedEarning,
    Resources,
    WorkingCapitalItems,
    GodownLocation,
    GodownCapacity,
    GodownSpace,
    GodownNature,
    GodownOwner,
    DistanceFromBranch,
    ItemsToStore,
    WarehouseLicense,
    GodownGuard,
    DampProof,
    EasyAccess,
    LetterDisclaimer,
    InsurancePolicy,
    GodownHired,
    ChecklistItems,
    SitePhotos,
    SiteVideo,
    UploadedDocuments,
    Status,
    CreatedAt,
    UpdatedAt,
}
