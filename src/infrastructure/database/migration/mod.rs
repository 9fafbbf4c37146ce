//! Database migrations

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_inspection_tables::Migration),
            Box::new(m20250601_000003_create_reset_tokens::Migration),
        ]
    }
}

mod m20250601_000001_create_users;
mod m20250601_000002_create_inspection_tables;
mod m20250601_000003_create_reset_tokens;
