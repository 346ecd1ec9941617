//! Database migrations for the rentals back office.
//!
//! This module contains all database migrations using SeaORM Migration.
//! Applying them is the schema synchronisation step run before seeding.

pub use sea_orm_migration::prelude::*;

mod m2025_06_02_090000_create_admins;
mod m2025_06_02_090100_create_clients;
mod m2025_06_02_090200_create_properties;
mod m2025_06_02_090300_create_leases;
mod m2025_06_02_090400_create_payment_receipts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_02_090000_create_admins::Migration),
            Box::new(m2025_06_02_090100_create_clients::Migration),
            Box::new(m2025_06_02_090200_create_properties::Migration),
            Box::new(m2025_06_02_090300_create_leases::Migration),
            Box::new(m2025_06_02_090400_create_payment_receipts::Migration),
        ]
    }
}
