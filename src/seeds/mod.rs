//! Database seeding.
//!
//! Loads the sample rental data (an admin account, clients, properties,
//! leases and payment receipts) into a database whose schema is already in
//! place. Runs are idempotent: every record is looked up by its natural key
//! before it is inserted.

pub mod dataset;
pub mod records;
pub mod runner;
pub mod summary;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::error::SeedError;

pub use dataset::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_PASSWORD_HASH, DEFAULT_ADMIN_USERNAME, default_dataset,
};
pub use records::{
    AdminSeed, ClientSeed, LeaseSeed, LeaseStatus, ListingType, PaymentSeed, PaymentStatus,
    PropertySeed, PropertyType, ReceiptType, SeedDataset, UpdateFrequency,
};
pub use runner::run_seed;
pub use summary::{EntityTotals, LoginHint, PasswordHint, SeedSummary, StepOutcome};

/// Seeds the default dataset with the development admin.
pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedSummary, SeedError> {
    let dataset = default_dataset()?;
    run_seed(db, &dataset).await
}

/// Seeds the default dataset, replacing the admin password when one is configured.
pub async fn seed_with_config(
    db: &DatabaseConnection,
    config: &AppConfig,
) -> Result<SeedSummary, SeedError> {
    let mut dataset = default_dataset()?;
    if let Some(password) = &config.admin_password {
        tracing::info!(username = DEFAULT_ADMIN_USERNAME, "Using configured admin password");
        dataset = dataset.with_admin(AdminSeed::with_password(DEFAULT_ADMIN_USERNAME, password)?);
    }
    run_seed(db, &dataset).await
}
