//! Seed runner.
//!
//! Writes a [`SeedDataset`] in dependency order: admin, clients, properties,
//! leases, payments. Every write is a keyed find-or-create, so running the
//! seeder again leaves row counts unchanged. There is no surrounding
//! transaction: when a step fails, rows written by earlier steps stay.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::{SeedError, SeedStep};
use crate::models::{client, lease, property};
use crate::repositories::{
    AdminRepository, ClientRepository, LeaseKey, LeaseRepository, PaymentKey,
    PaymentReceiptRepository, PropertyRepository,
};

use super::records::{LeaseParties, SeedDataset};
use super::summary::{EntityTotals, LoginHint, PasswordHint, SeedSummary, StepOutcome};

struct Repositories {
    admins: AdminRepository,
    clients: ClientRepository,
    properties: PropertyRepository,
    leases: LeaseRepository,
    payments: PaymentReceiptRepository,
}

impl Repositories {
    fn new(db: &DatabaseConnection) -> Self {
        let db = Arc::new(db.clone());
        Self {
            admins: AdminRepository::new(db.clone()),
            clients: ClientRepository::new(db.clone()),
            properties: PropertyRepository::new(db.clone()),
            leases: LeaseRepository::new(db.clone()),
            payments: PaymentReceiptRepository::new(db),
        }
    }

    async fn totals(&self) -> Result<EntityTotals, SeedError> {
        let at = SeedError::at(SeedStep::Summary);
        Ok(EntityTotals {
            admins: self.admins.count().await.map_err(at)?,
            clients: self.clients.count().await.map_err(at)?,
            properties: self.properties.count().await.map_err(at)?,
            leases: self.leases.count().await.map_err(at)?,
            payment_receipts: self.payments.count().await.map_err(at)?,
        })
    }
}

/// Seeds `dataset` into `db` and returns what was written.
///
/// Failures are logged here and returned to the caller; nothing is retried.
pub async fn run_seed(
    db: &DatabaseConnection,
    dataset: &SeedDataset,
) -> Result<SeedSummary, SeedError> {
    match seed_all(db, dataset).await {
        Ok(summary) => {
            tracing::info!(
                clients = summary.totals.clients,
                properties = summary.totals.properties,
                leases = summary.totals.leases,
                payment_receipts = summary.totals.payment_receipts,
                admins = summary.totals.admins,
                "Seed data loaded"
            );
            Ok(summary)
        }
        Err(err) => {
            match err.step() {
                Some(step) => tracing::error!(%step, error = %err, "Seeding aborted"),
                None => tracing::error!(error = %err, "Seed dataset rejected"),
            }
            Err(err)
        }
    }
}

async fn seed_all(
    db: &DatabaseConnection,
    dataset: &SeedDataset,
) -> Result<SeedSummary, SeedError> {
    dataset.validate()?;
    tracing::info!("Loading seed data");

    let repos = Repositories::new(db);

    warn_if_populated(&repos).await?;

    let (admin, login) = seed_admin(&repos, dataset).await?;
    let (clients, client_outcome) = seed_clients(&repos, dataset).await?;
    let (properties, property_outcome) = seed_properties(&repos, dataset).await?;
    let (leases, lease_outcome) = seed_leases(&repos, dataset, &properties, &clients).await?;
    let payment_outcome = seed_payments(&repos, dataset, &leases).await?;

    let totals = repos.totals().await?;

    Ok(SeedSummary {
        totals,
        admin,
        clients: client_outcome,
        properties: property_outcome,
        leases: lease_outcome,
        payment_receipts: payment_outcome,
        login,
    })
}

/// Existing rows are reported but do not stop the run.
async fn warn_if_populated(repos: &Repositories) -> Result<(), SeedError> {
    let at = SeedError::at(SeedStep::ExistingDataCheck);
    let properties = repos.properties.count().await.map_err(at)?;
    let clients = repos.clients.count().await.map_err(at)?;

    if properties > 0 || clients > 0 {
        tracing::warn!(
            properties,
            clients,
            "Database already contains data; only missing sample records will be added"
        );
    }
    Ok(())
}

async fn seed_admin(
    repos: &Repositories,
    dataset: &SeedDataset,
) -> Result<(StepOutcome, LoginHint), SeedError> {
    let admin = &dataset.admin;
    let (model, created) = repos
        .admins
        .find_or_create(&admin.username, admin.active_model())
        .await
        .map_err(SeedError::at(SeedStep::Admin))?;

    if created {
        tracing::info!(username = %model.username, "Admin created");
    } else {
        tracing::info!(username = %model.username, "Admin already exists");
    }

    let password = login_password(admin.password_hint.as_deref(), &model.password, created);
    if password == PasswordHint::Unchanged {
        tracing::warn!(
            username = %model.username,
            "Existing admin kept; its password was not changed by this run"
        );
    }

    let mut outcome = StepOutcome::default();
    outcome.record(created);
    Ok((
        outcome,
        LoginHint {
            username: model.username,
            password,
        },
    ))
}

/// Describes the password that logs in as the stored admin.
fn login_password(hint: Option<&str>, stored_hash: &str, created: bool) -> PasswordHint {
    match hint {
        Some(plain) if created || bcrypt::verify(plain, stored_hash).unwrap_or(false) => {
            PasswordHint::Shown(plain.to_string())
        }
        None if created => PasswordHint::Configured,
        _ => PasswordHint::Unchanged,
    }
}

async fn seed_clients(
    repos: &Repositories,
    dataset: &SeedDataset,
) -> Result<(Vec<client::Model>, StepOutcome), SeedError> {
    let mut clients = Vec::with_capacity(dataset.clients.len());
    let mut outcome = StepOutcome::default();

    for record in &dataset.clients {
        let tax_id = record.tax_id.to_string();
        let (model, created) = repos
            .clients
            .find_or_create(&tax_id, record.active_model())
            .await
            .map_err(SeedError::at(SeedStep::Clients))?;

        if created {
            tracing::info!(tax_id = %model.tax_id, name = %model.name, "Client created");
        } else {
            tracing::info!(tax_id = %model.tax_id, name = %model.name, "Client already exists");
        }
        outcome.record(created);
        clients.push(model);
    }

    Ok((clients, outcome))
}

async fn seed_properties(
    repos: &Repositories,
    dataset: &SeedDataset,
) -> Result<(Vec<property::Model>, StepOutcome), SeedError> {
    let mut properties = Vec::with_capacity(dataset.properties.len());
    let mut outcome = StepOutcome::default();

    for record in &dataset.properties {
        let (model, created) = repos
            .properties
            .find_or_create(&record.address, record.active_model())
            .await
            .map_err(SeedError::at(SeedStep::Properties))?;

        if created {
            tracing::info!(address = %model.address, "Property created");
        } else {
            tracing::info!(address = %model.address, "Property already exists");
        }
        outcome.record(created);
        properties.push(model);
    }

    Ok((properties, outcome))
}

async fn seed_leases(
    repos: &Repositories,
    dataset: &SeedDataset,
    properties: &[property::Model],
    clients: &[client::Model],
) -> Result<(Vec<lease::Model>, StepOutcome), SeedError> {
    let mut leases = Vec::with_capacity(dataset.leases.len());
    let mut outcome = StepOutcome::default();

    for record in &dataset.leases {
        // Indices were checked by SeedDataset::validate.
        let parties = LeaseParties {
            property_id: properties[record.property].id,
            landlord_id: clients[record.landlord].id,
            tenant_id: clients[record.tenant].id,
        };
        let key = LeaseKey {
            property_id: parties.property_id,
            tenant_id: parties.tenant_id,
            start_date: record.start_date,
        };

        let (model, created) = repos
            .leases
            .find_or_create(&key, record.active_model(parties))
            .await
            .map_err(SeedError::at(SeedStep::Leases))?;

        let address = &properties[record.property].address;
        let tenant = &clients[record.tenant].name;
        if created {
            tracing::info!(%address, %tenant, start_date = %model.start_date, "Lease created");
        } else {
            tracing::info!(%address, %tenant, start_date = %model.start_date, "Lease already exists");
        }
        outcome.record(created);
        leases.push(model);
    }

    Ok((leases, outcome))
}

async fn seed_payments(
    repos: &Repositories,
    dataset: &SeedDataset,
    leases: &[lease::Model],
) -> Result<StepOutcome, SeedError> {
    let mut outcome = StepOutcome::default();

    for record in &dataset.payments {
        let lease_id: Uuid = leases[record.lease].id;
        let key = PaymentKey {
            lease_id,
            payment_date: record.payment_date,
            period: record.period.clone(),
        };

        let (model, created) = repos
            .payments
            .find_or_create(&key, record.active_model(lease_id))
            .await
            .map_err(SeedError::at(SeedStep::Payments))?;

        if created {
            tracing::info!(amount = model.amount, period = %model.period, "Payment created");
        } else {
            tracing::info!(amount = model.amount, period = %model.period, "Payment already exists");
        }
        outcome.record(created);
    }

    Ok(outcome)
}
