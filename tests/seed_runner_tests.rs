//! Integration tests for the seed runner against an in-memory SQLite database.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use rentals_seed::config::AppConfig;
use rentals_seed::error::{SeedError, SeedStep};
use rentals_seed::models::client;
use rentals_seed::repositories::{
    AdminRepository, ClientRepository, LeaseKey, LeaseRepository, PaymentReceiptRepository,
    PropertyRepository,
};
use rentals_seed::seeds::{
    DEFAULT_ADMIN_PASSWORD, PasswordHint, default_dataset, run_seed, seed_database,
    seed_with_config,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{execute_sql, setup_test_db};

struct Counts {
    admins: u64,
    clients: u64,
    properties: u64,
    leases: u64,
    payments: u64,
}

async fn counts(db: &DatabaseConnection) -> Result<Counts> {
    let db = Arc::new(db.clone());
    Ok(Counts {
        admins: AdminRepository::new(db.clone()).count().await?,
        clients: ClientRepository::new(db.clone()).count().await?,
        properties: PropertyRepository::new(db.clone()).count().await?,
        leases: LeaseRepository::new(db.clone()).count().await?,
        payments: PaymentReceiptRepository::new(db).count().await?,
    })
}

#[tokio::test]
async fn seeding_empty_database_inserts_default_dataset() -> Result<()> {
    let db = setup_test_db().await?;
    let summary = seed_database(&db).await?;

    let counts = counts(&db).await?;
    assert_eq!(counts.admins, 1);
    assert_eq!(counts.clients, 5);
    assert_eq!(counts.properties, 8);
    assert_eq!(counts.leases, 3);
    assert_eq!(counts.payments, 5);

    assert_eq!(summary.totals.clients, 5);
    assert_eq!(summary.totals.payment_receipts, 5);
    assert_eq!(summary.clients.created, 5);
    assert_eq!(summary.properties.created, 8);
    assert_eq!(summary.leases.created, 3);
    assert_eq!(summary.payment_receipts.created, 5);
    assert_eq!(summary.created(), 22);
    assert_eq!(summary.login.username, "admin");
    assert_eq!(
        summary.login.password,
        PasswordHint::Shown(DEFAULT_ADMIN_PASSWORD.to_string())
    );
    Ok(())
}

#[tokio::test]
async fn seeding_twice_adds_nothing() -> Result<()> {
    let db = setup_test_db().await?;
    seed_database(&db).await?;
    let second = seed_database(&db).await?;

    assert_eq!(second.created(), 0);
    assert_eq!(second.clients.existing, 5);
    assert_eq!(second.properties.existing, 8);
    assert_eq!(second.leases.existing, 3);
    assert_eq!(second.payment_receipts.existing, 5);

    let counts = counts(&db).await?;
    assert_eq!(counts.admins, 1);
    assert_eq!(counts.clients, 5);
    assert_eq!(counts.properties, 8);
    assert_eq!(counts.leases, 3);
    assert_eq!(counts.payments, 5);
    Ok(())
}

#[tokio::test]
async fn existing_client_is_reused_not_overwritten() -> Result<()> {
    let db = setup_test_db().await?;
    let dataset = default_dataset()?;
    let tax_id = dataset.clients[0].tax_id.to_string();

    let now = Utc::now();
    let existing = client::ActiveModel {
        id: Set(Uuid::new_v4()),
        tax_id: Set(tax_id.clone()),
        name: Set("Cliente Previo".to_string()),
        email: Set("previo@example.com".to_string()),
        address: Set("Calle Falsa 123".to_string()),
        city: Set("Rosario".to_string()),
        province: Set("Santa Fe".to_string()),
        mobile_phone: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&db)
    .await?;

    let summary = run_seed(&db, &dataset).await?;
    assert_eq!(summary.clients.created, 4);
    assert_eq!(summary.clients.existing, 1);
    assert_eq!(summary.totals.clients, 5);

    let repo = ClientRepository::new(Arc::new(db.clone()));
    let stored = repo.find_by_tax_id(&tax_id).await?.expect("client exists");
    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.name, "Cliente Previo");

    // The first lease's tenant is the pre-existing row.
    let property = PropertyRepository::new(Arc::new(db.clone()))
        .find_by_address(&dataset.properties[0].address)
        .await?
        .expect("property exists");
    let leases = LeaseRepository::new(Arc::new(db))
        .list_by_property(property.id)
        .await?;
    assert_eq!(leases.len(), 1);
    assert_eq!(leases[0].tenant_id, existing.id);
    Ok(())
}

#[tokio::test]
async fn seeded_rows_reference_each_other() -> Result<()> {
    let db = setup_test_db().await?;
    let dataset = default_dataset()?;
    run_seed(&db, &dataset).await?;

    let shared = Arc::new(db);
    let clients = ClientRepository::new(shared.clone());
    let properties = PropertyRepository::new(shared.clone());
    let leases = LeaseRepository::new(shared.clone());
    let payments = PaymentReceiptRepository::new(shared);

    let mut lease_ids = Vec::new();
    for record in &dataset.leases {
        let property = properties
            .find_by_address(&dataset.properties[record.property].address)
            .await?
            .expect("property seeded");
        let landlord = clients
            .find_by_tax_id(&dataset.clients[record.landlord].tax_id.to_string())
            .await?
            .expect("landlord seeded");
        let tenant = clients
            .find_by_tax_id(&dataset.clients[record.tenant].tax_id.to_string())
            .await?
            .expect("tenant seeded");

        let found = leases.list_by_property(property.id).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].landlord_id, landlord.id);
        assert_eq!(found[0].tenant_id, tenant.id);
        assert_eq!(found[0].start_date, record.start_date);
        assert_eq!(found[0].rent_amount, record.rent_amount);

        let key = LeaseKey {
            property_id: property.id,
            tenant_id: tenant.id,
            start_date: record.start_date,
        };
        let by_key = leases.find_by_key(&key).await?.expect("lease found by key");
        assert_eq!(by_key.id, found[0].id);
        lease_ids.push(found[0].id);
    }

    let first = payments.list_by_lease(lease_ids[0]).await?;
    assert_eq!(
        first.iter().map(|p| p.period.as_str()).collect::<Vec<_>>(),
        vec!["Enero 2024", "Febrero 2024"]
    );
    let second = payments.list_by_lease(lease_ids[1]).await?;
    assert_eq!(second.len(), 2);
    assert!(second.iter().any(|p| p.receipt_type == "commission"));
    let third = payments.list_by_lease(lease_ids[2]).await?;
    assert_eq!(third.len(), 1);
    assert_eq!(third[0].installment_number, 7);
    Ok(())
}

#[tokio::test]
async fn failure_mid_run_keeps_earlier_steps() -> Result<()> {
    let db = setup_test_db().await?;
    execute_sql(&db, "DROP TABLE leases").await?;

    let err = seed_database(&db)
        .await
        .expect_err("leases table is missing");
    assert_eq!(err.step(), Some(SeedStep::Leases));
    assert!(matches!(err, SeedError::Step { .. }));

    let shared = Arc::new(db);
    assert_eq!(AdminRepository::new(shared.clone()).count().await?, 1);
    assert_eq!(ClientRepository::new(shared.clone()).count().await?, 5);
    assert_eq!(PropertyRepository::new(shared.clone()).count().await?, 8);
    // Payments come after leases and are never attempted.
    assert_eq!(PaymentReceiptRepository::new(shared).count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn dangling_reference_is_rejected_before_any_write() -> Result<()> {
    let db = setup_test_db().await?;
    let mut dataset = default_dataset()?;
    dataset.leases[0].tenant = 42;

    let err = run_seed(&db, &dataset)
        .await
        .expect_err("lease points past the client list");
    assert!(matches!(err, SeedError::DanglingReference { reference: 42, .. }));
    assert_eq!(err.step(), None);

    let counts = counts(&db).await?;
    assert_eq!(counts.admins, 0);
    assert_eq!(counts.clients, 0);
    assert_eq!(counts.properties, 0);
    Ok(())
}

#[tokio::test]
async fn configured_admin_password_is_hashed_and_hidden() -> Result<()> {
    let db = setup_test_db().await?;
    let config = AppConfig {
        admin_password: Some("s3cret-pass".to_string()),
        ..AppConfig::default()
    };

    let summary = seed_with_config(&db, &config).await?;
    assert_eq!(summary.login.password, PasswordHint::Configured);
    assert!(!summary.to_string().contains("s3cret-pass"));

    let admin = AdminRepository::new(Arc::new(db))
        .find_by_username("admin")
        .await?
        .expect("admin seeded");
    assert_ne!(admin.password, "s3cret-pass");
    assert!(bcrypt::verify("s3cret-pass", &admin.password)?);
    Ok(())
}

#[tokio::test]
async fn default_run_after_configured_run_does_not_show_stale_password() -> Result<()> {
    let db = setup_test_db().await?;
    let config = AppConfig {
        admin_password: Some("s3cret-pass".to_string()),
        ..AppConfig::default()
    };
    seed_with_config(&db, &config).await?;

    let second = seed_database(&db).await?;
    assert_eq!(second.admin.existing, 1);
    assert_eq!(second.login.password, PasswordHint::Unchanged);
    assert!(!second.to_string().contains("Password: password"));

    let admin = AdminRepository::new(Arc::new(db))
        .find_by_username("admin")
        .await?
        .expect("admin seeded");
    assert!(bcrypt::verify("s3cret-pass", &admin.password)?);
    Ok(())
}

#[tokio::test]
async fn configured_run_after_default_run_keeps_known_password() -> Result<()> {
    let db = setup_test_db().await?;
    seed_database(&db).await?;

    let config = AppConfig {
        admin_password: Some("s3cret-pass".to_string()),
        ..AppConfig::default()
    };
    let second = seed_with_config(&db, &config).await?;
    assert_eq!(second.login.password, PasswordHint::Unchanged);
    assert!(!second.to_string().contains("RENTALS_ADMIN_PASSWORD"));

    let admin = AdminRepository::new(Arc::new(db))
        .find_by_username("admin")
        .await?
        .expect("admin seeded");
    assert!(bcrypt::verify(DEFAULT_ADMIN_PASSWORD, &admin.password)?);
    Ok(())
}
