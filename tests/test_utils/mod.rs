//! Test utilities for database testing.
//!
//! Provides in-memory SQLite databases with every migration applied. Foreign
//! keys stay enforced so lease and payment rows must point at real parents.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Same as [`setup_test_db`], wrapped for repository constructors.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Runs a raw SQL statement against the test database.
#[allow(dead_code)]
pub async fn execute_sql(db: &DatabaseConnection, sql: &str) -> Result<()> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_string(),
    ))
    .await?;
    Ok(())
}
