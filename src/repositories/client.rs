//! Client repository for database operations
//!
//! Clients are keyed by their tax identifier.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::models::client::{self, Entity as Client};

/// Repository for client database operations
#[derive(Debug, Clone)]
pub struct ClientRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl ClientRepository {
    /// Creates a new ClientRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a client by tax id (`PP-DDDDDDDD-V`)
    pub async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<client::Model>, DbErr> {
        Client::find()
            .filter(client::Column::TaxId.eq(tax_id))
            .one(&*self.db)
            .await
    }

    /// Returns the client with `tax_id`, inserting `defaults` if absent
    pub async fn find_or_create(
        &self,
        tax_id: &str,
        defaults: client::ActiveModel,
    ) -> Result<(client::Model, bool), DbErr> {
        let filter = Condition::all().add(client::Column::TaxId.eq(tax_id));
        super::find_or_create(&self.db, filter, defaults).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        super::count::<Client>(&self.db).await
    }
}
