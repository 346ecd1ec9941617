//! Property repository for database operations
//!
//! Properties are keyed by street address.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::models::property::{self, Entity as Property};

/// Repository for property database operations
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl PropertyRepository {
    /// Creates a new PropertyRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a property by address
    pub async fn find_by_address(&self, address: &str) -> Result<Option<property::Model>, DbErr> {
        Property::find()
            .filter(property::Column::Address.eq(address))
            .one(&*self.db)
            .await
    }

    /// Returns the property at `address`, inserting `defaults` if absent
    pub async fn find_or_create(
        &self,
        address: &str,
        defaults: property::ActiveModel,
    ) -> Result<(property::Model, bool), DbErr> {
        let filter = Condition::all().add(property::Column::Address.eq(address));
        super::find_or_create(&self.db, filter, defaults).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        super::count::<Property>(&self.db).await
    }
}
