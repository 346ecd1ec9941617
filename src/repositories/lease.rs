//! Lease repository for database operations
//!
//! A lease is identified by the property, the tenant and the start date.

use sea_orm::prelude::Date;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::lease::{self, Entity as Lease};

/// Natural key of a lease
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaseKey {
    pub property_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: Date,
}

impl LeaseKey {
    fn condition(&self) -> Condition {
        Condition::all()
            .add(lease::Column::PropertyId.eq(self.property_id))
            .add(lease::Column::TenantId.eq(self.tenant_id))
            .add(lease::Column::StartDate.eq(self.start_date))
    }
}

/// Repository for lease database operations
#[derive(Debug, Clone)]
pub struct LeaseRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl LeaseRepository {
    /// Creates a new LeaseRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds the lease matching `key`
    pub async fn find_by_key(&self, key: &LeaseKey) -> Result<Option<lease::Model>, DbErr> {
        Lease::find().filter(key.condition()).one(&*self.db).await
    }

    /// Lists the leases of a property, oldest first
    pub async fn list_by_property(&self, property_id: Uuid) -> Result<Vec<lease::Model>, DbErr> {
        Lease::find()
            .filter(lease::Column::PropertyId.eq(property_id))
            .order_by_asc(lease::Column::StartDate)
            .all(&*self.db)
            .await
    }

    /// Returns the lease matching `key`, inserting `defaults` if absent
    pub async fn find_or_create(
        &self,
        key: &LeaseKey,
        defaults: lease::ActiveModel,
    ) -> Result<(lease::Model, bool), DbErr> {
        super::find_or_create(&self.db, key.condition(), defaults).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        super::count::<Lease>(&self.db).await
    }
}
