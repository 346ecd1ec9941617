//! Admin repository for database operations

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::models::admin::{self, Entity as Admin};

/// Repository for admin database operations
#[derive(Debug, Clone)]
pub struct AdminRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl AdminRepository {
    /// Creates a new AdminRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds an admin by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<admin::Model>, DbErr> {
        Admin::find()
            .filter(admin::Column::Username.eq(username))
            .one(&*self.db)
            .await
    }

    /// Returns the admin named `username`, inserting `defaults` if absent
    pub async fn find_or_create(
        &self,
        username: &str,
        defaults: admin::ActiveModel,
    ) -> Result<(admin::Model, bool), DbErr> {
        let filter = Condition::all().add(admin::Column::Username.eq(username));
        super::find_or_create(&self.db, filter, defaults).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        super::count::<Admin>(&self.db).await
    }
}
