//! Payment receipt repository for database operations
//!
//! A receipt is identified by its lease, payment date and period label.

use sea_orm::prelude::Date;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::payment_receipt::{self, Entity as PaymentReceipt};

/// Natural key of a payment receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentKey {
    pub lease_id: Uuid,
    pub payment_date: Date,
    pub period: String,
}

impl PaymentKey {
    fn condition(&self) -> Condition {
        Condition::all()
            .add(payment_receipt::Column::LeaseId.eq(self.lease_id))
            .add(payment_receipt::Column::PaymentDate.eq(self.payment_date))
            .add(payment_receipt::Column::Period.eq(self.period.as_str()))
    }
}

/// Repository for payment receipt database operations
#[derive(Debug, Clone)]
pub struct PaymentReceiptRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl PaymentReceiptRepository {
    /// Creates a new PaymentReceiptRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists the receipts of a lease in payment order
    pub async fn list_by_lease(
        &self,
        lease_id: Uuid,
    ) -> Result<Vec<payment_receipt::Model>, DbErr> {
        PaymentReceipt::find()
            .filter(payment_receipt::Column::LeaseId.eq(lease_id))
            .order_by_asc(payment_receipt::Column::PaymentDate)
            .order_by_asc(payment_receipt::Column::InstallmentNumber)
            .all(&*self.db)
            .await
    }

    /// Returns the receipt matching `key`, inserting `defaults` if absent
    pub async fn find_or_create(
        &self,
        key: &PaymentKey,
        defaults: payment_receipt::ActiveModel,
    ) -> Result<(payment_receipt::Model, bool), DbErr> {
        super::find_or_create(&self.db, key.condition(), defaults).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        super::count::<PaymentReceipt>(&self.db).await
    }
}
