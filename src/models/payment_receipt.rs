//! Payment receipt entity model
//!
//! SeaORM entity for the `payment_receipts` table. Receipts are unique per
//! (lease_id, payment_date, period).

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Receipt for an installment or a commission paid under a lease
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_receipts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub lease_id: Uuid,

    pub amount: i64,

    pub payment_date: Date,

    /// Human label for the billed period, e.g. `Enero 2024`
    pub period: String,

    pub installment_number: i32,

    pub total_installments: i32,

    /// `installment` or `commission`
    pub receipt_type: String,

    /// `paid` or `pending`
    pub status: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lease::Entity",
        from = "Column::LeaseId",
        to = "super::lease::Column::Id"
    )]
    Lease,
}

impl Related<super::lease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lease.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
