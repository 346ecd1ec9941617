//! Lease entity model
//!
//! SeaORM entity for the `leases` table. A lease links one property to a
//! landlord and a tenant; (property_id, tenant_id, start_date) is unique.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Rental contract
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub property_id: Uuid,

    /// Client who owns the property
    pub landlord_id: Uuid,

    /// Client who rents the property
    pub tenant_id: Uuid,

    pub start_date: Date,

    /// Monthly rent at signing
    pub rent_amount: i64,

    /// How often the rent is adjusted (e.g. `cuatrimestral`)
    pub update_frequency: String,

    pub commission_pct: i32,

    /// Term length in months
    pub total_months: i32,

    /// Free-text list of furniture and appliances
    pub inventory: String,

    /// `active`, `finished` or `cancelled`
    pub status: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::LandlordId",
        to = "super::client::Column::Id"
    )]
    Landlord,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::TenantId",
        to = "super::client::Column::Id"
    )]
    Tenant,
    #[sea_orm(has_many = "super::payment_receipt::Entity")]
    PaymentReceipts,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::payment_receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentReceipts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
