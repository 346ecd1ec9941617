//! Client entity model
//!
//! SeaORM entity for the `clients` table. A client can be the landlord of
//! one lease and the tenant of another.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Person or company the agency works with
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// National tax identifier in `PP-DDDDDDDD-V` form (unique)
    pub tax_id: String,

    /// Full name
    pub name: String,

    pub email: String,

    /// Street address
    pub address: String,

    pub city: String,

    pub province: String,

    /// Mobile phone number (optional)
    pub mobile_phone: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
