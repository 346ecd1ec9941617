//! Property entity model
//!
//! SeaORM entity for the `properties` table: listings offered for rent or
//! sale, keyed by street address.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Property listed by the agency
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Street address (unique)
    pub address: String,

    pub neighborhood: String,

    /// Partner agency that brought the listing
    pub owner_agency: String,

    pub city: String,

    /// `alquiler` or `venta`
    pub listing_type: String,

    /// `departamento`, `casa` or `local`
    pub property_type: String,

    /// Asking price (monthly rent for rentals)
    pub price: i64,

    pub rooms: i32,

    pub bathrooms: i32,

    /// Agency commission as a percentage, not an amount
    pub commission_pct: i32,

    pub description: String,

    /// Title deed kind
    pub deed_type: String,

    pub is_available: bool,

    pub highlights: String,

    pub covered_area_m2: i32,

    pub total_area_m2: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lease::Entity")]
    Leases,
}

impl Related<super::lease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
