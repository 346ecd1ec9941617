//! # Repository Layer
//!
//! Repositories encapsulate the SeaORM queries for each seeded table. Every
//! repository exposes a keyed `find_or_create` (returning the row and whether
//! it was inserted) and a `count`.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::error::is_unique_violation;

pub mod admin;
pub mod client;
pub mod lease;
pub mod payment_receipt;
pub mod property;

pub use admin::AdminRepository;
pub use client::ClientRepository;
pub use lease::{LeaseKey, LeaseRepository};
pub use payment_receipt::{PaymentKey, PaymentReceiptRepository};
pub use property::PropertyRepository;

/// Returns the row matching `filter`, inserting `defaults` when there is none.
///
/// The boolean is `true` when the row was inserted by this call. If the
/// insert loses a race against another writer and trips the unique index, the
/// winning row is read back and returned as existing.
pub async fn find_or_create<E, A>(
    db: &DatabaseConnection,
    filter: Condition,
    defaults: A,
) -> Result<(E::Model, bool), DbErr>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A>,
{
    if let Some(existing) = E::find().filter(filter.clone()).one(db).await? {
        return Ok((existing, false));
    }

    match defaults.insert(db).await {
        Ok(created) => Ok((created, true)),
        Err(err) if is_unique_violation(&err) => {
            let existing = E::find().filter(filter).one(db).await?.ok_or(err)?;
            Ok((existing, false))
        }
        Err(err) => Err(err),
    }
}

/// Counts every row of `E`.
pub async fn count<E>(db: &DatabaseConnection) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(db).await
}
