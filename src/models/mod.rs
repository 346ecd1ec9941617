//! # Data Models
//!
//! SeaORM entities for the tables written by the seeder.

pub mod admin;
pub mod client;
pub mod lease;
pub mod payment_receipt;
pub mod property;

pub use admin::Entity as Admin;
pub use client::Entity as Client;
pub use lease::Entity as Lease;
pub use payment_receipt::Entity as PaymentReceipt;
pub use property::Entity as Property;
