//! # Rentals Seed Library
//!
//! Schema, entities and seeding logic for the property-rental database.
//! The `rentals-seed` binary wires these together; tests use them directly.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod tax_id;
pub mod telemetry;
pub use migration;
