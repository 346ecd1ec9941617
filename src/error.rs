//! # Error Handling
//!
//! Error taxonomy for the seeder. Persistence failures are wrapped with the
//! step that produced them; record validation runs before any write and has
//! its own variants.

use std::fmt;

use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

use crate::tax_id::TaxIdError;

/// Entity types written by the seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Admin,
    Client,
    Property,
    Lease,
    PaymentReceipt,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Admin => "admin",
            EntityKind::Client => "client",
            EntityKind::Property => "property",
            EntityKind::Lease => "lease",
            EntityKind::PaymentReceipt => "payment receipt",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Steps of a seed run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    ExistingDataCheck,
    Admin,
    Clients,
    Properties,
    Leases,
    Payments,
    Summary,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedStep::ExistingDataCheck => "existing data check",
            SeedStep::Admin => "admin",
            SeedStep::Clients => "clients",
            SeedStep::Properties => "properties",
            SeedStep::Leases => "leases",
            SeedStep::Payments => "payments",
            SeedStep::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Errors that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid {entity} record '{key}': {reason}")]
    InvalidRecord {
        entity: EntityKind,
        key: String,
        reason: String,
    },
    #[error(
        "{entity} #{index} references {target} #{reference}, but the dataset only has {len}"
    )]
    DanglingReference {
        entity: EntityKind,
        index: usize,
        target: EntityKind,
        reference: usize,
        len: usize,
    },
    #[error("seeding {step} failed: {source}")]
    Step {
        step: SeedStep,
        #[source]
        source: DbErr,
    },
    #[error("failed to hash admin password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    TaxId(#[from] TaxIdError),
}

impl SeedError {
    pub(crate) fn invalid(entity: EntityKind, key: impl Into<String>, reason: impl Into<String>) -> Self {
        SeedError::InvalidRecord {
            entity,
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Attaches the failing step to a persistence error.
    pub(crate) fn at(step: SeedStep) -> impl Fn(DbErr) -> Self + Copy {
        move |source| SeedError::Step { step, source }
    }

    /// The step that failed, for persistence errors.
    pub fn step(&self) -> Option<SeedStep> {
        match self {
            SeedError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Returns true when `error` is a unique-key violation on any supported backend.
pub fn is_unique_violation(error: &DbErr) -> bool {
    const PG_UNIQUE: &str = "23505";
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    if matches!(
        error.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ) {
        return true;
    }

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    db_error
        .code()
        .is_some_and(|code| code == PG_UNIQUE || SQLITE_DUPLICATE_CODES.contains(&code.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_errors_name_the_step() {
        let err = SeedError::at(SeedStep::Leases)(DbErr::Custom("boom".to_string()));
        assert_eq!(err.step(), Some(SeedStep::Leases));
        assert_eq!(err.to_string(), "seeding leases failed: Custom Error: boom");
    }

    #[test]
    fn dangling_reference_message_mentions_both_sides() {
        let err = SeedError::DanglingReference {
            entity: EntityKind::Lease,
            index: 2,
            target: EntityKind::Client,
            reference: 9,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "lease #2 references client #9, but the dataset only has 5"
        );
        assert_eq!(err.step(), None);
    }

    #[test]
    fn custom_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&DbErr::Custom("nope".to_string())));
        assert!(!is_unique_violation(&DbErr::RecordNotInserted));
    }
}
