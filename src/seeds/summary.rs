//! Result of a seed run, printed by the binary once seeding finishes.

use std::fmt;

use serde::Serialize;

/// How many records of one kind a run inserted and how many it found already present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub created: usize,
    pub existing: usize,
}

impl StepOutcome {
    pub fn record(&mut self, created: bool) {
        if created {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

/// Row counts read back from the database after seeding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityTotals {
    pub admins: u64,
    pub clients: u64,
    pub properties: u64,
    pub leases: u64,
    pub payment_receipts: u64,
}

/// What the summary can say about the admin password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordHint {
    /// Plain password known to log in as the stored admin.
    Shown(String),
    /// Admin created with the configured password, which is never echoed.
    Configured,
    /// Admin already existed and kept whatever password it had.
    Unchanged,
}

/// Login details shown to the operator.
#[derive(Debug, Clone, Serialize)]
pub struct LoginHint {
    pub username: String,
    pub password: PasswordHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub totals: EntityTotals,
    pub admin: StepOutcome,
    pub clients: StepOutcome,
    pub properties: StepOutcome,
    pub leases: StepOutcome,
    pub payment_receipts: StepOutcome,
    pub login: LoginHint,
}

impl SeedSummary {
    /// Number of rows inserted by this run across all entities.
    pub fn created(&self) -> usize {
        [
            self.admin,
            self.clients,
            self.properties,
            self.leases,
            self.payment_receipts,
        ]
        .iter()
        .map(|outcome| outcome.created)
        .sum()
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    total: u64,
    outcome: StepOutcome,
) -> fmt::Result {
    writeln!(
        f,
        "  {label:<18} {total:>3} ({} created, {} already present)",
        outcome.created, outcome.existing
    )
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed summary:")?;
        write_line(f, "Admins:", self.totals.admins, self.admin)?;
        write_line(f, "Clients:", self.totals.clients, self.clients)?;
        write_line(f, "Properties:", self.totals.properties, self.properties)?;
        write_line(f, "Leases:", self.totals.leases, self.leases)?;
        write_line(
            f,
            "Payment receipts:",
            self.totals.payment_receipts,
            self.payment_receipts,
        )?;
        writeln!(f)?;
        writeln!(f, "Login:")?;
        writeln!(f, "  Username: {}", self.login.username)?;
        match &self.login.password {
            PasswordHint::Shown(password) => write!(f, "  Password: {password}"),
            PasswordHint::Configured => {
                write!(f, "  Password: (set via RENTALS_ADMIN_PASSWORD)")
            }
            PasswordHint::Unchanged => {
                write!(f, "  Password: (existing admin kept, password unchanged)")
            }
        }
    }
}
