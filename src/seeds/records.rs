//! Typed seed records.
//!
//! One structure per seeded entity. Closed vocabularies are enums rendered to
//! the strings stored in the database. Leases and payments point at other
//! records by their position in the dataset; [`SeedDataset::validate`] checks
//! those positions before anything is written.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use sea_orm::Set;
use uuid::Uuid;

use crate::error::{EntityKind, SeedError};
use crate::models::{admin, client, lease, payment_receipt, property};
use crate::tax_id::TaxId;

/// bcrypt cost used when hashing a configured admin password.
pub const ADMIN_HASH_COST: u32 = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Listing type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "alquiler",
            ListingType::Sale => "venta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Storefront,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "departamento",
            PropertyType::House => "casa",
            PropertyType::Storefront => "local",
        }
    }
}

/// How often the rent of a lease is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFrequency {
    Monthly,
    Bimonthly,
    Quarterly,
    FourMonthly,
    SemiAnnual,
    Annual,
}

impl UpdateFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateFrequency::Monthly => "mensual",
            UpdateFrequency::Bimonthly => "bimestral",
            UpdateFrequency::Quarterly => "trimestral",
            UpdateFrequency::FourMonthly => "cuatrimestral",
            UpdateFrequency::SemiAnnual => "semestral",
            UpdateFrequency::Annual => "anual",
        }
    }

    /// Months between two rent adjustments.
    pub fn months(&self) -> i32 {
        match self {
            UpdateFrequency::Monthly => 1,
            UpdateFrequency::Bimonthly => 2,
            UpdateFrequency::Quarterly => 3,
            UpdateFrequency::FourMonthly => 4,
            UpdateFrequency::SemiAnnual => 6,
            UpdateFrequency::Annual => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseStatus {
    Active,
    Finished,
    Cancelled,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "active",
            LeaseStatus::Finished => "finished",
            LeaseStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptType {
    Installment,
    Commission,
}

impl ReceiptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptType::Installment => "installment",
            ReceiptType::Commission => "commission",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
        }
    }
}

/// Back-office account to seed.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password_hash: String,
    pub role: String,
    /// Plain password to show in the summary, when it is a well-known value.
    pub password_hint: Option<String>,
}

impl AdminSeed {
    /// Hashes `password` with bcrypt. The plain password is never echoed back.
    pub fn with_password(username: &str, password: &str) -> Result<Self, SeedError> {
        Ok(Self {
            username: username.to_string(),
            password_hash: bcrypt::hash(password, ADMIN_HASH_COST)?,
            role: "admin".to_string(),
            password_hint: None,
        })
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        if self.username.trim().is_empty() {
            return Err(SeedError::invalid(
                EntityKind::Admin,
                &self.username,
                "username is empty",
            ));
        }
        if !self.password_hash.starts_with("$2") {
            return Err(SeedError::invalid(
                EntityKind::Admin,
                &self.username,
                "password is not a bcrypt hash",
            ));
        }
        Ok(())
    }

    pub(crate) fn active_model(&self) -> admin::ActiveModel {
        let now = Utc::now();
        admin::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(self.username.clone()),
            password: Set(self.password_hash.clone()),
            role: Set(self.role.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Client to seed, keyed by tax id.
#[derive(Debug, Clone)]
pub struct ClientSeed {
    pub tax_id: TaxId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub mobile_phone: Option<String>,
}

impl ClientSeed {
    pub fn validate(&self) -> Result<(), SeedError> {
        let key = self.tax_id.to_string();
        if self.name.trim().is_empty() {
            return Err(SeedError::invalid(EntityKind::Client, key, "name is empty"));
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(SeedError::invalid(
                EntityKind::Client,
                key,
                format!("'{}' is not an email address", self.email),
            ));
        }
        if let Some(phone) = &self.mobile_phone
            && !phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(SeedError::invalid(
                EntityKind::Client,
                key,
                "mobile phone must contain digits only",
            ));
        }
        Ok(())
    }

    pub(crate) fn active_model(&self) -> client::ActiveModel {
        let now = Utc::now();
        client::ActiveModel {
            id: Set(Uuid::new_v4()),
            tax_id: Set(self.tax_id.to_string()),
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            address: Set(self.address.clone()),
            city: Set(self.city.clone()),
            province: Set(self.province.clone()),
            mobile_phone: Set(self.mobile_phone.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Property to seed, keyed by address.
#[derive(Debug, Clone)]
pub struct PropertySeed {
    pub address: String,
    pub neighborhood: String,
    pub owner_agency: String,
    pub city: String,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub price: i64,
    pub rooms: i32,
    pub bathrooms: i32,
    /// Percentage, not an amount
    pub commission_pct: i32,
    pub description: String,
    pub deed_type: String,
    pub is_available: bool,
    pub highlights: String,
    pub covered_area_m2: i32,
    pub total_area_m2: i32,
}

impl PropertySeed {
    pub fn validate(&self) -> Result<(), SeedError> {
        let invalid = |reason: String| SeedError::invalid(EntityKind::Property, &self.address, reason);

        if self.address.trim().is_empty() {
            return Err(invalid("address is empty".to_string()));
        }
        if self.price <= 0 {
            return Err(invalid(format!("price must be positive, got {}", self.price)));
        }
        if self.rooms < 0 || self.bathrooms < 0 {
            return Err(invalid("room counts cannot be negative".to_string()));
        }
        if !(0..=100).contains(&self.commission_pct) {
            return Err(invalid(format!(
                "commission must be a percentage, got {}",
                self.commission_pct
            )));
        }
        if self.covered_area_m2 <= 0 || self.covered_area_m2 > self.total_area_m2 {
            return Err(invalid(format!(
                "covered area {}m2 must be positive and within total area {}m2",
                self.covered_area_m2, self.total_area_m2
            )));
        }
        Ok(())
    }

    pub(crate) fn active_model(&self) -> property::ActiveModel {
        let now = Utc::now();
        property::ActiveModel {
            id: Set(Uuid::new_v4()),
            address: Set(self.address.clone()),
            neighborhood: Set(self.neighborhood.clone()),
            owner_agency: Set(self.owner_agency.clone()),
            city: Set(self.city.clone()),
            listing_type: Set(self.listing_type.as_str().to_string()),
            property_type: Set(self.property_type.as_str().to_string()),
            price: Set(self.price),
            rooms: Set(self.rooms),
            bathrooms: Set(self.bathrooms),
            commission_pct: Set(self.commission_pct),
            description: Set(self.description.clone()),
            deed_type: Set(self.deed_type.clone()),
            is_available: Set(self.is_available),
            highlights: Set(self.highlights.clone()),
            covered_area_m2: Set(self.covered_area_m2),
            total_area_m2: Set(self.total_area_m2),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Lease to seed. `property`, `landlord` and `tenant` are positions in the
/// dataset's property and client lists.
#[derive(Debug, Clone)]
pub struct LeaseSeed {
    pub property: usize,
    pub landlord: usize,
    pub tenant: usize,
    pub start_date: NaiveDate,
    pub rent_amount: i64,
    pub update_frequency: UpdateFrequency,
    pub commission_pct: i32,
    pub total_months: i32,
    pub inventory: String,
    pub status: LeaseStatus,
}

/// Database ids a lease record resolves to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeaseParties {
    pub property_id: Uuid,
    pub landlord_id: Uuid,
    pub tenant_id: Uuid,
}

impl LeaseSeed {
    pub fn validate(&self, index: usize) -> Result<(), SeedError> {
        let key = format!("#{index}");
        if self.landlord == self.tenant {
            return Err(SeedError::invalid(
                EntityKind::Lease,
                key,
                "landlord and tenant are the same client",
            ));
        }
        if self.rent_amount <= 0 {
            return Err(SeedError::invalid(
                EntityKind::Lease,
                key,
                format!("rent must be positive, got {}", self.rent_amount),
            ));
        }
        if self.total_months <= 0 {
            return Err(SeedError::invalid(
                EntityKind::Lease,
                key,
                format!("term must be at least one month, got {}", self.total_months),
            ));
        }
        if self.total_months < self.update_frequency.months() {
            return Err(SeedError::invalid(
                EntityKind::Lease,
                key,
                format!(
                    "{}-month term is shorter than a {} adjustment period",
                    self.total_months,
                    self.update_frequency.as_str()
                ),
            ));
        }
        if !(0..=100).contains(&self.commission_pct) {
            return Err(SeedError::invalid(
                EntityKind::Lease,
                key,
                format!("commission must be a percentage, got {}", self.commission_pct),
            ));
        }
        Ok(())
    }

    pub(crate) fn active_model(&self, parties: LeaseParties) -> lease::ActiveModel {
        let now = Utc::now();
        lease::ActiveModel {
            id: Set(Uuid::new_v4()),
            property_id: Set(parties.property_id),
            landlord_id: Set(parties.landlord_id),
            tenant_id: Set(parties.tenant_id),
            start_date: Set(self.start_date),
            rent_amount: Set(self.rent_amount),
            update_frequency: Set(self.update_frequency.as_str().to_string()),
            commission_pct: Set(self.commission_pct),
            total_months: Set(self.total_months),
            inventory: Set(self.inventory.clone()),
            status: Set(self.status.as_str().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Payment receipt to seed. `lease` is a position in the dataset's lease list.
#[derive(Debug, Clone)]
pub struct PaymentSeed {
    pub lease: usize,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub period: String,
    pub installment_number: i32,
    pub total_installments: i32,
    pub receipt_type: ReceiptType,
    pub status: PaymentStatus,
}

impl PaymentSeed {
    pub fn validate(&self) -> Result<(), SeedError> {
        let invalid =
            |reason: String| SeedError::invalid(EntityKind::PaymentReceipt, &self.period, reason);

        if self.period.trim().is_empty() {
            return Err(invalid("period label is empty".to_string()));
        }
        if self.amount <= 0 {
            return Err(invalid(format!("amount must be positive, got {}", self.amount)));
        }
        if self.installment_number < 1 || self.installment_number > self.total_installments {
            return Err(invalid(format!(
                "installment {} is outside 1..={}",
                self.installment_number, self.total_installments
            )));
        }
        Ok(())
    }

    pub(crate) fn active_model(&self, lease_id: Uuid) -> payment_receipt::ActiveModel {
        let now = Utc::now();
        payment_receipt::ActiveModel {
            id: Set(Uuid::new_v4()),
            lease_id: Set(lease_id),
            amount: Set(self.amount),
            payment_date: Set(self.payment_date),
            period: Set(self.period.clone()),
            installment_number: Set(self.installment_number),
            total_installments: Set(self.total_installments),
            receipt_type: Set(self.receipt_type.as_str().to_string()),
            status: Set(self.status.as_str().to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Everything one seed run writes, in dependency order.
#[derive(Debug, Clone)]
pub struct SeedDataset {
    pub admin: AdminSeed,
    pub clients: Vec<ClientSeed>,
    pub properties: Vec<PropertySeed>,
    pub leases: Vec<LeaseSeed>,
    pub payments: Vec<PaymentSeed>,
}

impl SeedDataset {
    /// Replaces the admin account.
    pub fn with_admin(mut self, admin: AdminSeed) -> Self {
        self.admin = admin;
        self
    }

    /// Checks every record and every cross-record reference.
    pub fn validate(&self) -> Result<(), SeedError> {
        self.admin.validate()?;
        for client in &self.clients {
            client.validate()?;
        }
        for property in &self.properties {
            property.validate()?;
        }

        for (index, lease) in self.leases.iter().enumerate() {
            lease.validate(index)?;
            let properties = self.properties.len();
            let clients = self.clients.len();
            check_reference(EntityKind::Lease, index, EntityKind::Property, lease.property, properties)?;
            check_reference(EntityKind::Lease, index, EntityKind::Client, lease.landlord, clients)?;
            check_reference(EntityKind::Lease, index, EntityKind::Client, lease.tenant, clients)?;
        }

        for (index, payment) in self.payments.iter().enumerate() {
            payment.validate()?;
            check_reference(
                EntityKind::PaymentReceipt,
                index,
                EntityKind::Lease,
                payment.lease,
                self.leases.len(),
            )?;
        }

        Ok(())
    }
}

fn check_reference(
    entity: EntityKind,
    index: usize,
    target: EntityKind,
    reference: usize,
    len: usize,
) -> Result<(), SeedError> {
    if reference < len {
        Ok(())
    } else {
        Err(SeedError::DanglingReference {
            entity,
            index,
            target,
            reference,
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::dataset::default_dataset;

    #[test]
    fn default_dataset_is_valid() {
        let dataset = default_dataset().unwrap();
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn rejects_lease_pointing_past_the_clients() {
        let mut dataset = default_dataset().unwrap();
        dataset.leases[1].tenant = dataset.clients.len();

        match dataset.validate() {
            Err(SeedError::DanglingReference {
                entity,
                index,
                target,
                reference,
                len,
            }) => {
                assert_eq!(entity, EntityKind::Lease);
                assert_eq!(index, 1);
                assert_eq!(target, EntityKind::Client);
                assert_eq!(reference, 5);
                assert_eq!(len, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_payment_pointing_past_the_leases() {
        let mut dataset = default_dataset().unwrap();
        dataset.payments[0].lease = 42;
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::DanglingReference {
                target: EntityKind::Lease,
                reference: 42,
                ..
            })
        ));
    }

    #[test]
    fn rejects_commission_outside_percentage_range() {
        let mut dataset = default_dataset().unwrap();
        dataset.properties[0].commission_pct = 150;
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::InvalidRecord {
                entity: EntityKind::Property,
                ..
            })
        ));
    }

    #[test]
    fn rejects_installment_beyond_total() {
        let mut dataset = default_dataset().unwrap();
        dataset.payments[4].installment_number = 13;
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::InvalidRecord {
                entity: EntityKind::PaymentReceipt,
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut dataset = default_dataset().unwrap();
        dataset.clients[2].email = "carlos.fernandez".to_string();
        let err = dataset.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid client record '23-11223344-9': 'carlos.fernandez' is not an email address"
        );
    }

    #[test]
    fn rejects_self_lease() {
        let mut dataset = default_dataset().unwrap();
        dataset.leases[0].landlord = dataset.leases[0].tenant;
        assert!(matches!(
            dataset.validate(),
            Err(SeedError::InvalidRecord {
                entity: EntityKind::Lease,
                ..
            })
        ));
    }

    #[test]
    fn configured_password_is_hashed() {
        let admin = AdminSeed::with_password("ops", "correct horse").unwrap();
        assert!(admin.validate().is_ok());
        assert!(admin.password_hint.is_none());
        assert!(bcrypt::verify("correct horse", &admin.password_hash).unwrap());
    }

    #[test]
    fn update_frequency_months() {
        assert_eq!(UpdateFrequency::FourMonthly.months(), 4);
        assert_eq!(UpdateFrequency::FourMonthly.as_str(), "cuatrimestral");
        assert_eq!(UpdateFrequency::Annual.months(), 12);
    }
}
