//! Default sample data for development databases.

use chrono::NaiveDate;

use crate::error::{EntityKind, SeedError};
use crate::tax_id::TaxId;

use super::records::{
    AdminSeed, ClientSeed, LeaseSeed, LeaseStatus, ListingType, PaymentSeed, PaymentStatus,
    PropertySeed, PropertyType, ReceiptType, SeedDataset, UpdateFrequency,
};

/// Username of the development admin.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the development admin.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// bcrypt hash of [`DEFAULT_ADMIN_PASSWORD`].
pub const DEFAULT_ADMIN_PASSWORD_HASH: &str =
    "$2b$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

const DEED: &str = "escritura";
const CABA: &str = "Ciudad Autónoma de Buenos Aires";

impl AdminSeed {
    /// The development admin, `admin` / `password`.
    pub fn development() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password_hash: DEFAULT_ADMIN_PASSWORD_HASH.to_string(),
            role: "admin".to_string(),
            password_hint: Some(DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

/// Builds and validates the default dataset: one admin, five clients, eight
/// properties, three leases and five payment receipts.
pub fn default_dataset() -> Result<SeedDataset, SeedError> {
    let dataset = SeedDataset {
        admin: AdminSeed::development(),
        clients: clients()?,
        properties: properties(),
        leases: leases()?,
        payments: payments()?,
    };
    dataset.validate()?;
    Ok(dataset)
}

fn date(entity: EntityKind, year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SeedError::invalid(
            entity,
            format!("{year:04}-{month:02}-{day:02}"),
            "not a calendar date",
        )
    })
}

#[allow(clippy::too_many_arguments)]
fn client(
    subject: u32,
    prefix: u8,
    name: &str,
    email: &str,
    address: &str,
    city: &str,
    province: &str,
    mobile_phone: &str,
) -> Result<ClientSeed, SeedError> {
    Ok(ClientSeed {
        tax_id: TaxId::generate(subject, prefix)?,
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        province: province.to_string(),
        mobile_phone: Some(mobile_phone.to_string()),
    })
}

fn clients() -> Result<Vec<ClientSeed>, SeedError> {
    Ok(vec![
        client(
            12345678,
            20,
            "Juan Carlos Pérez",
            "juan.perez@email.com",
            "Av. Libertador 1234, CABA",
            "CABA",
            "Buenos Aires",
            "1123456789",
        )?,
        client(
            87654321,
            27,
            "María Elena Rodríguez",
            "maria.rodriguez@email.com",
            "Calle San Martín 567, Rosario",
            "Rosario",
            "Santa Fe",
            "3419876543",
        )?,
        client(
            11223344,
            23,
            "Carlos Alberto Fernández",
            "carlos.fernandez@email.com",
            "Belgrano 890, Córdoba",
            "Córdoba",
            "Córdoba",
            "3514567890",
        )?,
        client(
            55667788,
            27,
            "Ana Sofía González",
            "ana.gonzalez@email.com",
            "Mitre 345, La Plata",
            "La Plata",
            "Buenos Aires",
            "2212345678",
        )?,
        client(
            99887766,
            20,
            "Roberto Daniel López",
            "roberto.lopez@email.com",
            "Rivadavia 1122, Mendoza",
            "Mendoza",
            "Mendoza",
            "2613456789",
        )?,
    ])
}

fn properties() -> Vec<PropertySeed> {
    vec![
        PropertySeed {
            address: "Av. Corrientes 1234, CABA".to_string(),
            neighborhood: "San Nicolás".to_string(),
            owner_agency: "Inmobiliaria Central".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Rent,
            property_type: PropertyType::Apartment,
            price: 85_000,
            rooms: 2,
            bathrooms: 1,
            commission_pct: 10,
            description: "Moderno departamento de 2 ambientes en pleno microcentro. Ideal para profesionales.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Ubicación céntrica, transporte público".to_string(),
            covered_area_m2: 45,
            total_area_m2: 45,
        },
        PropertySeed {
            address: "Calle Florida 567, CABA".to_string(),
            neighborhood: "Retiro".to_string(),
            owner_agency: "Propiedades Premium".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Rent,
            property_type: PropertyType::Apartment,
            price: 120_000,
            rooms: 3,
            bathrooms: 2,
            commission_pct: 8,
            description: "Elegante departamento de 3 ambientes con balcón y vista a la ciudad.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Balcón, vista panorámica, amenities".to_string(),
            covered_area_m2: 65,
            total_area_m2: 65,
        },
        PropertySeed {
            address: "San Martín 890, Palermo".to_string(),
            neighborhood: "Palermo Hollywood".to_string(),
            owner_agency: "Urbana Propiedades".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Rent,
            property_type: PropertyType::House,
            price: 180_000,
            rooms: 4,
            bathrooms: 2,
            commission_pct: 12,
            description: "Casa moderna de 4 ambientes con patio y parrilla en Palermo Hollywood.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Patio, parrilla, zona trendy".to_string(),
            covered_area_m2: 100,
            total_area_m2: 120,
        },
        PropertySeed {
            address: "Belgrano 1122, Villa Crespo".to_string(),
            neighborhood: "Villa Crespo".to_string(),
            owner_agency: "Inversiones del Sur".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Sale,
            property_type: PropertyType::Apartment,
            price: 95_000_000,
            rooms: 2,
            bathrooms: 1,
            commission_pct: 3,
            description: "Departamento en venta, ideal para inversión. Muy buena ubicación.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Ideal inversión, bien ubicado".to_string(),
            covered_area_m2: 55,
            total_area_m2: 55,
        },
        PropertySeed {
            address: "Av. Santa Fe 2345, Recoleta".to_string(),
            neighborhood: "Recoleta".to_string(),
            owner_agency: "Elite Properties".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Sale,
            property_type: PropertyType::Apartment,
            price: 150_000_000,
            rooms: 3,
            bathrooms: 2,
            commission_pct: 3,
            description: "Exclusivo departamento en Recoleta con amenities y cochera.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Amenities, cochera, zona premium".to_string(),
            covered_area_m2: 85,
            total_area_m2: 85,
        },
        PropertySeed {
            address: "Libertad 678, San Telmo".to_string(),
            neighborhood: "San Telmo".to_string(),
            owner_agency: "Histórica Inmobiliaria".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Rent,
            property_type: PropertyType::Apartment,
            price: 95_000,
            rooms: 1,
            bathrooms: 1,
            commission_pct: 10,
            description: "Loft tipo industrial en el corazón de San Telmo.".to_string(),
            deed_type: DEED.to_string(),
            // rented, see the third lease
            is_available: false,
            highlights: "Estilo industrial, zona histórica".to_string(),
            covered_area_m2: 40,
            total_area_m2: 40,
        },
        PropertySeed {
            address: "Tucumán 1567, Once".to_string(),
            neighborhood: "Once".to_string(),
            owner_agency: "Comercial Propiedades".to_string(),
            city: CABA.to_string(),
            listing_type: ListingType::Rent,
            property_type: PropertyType::Storefront,
            price: 200_000,
            rooms: 0,
            bathrooms: 1,
            commission_pct: 10,
            description: "Local comercial en zona de alto tránsito peatonal.".to_string(),
            deed_type: DEED.to_string(),
            is_available: true,
            highlights: "Alto tránsito, zona comercial".to_string(),
            covered_area_m2: 80,
            total_area_m2: 80,
        },
        PropertySeed {
            address: "Maipú 3456, Rosario".to_string(),
            neighborhood: "Centro".to_string(),
            owner_agency: "Rosario Properties".to_string(),
            city: "Rosario".to_string(),
            listing_type: ListingType::Sale,
            property_type: PropertyType::House,
            price: 75_000_000,
            rooms: 5,
            bathrooms: 3,
            commission_pct: 3,
            description: "Casa familiar de 5 ambientes con jardín y garage doble.".to_string(),
            deed_type: DEED.to_string(),
            // sold
            is_available: false,
            highlights: "Jardín, garage doble, familiar".to_string(),
            covered_area_m2: 130,
            total_area_m2: 150,
        },
    ]
}

fn leases() -> Result<Vec<LeaseSeed>, SeedError> {
    Ok(vec![
        // Av. Corrientes: Ana Sofía González rents to Juan Carlos Pérez
        LeaseSeed {
            property: 0,
            landlord: 3,
            tenant: 0,
            start_date: date(EntityKind::Lease, 2024, 1, 15)?,
            rent_amount: 85_000,
            update_frequency: UpdateFrequency::FourMonthly,
            commission_pct: 10,
            total_months: 12,
            inventory: "Heladera, lavarropas, microondas, muebles de cocina.".to_string(),
            status: LeaseStatus::Active,
        },
        // Calle Florida: Roberto Daniel López rents to María Elena Rodríguez
        LeaseSeed {
            property: 1,
            landlord: 4,
            tenant: 1,
            start_date: date(EntityKind::Lease, 2024, 3, 1)?,
            rent_amount: 120_000,
            update_frequency: UpdateFrequency::SemiAnnual,
            commission_pct: 8,
            total_months: 12,
            inventory: "Aire acondicionado, heladera, lavarropas, mobiliario completo.".to_string(),
            status: LeaseStatus::Active,
        },
        // Libertad: Juan Carlos Pérez rents to Carlos Alberto Fernández
        LeaseSeed {
            property: 5,
            landlord: 0,
            tenant: 2,
            start_date: date(EntityKind::Lease, 2023, 9, 1)?,
            rent_amount: 95_000,
            update_frequency: UpdateFrequency::Annual,
            commission_pct: 12,
            total_months: 12,
            inventory: "Sin mobiliario, solo electrodomésticos básicos.".to_string(),
            status: LeaseStatus::Active,
        },
    ])
}

fn payments() -> Result<Vec<PaymentSeed>, SeedError> {
    let receipt = EntityKind::PaymentReceipt;
    Ok(vec![
        PaymentSeed {
            lease: 0,
            amount: 85_000,
            payment_date: date(receipt, 2024, 1, 15)?,
            period: "Enero 2024".to_string(),
            installment_number: 1,
            total_installments: 12,
            receipt_type: ReceiptType::Installment,
            status: PaymentStatus::Paid,
        },
        PaymentSeed {
            lease: 0,
            amount: 85_000,
            payment_date: date(receipt, 2024, 2, 15)?,
            period: "Febrero 2024".to_string(),
            installment_number: 2,
            total_installments: 12,
            receipt_type: ReceiptType::Installment,
            status: PaymentStatus::Paid,
        },
        PaymentSeed {
            lease: 1,
            amount: 120_000,
            payment_date: date(receipt, 2024, 3, 1)?,
            period: "Marzo 2024".to_string(),
            installment_number: 1,
            total_installments: 12,
            receipt_type: ReceiptType::Installment,
            status: PaymentStatus::Paid,
        },
        PaymentSeed {
            lease: 1,
            amount: 12_000,
            payment_date: date(receipt, 2024, 3, 1)?,
            period: "Comisión Marzo 2024".to_string(),
            installment_number: 1,
            total_installments: 1,
            receipt_type: ReceiptType::Commission,
            status: PaymentStatus::Paid,
        },
        PaymentSeed {
            lease: 2,
            amount: 95_000,
            payment_date: date(receipt, 2024, 4, 1)?,
            period: "Abril 2024".to_string(),
            installment_number: 7,
            total_installments: 12,
            receipt_type: ReceiptType::Installment,
            status: PaymentStatus::Paid,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dataset_shape() {
        let dataset = default_dataset().unwrap();
        assert_eq!(dataset.clients.len(), 5);
        assert_eq!(dataset.properties.len(), 8);
        assert_eq!(dataset.leases.len(), 3);
        assert_eq!(dataset.payments.len(), 5);
        assert_eq!(dataset.admin.username, "admin");
    }

    #[test]
    fn client_tax_ids_carry_checksums() {
        let dataset = default_dataset().unwrap();
        let ids: Vec<String> = dataset
            .clients
            .iter()
            .map(|client| client.tax_id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "20-12345678-6",
                "27-87654321-9",
                "23-11223344-9",
                "27-55667788-9",
                "20-99887766-1",
            ]
        );
    }

    #[test]
    fn development_hash_matches_password() {
        assert!(bcrypt::verify(DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_PASSWORD_HASH).unwrap());
    }

    #[test]
    fn bad_calendar_dates_are_rejected() {
        assert!(matches!(
            date(EntityKind::Lease, 2024, 2, 30),
            Err(SeedError::InvalidRecord {
                entity: EntityKind::Lease,
                ..
            })
        ));
    }
}
