// ============================================================================
// Pousada Core - Maintenance Service
// File: crates/pousada-core/src/services/maintenance_service.rs
// Description: Operator tasks run from the command line (dev seed, backfills)
// ============================================================================

use std::sync::Arc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use pousada_security::PasswordService;
use pousada_shared::utils::slugify;

use crate::domain::{
    Accommodation, AccommodationInput, AccommodationType, Property, PropertyAccess, PropertyInput,
    Room, RoomInput, Tenant, TenantMembership, User,
};
use crate::error::DomainError;
use crate::repositories::{PropertyAccessRepository, SeedFixture, SeedRepository, SeedSummary};

/// Password shared by every development account.
pub const SEED_PASSWORD: &str = "12345678";

/// (full name, email, property name)
const SEED_OWNERS: [(&str, &str, &str); 5] = [
    ("Ana Silva", "ana@pousada.com", "Pousada Sol"),
    ("Carlos Souza", "carlos@hotel.com", "Hotel Central"),
    ("Beatriz Costa", "beatriz@chale.com", "Chalé da Serra"),
    ("Daniel Oliveira", "daniel@resort.com", "Eco Resort"),
    ("Elena Lima", "elena@hostel.com", "Hostel Vida"),
];

pub struct MaintenanceService {
    seeds: Arc<dyn SeedRepository>,
    access: Arc<dyn PropertyAccessRepository>,
    production: bool,
}

impl MaintenanceService {
    pub fn new(
        seeds: Arc<dyn SeedRepository>,
        access: Arc<dyn PropertyAccessRepository>,
        production: bool,
    ) -> Self {
        Self { seeds, access, production }
    }

    /// Wipes properties, tenants and regular users and loads the five
    /// development owners. Refused on production unless forced.
    pub async fn seed_dev(&self, allow_production: bool) -> Result<SeedSummary, DomainError> {
        if self.production && !allow_production {
            warn!("Refusing to seed a production database");
            return Err(DomainError::Forbidden(
                "seeding is disabled in production; pass --allow-production to override".into(),
            ));
        }

        let fixtures = dev_fixtures()?;
        let summary = self.seeds.replace_all(&fixtures).await?;
        info!(
            "Removed {} properties, {} tenants, {} users",
            summary.properties_removed, summary.tenants_removed, summary.users_removed
        );
        for fixture in &fixtures {
            info!(
                "Seeded {} -> {} -> {}",
                fixture.user.email, fixture.tenant.name, fixture.property.name
            );
        }
        Ok(summary)
    }

    /// Grants OWNER access to every property owner that lacks it. Returns
    /// the number of rows created.
    pub async fn backfill_owner_access(&self) -> Result<u64, DomainError> {
        let created = self.access.backfill_owner_access().await?;
        info!("Backfilled {} owner access rows", created);
        Ok(created)
    }
}

/// Builds the development dataset. Identifiers are derived from the
/// 1-based fixture index so repeated runs produce the same documents.
pub fn dev_fixtures() -> Result<Vec<SeedFixture>, DomainError> {
    SEED_OWNERS
        .iter()
        .enumerate()
        .map(|(idx, (full_name, email, property_name))| fixture(idx + 1, full_name, email, property_name))
        .collect()
}

fn fixture(i: usize, full_name: &str, email: &str, property_name: &str) -> Result<SeedFixture, DomainError> {
    let (first_name, last_name) = full_name.split_once(' ').unwrap_or((full_name, ""));
    let digit = i % 10;
    let phone = format!("(11) 9{0}{0}{0}{0}-{0}{0}{0}{0}", digit);

    let password_hash = PasswordService::hash(SEED_PASSWORD)
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
    let mut user = User::new(first_name.into(), last_name.into(), email.into(), password_hash)?;
    user.document = Some(format!("{0}{0}{0}.{0}{0}{0}.{0}{0}{0}-{0}{0}", digit));
    user.phone = Some(phone.clone());

    let tenant_name = format!("Empresa {}", property_name);
    let tenant = Tenant::new(user.id, tenant_name)?;
    let membership = TenantMembership::owner(user.id, tenant.id);

    let property = Property::create(
        tenant.id,
        user.id,
        slugify(property_name),
        PropertyInput {
            name: property_name.to_string(),
            description: Some(format!("Uma linda propriedade: {}", property_name)),
            address: Some(format!("Rua Exemplo, {}", i * 100)),
            city: Some("Cidade Exemplo".into()),
            state: Some("SP".into()),
            zip_code: Some("01000-000".into()),
            phone: Some(phone.clone()),
            email: Some(user.email.clone()),
            document: Some(format!("{0}{0}.{0}{0}{0}.{0}{0}{0}/0001-{0}{0}", digit)),
            legal_name: Some(format!("{} LTDA", property_name)),
            contact_phone: Some(phone),
            contact_email: Some(user.email.clone()),
            business_hours: Some("08:00 - 22:00".into()),
            ..Default::default()
        },
    );
    let access = PropertyAccess::owner(user.id, property.id);

    let accommodation = Accommodation::create(
        property.id,
        AccommodationInput {
            property_id: Some(property.id),
            name: "Standard".into(),
            description: Some("Quarto padrão".into()),
            accommodation_type: AccommodationType::Room,
            base_price: Decimal::new(20000, 2),
            max_guests: 2,
        },
    );
    let rooms = ["101", "102"]
        .into_iter()
        .map(|number| Room::create(accommodation.id, RoomInput { number: number.into(), floor: 1 }))
        .collect();

    Ok(SeedFixture { user, tenant, membership, property, access, accommodation, rooms })
}
