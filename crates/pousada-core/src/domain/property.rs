// ============================================================================
// Pousada Core - Property Entity
// File: crates/pousada-core/src/domain/property.rs
// Description: Hospitality venue owned by a tenant, plus its write models
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pousada_shared::constants::DEFAULT_COUNTRY;

use super::validation::{validate_zip_code, HEX_COLOR, SLUG};

/// Property entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub owner_id: Uuid,

    pub name: String,
    pub slug: String,
    pub description: Option<String>,

    // Address
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,

    // Contact
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,

    // Legal / registration
    pub document: Option<String>,
    pub legal_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub business_hours: Option<String>,

    // Branding
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    /// Custom host name that resolves to this property.
    pub domain: Option<String>,

    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Builds a new active property from validated input. `slug` is the final,
    /// collision-checked slug.
    pub fn create(tenant_id: Uuid, owner_id: Uuid, slug: String, input: PropertyInput) -> Self {
        let now = Utc::now();
        let mut property = Self {
            id: Uuid::new_v4(),
            tenant_id,
            owner_id,
            name: String::new(),
            slug: String::new(),
            description: None,
            address: None,
            city: None,
            state: None,
            country: DEFAULT_COUNTRY.to_string(),
            zip_code: None,
            phone: None,
            email: None,
            website: None,
            document: None,
            legal_name: None,
            contact_phone: None,
            contact_email: None,
            business_hours: None,
            primary_color: None,
            logo_url: None,
            domain: None,
            is_active: true,
            created_at: now,
            modified_at: None,
            deleted_at: None,
        };
        property.apply(slug, input);
        property.modified_at = None;
        property
    }

    /// Overwrites every writable field. Server-assigned fields (owner,
    /// tenant, active flag, timestamps) are untouched apart from `modified_at`.
    pub fn apply(&mut self, slug: String, input: PropertyInput) {
        self.name = input.name.trim().to_string();
        self.slug = slug;
        self.description = input.description;
        self.address = input.address;
        self.city = input.city;
        self.state = input.state;
        self.country = input
            .country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        self.zip_code = input.zip_code;
        self.phone = input.phone;
        self.email = input.email;
        self.website = input.website;
        self.document = input.document;
        self.legal_name = input.legal_name;
        self.contact_phone = input.contact_phone;
        self.contact_email = input.contact_email;
        self.business_hours = input.business_hours;
        self.primary_color = input.primary_color;
        self.logo_url = input.logo_url;
        self.domain = input.domain.map(|d| d.trim().to_lowercase());
        self.modified_at = Some(Utc::now());
    }

    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.modified_at = Some(now);
    }
}

/// Property plus the number of active accommodations under it.
#[derive(Debug, Clone)]
pub struct PropertyOverview {
    pub property: Property,
    pub accommodations_count: i64,
}

/// Writable property fields, used for create and full update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PropertyInput {
    /// Defaults to the caller's first owned tenant on create; ignored on update.
    pub tenant_id: Option<Uuid>,

    #[validate(length(min = 2, max = 200, message = "Name must be between 2 and 200 characters"))]
    pub name: String,

    #[validate(
        length(min = 2, max = 100, message = "Slug must be between 2 and 100 characters"),
        regex(path = *SLUG, message = "Slug may only contain lowercase letters, digits and hyphens")
    )]
    pub slug: Option<String>,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 50))]
    pub state: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    #[validate(custom(function = "validate_zip_code"))]
    pub zip_code: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub website: Option<String>,

    #[validate(length(max = 20))]
    pub document: Option<String>,
    #[validate(length(max = 255))]
    pub legal_name: Option<String>,
    #[validate(length(max = 20))]
    pub contact_phone: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(max = 100))]
    pub business_hours: Option<String>,

    #[validate(regex(path = *HEX_COLOR, message = "Color must look like #RRGGBB"))]
    pub primary_color: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub logo_url: Option<String>,
    #[validate(length(min = 3, max = 255))]
    pub domain: Option<String>,
}

impl From<&Property> for PropertyInput {
    fn from(p: &Property) -> Self {
        Self {
            tenant_id: Some(p.tenant_id),
            name: p.name.clone(),
            slug: Some(p.slug.clone()),
            description: p.description.clone(),
            address: p.address.clone(),
            city: p.city.clone(),
            state: p.state.clone(),
            country: Some(p.country.clone()),
            zip_code: p.zip_code.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            website: p.website.clone(),
            document: p.document.clone(),
            legal_name: p.legal_name.clone(),
            contact_phone: p.contact_phone.clone(),
            contact_email: p.contact_email.clone(),
            business_hours: p.business_hours.clone(),
            primary_color: p.primary_color.clone(),
            logo_url: p.logo_url.clone(),
            domain: p.domain.clone(),
        }
    }
}

/// Partial update: only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub document: Option<String>,
    pub legal_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub business_hours: Option<String>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub domain: Option<String>,
}

impl PropertyPatch {
    /// Merges onto the current state so the result can be validated as a
    /// whole before it is applied.
    pub fn merge_into(self, base: &mut PropertyInput) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $( if let Some(v) = self.$field { base.$field = Some(v); } )*
            };
        }
        if let Some(name) = self.name {
            base.name = name;
        }
        merge!(
            slug, description, address, city, state, country, zip_code, phone, email,
            website, document, legal_name, contact_phone, contact_email, business_hours,
            primary_color, logo_url, domain,
        );
    }
}
