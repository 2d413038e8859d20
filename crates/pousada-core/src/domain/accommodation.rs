// ============================================================================
// Pousada Core - Accommodation Entity
// File: crates/pousada-core/src/domain/accommodation.rs
// Description: Room type offered by a property (price, capacity)
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::validate_non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    Room,
    Suite,
    Chalet,
    Dormitory,
    Apartment,
}

impl AccommodationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Room => "room",
            AccommodationType::Suite => "suite",
            AccommodationType::Chalet => "chalet",
            AccommodationType::Dormitory => "dormitory",
            AccommodationType::Apartment => "apartment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "room" => Some(AccommodationType::Room),
            "suite" => Some(AccommodationType::Suite),
            "chalet" => Some(AccommodationType::Chalet),
            "dormitory" => Some(AccommodationType::Dormitory),
            "apartment" => Some(AccommodationType::Apartment),
            _ => None,
        }
    }
}

impl Default for AccommodationType {
    fn default() -> Self {
        AccommodationType::Room
    }
}

/// Accommodation (room type) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: Uuid,
    pub property_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub accommodation_type: AccommodationType,
    pub base_price: Decimal,
    pub max_guests: i32,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Accommodation {
    pub fn create(property_id: Uuid, input: AccommodationInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            name: input.name.trim().to_string(),
            description: input.description,
            accommodation_type: input.accommodation_type,
            base_price: input.base_price,
            max_guests: input.max_guests,
            is_active: true,
            created_at: Utc::now(),
            modified_at: None,
            deleted_at: None,
        }
    }

    /// `property_id` is read-only after creation.
    pub fn apply(&mut self, input: AccommodationInput) {
        self.name = input.name.trim().to_string();
        self.description = input.description;
        self.accommodation_type = input.accommodation_type;
        self.base_price = input.base_price;
        self.max_guests = input.max_guests;
        self.modified_at = Some(Utc::now());
    }

    /// Sets both the inactive flag and the deletion timestamp.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.modified_at = Some(now);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccommodationInput {
    /// Required on create, ignored on update.
    pub property_id: Option<Uuid>,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: Option<String>,

    #[serde(default)]
    pub accommodation_type: AccommodationType,

    #[validate(custom(function = "validate_non_negative"))]
    pub base_price: Decimal,

    #[validate(range(min = 1, max = 50, message = "Max guests must be between 1 and 50"))]
    pub max_guests: i32,
}

impl From<&Accommodation> for AccommodationInput {
    fn from(a: &Accommodation) -> Self {
        Self {
            property_id: Some(a.property_id),
            name: a.name.clone(),
            description: a.description.clone(),
            accommodation_type: a.accommodation_type,
            base_price: a.base_price,
            max_guests: a.max_guests,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccommodationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub accommodation_type: Option<AccommodationType>,
    pub base_price: Option<Decimal>,
    pub max_guests: Option<i32>,
}

impl AccommodationPatch {
    pub fn merge_into(self, base: &mut AccommodationInput) {
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(description) = self.description {
            base.description = Some(description);
        }
        if let Some(kind) = self.accommodation_type {
            base.accommodation_type = kind;
        }
        if let Some(price) = self.base_price {
            base.base_price = price;
        }
        if let Some(max_guests) = self.max_guests {
            base.max_guests = max_guests;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard() -> AccommodationInput {
        AccommodationInput {
            property_id: Some(Uuid::new_v4()),
            name: "Standard".into(),
            description: Some("Quarto padrão".into()),
            accommodation_type: AccommodationType::Room,
            base_price: dec!(200.00),
            max_guests: 2,
        }
    }

    #[test]
    fn test_validation() {
        assert!(standard().validate().is_ok());

        let mut bad = standard();
        bad.max_guests = 0;
        bad.base_price = dec!(-1);
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("max_guests"));
        assert!(errors.field_errors().contains_key("base_price"));
    }

    #[test]
    fn test_soft_delete_sets_flag_and_timestamp() {
        let mut a = Accommodation::create(Uuid::new_v4(), standard());
        a.soft_delete();
        assert!(!a.is_active);
        assert!(a.deleted_at.is_some());
    }

    #[test]
    fn test_patch_keeps_property() {
        let a = Accommodation::create(Uuid::new_v4(), standard());
        let mut base = AccommodationInput::from(&a);
        AccommodationPatch { base_price: Some(dec!(350)), ..Default::default() }.merge_into(&mut base);
        assert_eq!(base.base_price, dec!(350));
        assert_eq!(base.name, "Standard");
        assert_eq!(base.property_id, Some(a.property_id));
    }

    #[test]
    fn test_type_defaults_to_room_and_price_serializes_as_string() {
        let parsed: AccommodationInput = serde_json::from_str(
            r#"{"name": "Suite", "base_price": "450.00", "max_guests": 3}"#,
        )
        .unwrap();
        assert_eq!(parsed.accommodation_type, AccommodationType::Room);
        let json = serde_json::to_value(Accommodation::create(Uuid::new_v4(), parsed)).unwrap();
        assert_eq!(json["base_price"], "450.00");
    }
}
