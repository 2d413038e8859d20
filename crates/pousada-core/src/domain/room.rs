//! Physical room belonging to an accommodation (room type).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub accommodation_id: Uuid,
    pub number: String,
    pub floor: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn create(accommodation_id: Uuid, input: RoomInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            accommodation_id,
            number: input.number.trim().to_string(),
            floor: input.floor,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoomInput {
    #[validate(length(min = 1, max = 10, message = "Room number must be between 1 and 10 characters"))]
    pub number: String,
    #[serde(default)]
    #[validate(range(min = -5, max = 200))]
    pub floor: i32,
}
