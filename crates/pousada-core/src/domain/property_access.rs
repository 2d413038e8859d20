//! Explicit per-property access grants, decoupled from tenant ownership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessRole {
    Owner,
    Manager,
    Staff,
}

impl AccessRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRole::Owner => "OWNER",
            AccessRole::Manager => "MANAGER",
            AccessRole::Staff => "STAFF",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OWNER" => Some(AccessRole::Owner),
            "MANAGER" => Some(AccessRole::Manager),
            "STAFF" => Some(AccessRole::Staff),
            _ => None,
        }
    }
}

/// At most one row per (user, property).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAccess {
    pub id: Uuid,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub role: AccessRole,
    pub created_at: DateTime<Utc>,
}

impl PropertyAccess {
    pub fn new(user_id: Uuid, property_id: Uuid, role: AccessRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            property_id,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn owner(user_id: Uuid, property_id: Uuid) -> Self {
        Self::new(user_id, property_id, AccessRole::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_strings_match_storage() {
        assert_eq!(AccessRole::Owner.as_str(), "OWNER");
        assert_eq!(AccessRole::from_str("MANAGER"), Some(AccessRole::Manager));
        assert_eq!(AccessRole::from_str("owner"), None);
        assert_eq!(serde_json::to_string(&AccessRole::Staff).unwrap(), "\"STAFF\"");
    }
}
