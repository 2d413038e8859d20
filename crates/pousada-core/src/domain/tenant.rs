// ============================================================================
// Pousada Core - Tenant Entity
// File: crates/pousada-core/src/domain/tenant.rs
// Description: Owning organization and its user memberships
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pousada_shared::utils::slugify;

/// Tenant role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantRole {
    Owner,
    Admin,
    Member,
}

impl TenantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantRole::Owner => "owner",
            TenantRole::Admin => "admin",
            TenantRole::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(TenantRole::Owner),
            "admin" => Some(TenantRole::Admin),
            "member" => Some(TenantRole::Member),
            _ => None,
        }
    }
}

impl Default for TenantRole {
    fn default() -> Self {
        TenantRole::Member
    }
}

/// Tenant entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Tenant {
    pub id: Uuid,
    pub owner_id: Uuid,

    #[validate(length(min = 2, max = 200, message = "Tenant name must be between 2 and 200 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 100, message = "Slug must be between 2 and 100 characters"))]
    pub slug: String,

    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Tenant {
    /// Slug is derived from the name; callers resolve collisions beforehand
    /// with [`Tenant::with_slug`].
    pub fn new(owner_id: Uuid, name: String) -> Result<Self, validator::ValidationErrors> {
        let slug = slugify(&name);
        Self::with_slug(owner_id, name, slug)
    }

    pub fn with_slug(
        owner_id: Uuid,
        name: String,
        slug: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let tenant = Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            is_active: true,
            created_at: Utc::now(),
            modified_at: None,
        };

        tenant.validate()?;
        Ok(tenant)
    }

    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        &self.owner_id == user_id
    }
}

/// User-Tenant relationship with role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tenant_id: Uuid,
    pub role: TenantRole,
    pub joined_at: DateTime<Utc>,
}

impl TenantMembership {
    pub fn new(user_id: Uuid, tenant_id: Uuid, role: TenantRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            tenant_id,
            role,
            joined_at: Utc::now(),
        }
    }

    pub fn owner(user_id: Uuid, tenant_id: Uuid) -> Self {
        Self::new(user_id, tenant_id, TenantRole::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tenant_derives_slug() {
        let owner = Uuid::new_v4();
        let tenant = Tenant::new(owner, "Empresa Pousada Sol".to_string()).unwrap();
        assert_eq!(tenant.slug, "empresa-pousada-sol");
        assert!(tenant.is_active);
        assert!(tenant.is_owned_by(&owner));
        assert!(!tenant.is_owned_by(&Uuid::new_v4()));
    }

    #[test]
    fn test_short_name_rejected() {
        assert!(Tenant::new(Uuid::new_v4(), "A".to_string()).is_err());
    }

    #[test]
    fn test_role_roundtrip() {
        for role in [TenantRole::Owner, TenantRole::Admin, TenantRole::Member] {
            assert_eq!(TenantRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(TenantRole::from_str("guest"), None);
        assert_eq!(TenantMembership::owner(Uuid::new_v4(), Uuid::new_v4()).role, TenantRole::Owner);
    }
}
