// ============================================================================
// Pousada Infrastructure - PostgreSQL Tenant Repository
// File: crates/pousada-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use pousada_core::domain::{Tenant, TenantMembership};
use pousada_core::error::DomainError;
use pousada_core::repositories::TenantRepository;

use super::db_error;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            slug: row.slug,
            is_active: row.is_active,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

pub(crate) async fn insert_tenant(conn: &mut PgConnection, tenant: &Tenant) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO tenants (id, owner_id, name, slug, is_active, created_at, modified_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(tenant.id)
    .bind(tenant.owner_id)
    .bind(&tenant.name)
    .bind(&tenant.slug)
    .bind(tenant.is_active)
    .bind(tenant.created_at)
    .bind(tenant.modified_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub(crate) async fn insert_membership(
    conn: &mut PgConnection,
    membership: &TenantMembership,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO tenant_memberships (id, user_id, tenant_id, role, joined_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(membership.id)
    .bind(membership.user_id)
    .bind(membership.tenant_id)
    .bind(membership.role.as_str())
    .bind(membership.joined_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, owner_id, name, slug, is_active, created_at, modified_at
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding tenant by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tenants WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("checking tenant slug", e))
    }

    async fn first_owned_by(&self, owner_id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, owner_id, name, slug, is_active, created_at, modified_at
            FROM tenants
            WHERE owner_id = $1 AND is_active
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding first owned tenant", e))?;

        Ok(row.map(|r| r.into()))
    }
}
