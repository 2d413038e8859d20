// ============================================================================
// Pousada Infrastructure - PostgreSQL Property Repository
// File: crates/pousada-infrastructure/src/database/postgres/property_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use pousada_core::domain::{Property, PropertyAccess, PropertyOverview};
use pousada_core::error::DomainError;
use pousada_core::repositories::PropertyRepository;
use pousada_shared::Pagination;

use super::property_access_repo_impl::insert_access;
use super::{db_error, write_error};

/// Columns of `properties p`, in [`PropertyRow`] order.
const PROPERTY_COLUMNS: &str = r#"
    p.id, p.tenant_id, p.owner_id, p.name, p.slug, p.description,
    p.address, p.city, p.state, p.country, p.zip_code,
    p.phone, p.email, p.website,
    p.document, p.legal_name, p.contact_phone, p.contact_email, p.business_hours,
    p.primary_color, p.logo_url, p.domain,
    p.is_active, p.created_at, p.modified_at, p.deleted_at
"#;

const ACCOMMODATIONS_COUNT: &str = r#"
    (SELECT COUNT(*) FROM accommodations a WHERE a.property_id = p.id AND a.is_active)
        AS accommodations_count
"#;

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_overview(&self, filter: &str, bind: &str, action: &str) -> Result<Option<PropertyOverview>, DomainError> {
        let sql = format!(
            "SELECT {PROPERTY_COLUMNS}, {ACCOMMODATIONS_COUNT} FROM properties p WHERE {filter} AND p.is_active"
        );
        let row: Option<OverviewRow> = sqlx::query_as(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(action, e))?;
        Ok(row.map(|r| r.into()))
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PropertyRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
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
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct OverviewRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    accommodations_count: i64,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            tenant_id: row.tenant_id,
            owner_id: row.owner_id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            address: row.address,
            city: row.city,
            state: row.state,
            country: row.country,
            zip_code: row.zip_code,
            phone: row.phone,
            email: row.email,
            website: row.website,
            document: row.document,
            legal_name: row.legal_name,
            contact_phone: row.contact_phone,
            contact_email: row.contact_email,
            business_hours: row.business_hours,
            primary_color: row.primary_color,
            logo_url: row.logo_url,
            domain: row.domain,
            is_active: row.is_active,
            created_at: row.created_at,
            modified_at: row.modified_at,
            deleted_at: row.deleted_at,
        }
    }
}

impl From<OverviewRow> for PropertyOverview {
    fn from(row: OverviewRow) -> Self {
        PropertyOverview {
            property: row.property.into(),
            accommodations_count: row.accommodations_count,
        }
    }
}

pub(crate) async fn insert_property(conn: &mut PgConnection, p: &Property) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO properties (
            id, tenant_id, owner_id, name, slug, description,
            address, city, state, country, zip_code,
            phone, email, website,
            document, legal_name, contact_phone, contact_email, business_hours,
            primary_color, logo_url, domain,
            is_active, created_at, modified_at, deleted_at
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
            $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26
        )
        "#,
    )
    .bind(p.id)
    .bind(p.tenant_id)
    .bind(p.owner_id)
    .bind(&p.name)
    .bind(&p.slug)
    .bind(&p.description)
    .bind(&p.address)
    .bind(&p.city)
    .bind(&p.state)
    .bind(&p.country)
    .bind(&p.zip_code)
    .bind(&p.phone)
    .bind(&p.email)
    .bind(&p.website)
    .bind(&p.document)
    .bind(&p.legal_name)
    .bind(&p.contact_phone)
    .bind(&p.contact_email)
    .bind(&p.business_hours)
    .bind(&p.primary_color)
    .bind(&p.logo_url)
    .bind(&p.domain)
    .bind(p.is_active)
    .bind(p.created_at)
    .bind(p.modified_at)
    .bind(p.deleted_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn list_owned(
        &self,
        owner_id: &Uuid,
        page: Pagination,
    ) -> Result<(Vec<PropertyOverview>, i64), DomainError> {
        let sql = format!(
            r#"
            SELECT {PROPERTY_COLUMNS}, {ACCOMMODATIONS_COUNT}
            FROM properties p
            WHERE p.owner_id = $1 AND p.is_active
            ORDER BY p.created_at DESC, p.id
            LIMIT $2 OFFSET $3
            "#
        );
        let rows: Vec<OverviewRow> = sqlx::query_as(&sql)
            .bind(owner_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("listing properties", e))?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM properties WHERE owner_id = $1 AND is_active",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("counting properties", e))?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<PropertyOverview>, DomainError> {
        let sql = format!(
            r#"
            SELECT {PROPERTY_COLUMNS}, {ACCOMMODATIONS_COUNT}
            FROM properties p
            WHERE p.id = $2 AND p.owner_id = $1 AND p.is_active
            "#
        );
        let row: Option<OverviewRow> = sqlx::query_as(&sql)
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding owned property", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<PropertyOverview>, DomainError> {
        self.fetch_overview("p.slug = $1", slug, "finding property by slug").await
    }

    async fn find_active_by_domain(&self, domain: &str) -> Result<Option<PropertyOverview>, DomainError> {
        self.fetch_overview("LOWER(p.domain) = LOWER($1)", domain, "finding property by domain")
            .await
    }

    async fn first_active_of_tenant(&self, tenant_id: &Uuid) -> Result<Option<Property>, DomainError> {
        let sql = format!(
            r#"
            SELECT {PROPERTY_COLUMNS}
            FROM properties p
            WHERE p.tenant_id = $1 AND p.is_active
            ORDER BY p.created_at, p.id
            LIMIT 1
            "#
        );
        let row: Option<PropertyRow> = sqlx::query_as(&sql)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("finding first property of tenant", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn slug_in_use(&self, slug: &str, except: Option<Uuid>) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM properties
                WHERE slug = $1 AND is_active AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(slug)
        .bind(except)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("checking property slug", e))
    }

    async fn create(&self, property: &Property, access: &PropertyAccess) -> Result<Property, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting property transaction", e))?;

        insert_property(&mut tx, property)
            .await
            .map_err(|e| write_error("creating property", e))?;
        insert_access(&mut tx, access)
            .await
            .map_err(|e| write_error("granting property access", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("committing property transaction", e))?;

        info!("Property created successfully: {}", property.id);
        Ok(property.clone())
    }

    async fn update(&self, property: &Property) -> Result<Property, DomainError> {
        let sql = format!(
            r#"
            UPDATE properties p
            SET
                name = $2, slug = $3, description = $4,
                address = $5, city = $6, state = $7, country = $8, zip_code = $9,
                phone = $10, email = $11, website = $12,
                document = $13, legal_name = $14, contact_phone = $15,
                contact_email = $16, business_hours = $17,
                primary_color = $18, logo_url = $19, domain = $20,
                is_active = $21, modified_at = $22, deleted_at = $23
            WHERE p.id = $1
            RETURNING {PROPERTY_COLUMNS}
            "#
        );
        let row: PropertyRow = sqlx::query_as(&sql)
            .bind(property.id)
            .bind(&property.name)
            .bind(&property.slug)
            .bind(&property.description)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.state)
            .bind(&property.country)
            .bind(&property.zip_code)
            .bind(&property.phone)
            .bind(&property.email)
            .bind(&property.website)
            .bind(&property.document)
            .bind(&property.legal_name)
            .bind(&property.contact_phone)
            .bind(&property.contact_email)
            .bind(&property.business_hours)
            .bind(&property.primary_color)
            .bind(&property.logo_url)
            .bind(&property.domain)
            .bind(property.is_active)
            .bind(property.modified_at)
            .bind(property.deleted_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error("updating property", e))?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::postgres::testing::seed;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_list_owned_counts_accommodations(pool: PgPool) {
        let fixtures = seed(&pool).await;
        let repo = PgPropertyRepository::new(pool.clone());

        let (rows, total) = repo
            .list_owned(&fixtures[0].user.id, Pagination::default())
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].property.id, fixtures[0].property.id);
        assert_eq!(rows[0].accommodations_count, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_soft_deleted_property_is_hidden(pool: PgPool) {
        let fixtures = seed(&pool).await;
        let repo = PgPropertyRepository::new(pool.clone());
        let mut property = fixtures[0].property.clone();
        let owner_id = property.owner_id;

        property.domain = Some("pousadasol.com.br".into());
        repo.update(&property).await.unwrap();
        assert!(repo.find_active_by_domain("PousadaSol.com.br").await.unwrap().is_some());

        property.soft_delete();
        repo.update(&property).await.unwrap();

        let (rows, total) = repo.list_owned(&owner_id, Pagination::default()).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 0);
        assert!(repo.find_owned(&owner_id, &property.id).await.unwrap().is_none());
        assert!(repo.find_active_by_slug(&property.slug).await.unwrap().is_none());
        assert!(repo.find_active_by_domain("pousadasol.com.br").await.unwrap().is_none());
        assert!(repo.first_active_of_tenant(&property.tenant_id).await.unwrap().is_none());
        // The slug is free again.
        assert!(!repo.slug_in_use(&property.slug, None).await.unwrap());
    }
}
