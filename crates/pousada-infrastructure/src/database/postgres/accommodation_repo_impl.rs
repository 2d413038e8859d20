// ============================================================================
// Pousada Infrastructure - PostgreSQL Accommodation Repository
// File: crates/pousada-infrastructure/src/database/postgres/accommodation_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use pousada_core::domain::{Accommodation, AccommodationType};
use pousada_core::error::DomainError;
use pousada_core::repositories::AccommodationRepository;
use pousada_shared::Pagination;

use super::{db_error, write_error};

pub struct PgAccommodationRepository {
    pool: PgPool,
}

impl PgAccommodationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct AccommodationRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub accommodation_type: String,
    pub base_price: Decimal,
    pub max_guests: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<AccommodationRow> for Accommodation {
    fn from(row: AccommodationRow) -> Self {
        Accommodation {
            id: row.id,
            property_id: row.property_id,
            name: row.name,
            description: row.description,
            accommodation_type: AccommodationType::from_str(&row.accommodation_type).unwrap_or_default(),
            base_price: row.base_price,
            max_guests: row.max_guests,
            is_active: row.is_active,
            created_at: row.created_at,
            modified_at: row.modified_at,
            deleted_at: row.deleted_at,
        }
    }
}

pub(crate) async fn insert_accommodation(
    conn: &mut PgConnection,
    a: &Accommodation,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO accommodations (
            id, property_id, name, description, accommodation_type,
            base_price, max_guests, is_active, created_at, modified_at, deleted_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(a.id)
    .bind(a.property_id)
    .bind(&a.name)
    .bind(&a.description)
    .bind(a.accommodation_type.as_str())
    .bind(a.base_price)
    .bind(a.max_guests)
    .bind(a.is_active)
    .bind(a.created_at)
    .bind(a.modified_at)
    .bind(a.deleted_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

#[async_trait]
impl AccommodationRepository for PgAccommodationRepository {
    async fn list_owned(
        &self,
        owner_id: &Uuid,
        property_id: Option<Uuid>,
        page: Pagination,
    ) -> Result<(Vec<Accommodation>, i64), DomainError> {
        let rows: Vec<AccommodationRow> = sqlx::query_as(
            r#"
            SELECT
                a.id, a.property_id, a.name, a.description, a.accommodation_type,
                a.base_price, a.max_guests, a.is_active, a.created_at, a.modified_at, a.deleted_at
            FROM accommodations a
            JOIN properties p ON p.id = a.property_id
            WHERE p.owner_id = $1 AND p.is_active AND a.is_active
              AND ($2::uuid IS NULL OR a.property_id = $2)
            ORDER BY a.created_at DESC, a.id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(owner_id)
        .bind(property_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing accommodations", e))?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM accommodations a
            JOIN properties p ON p.id = a.property_id
            WHERE p.owner_id = $1 AND p.is_active AND a.is_active
              AND ($2::uuid IS NULL OR a.property_id = $2)
            "#,
        )
        .bind(owner_id)
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("counting accommodations", e))?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<Accommodation>, DomainError> {
        let row: Option<AccommodationRow> = sqlx::query_as(
            r#"
            SELECT
                a.id, a.property_id, a.name, a.description, a.accommodation_type,
                a.base_price, a.max_guests, a.is_active, a.created_at, a.modified_at, a.deleted_at
            FROM accommodations a
            JOIN properties p ON p.id = a.property_id
            WHERE a.id = $2 AND p.owner_id = $1 AND p.is_active AND a.is_active
            "#,
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding owned accommodation", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, accommodation: &Accommodation) -> Result<Accommodation, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))?;
        insert_accommodation(&mut conn, accommodation)
            .await
            .map_err(|e| write_error("creating accommodation", e))?;

        info!("Accommodation created successfully: {}", accommodation.id);
        Ok(accommodation.clone())
    }

    async fn update(&self, accommodation: &Accommodation) -> Result<Accommodation, DomainError> {
        let row: AccommodationRow = sqlx::query_as(
            r#"
            UPDATE accommodations
            SET
                name = $2, description = $3, accommodation_type = $4,
                base_price = $5, max_guests = $6,
                is_active = $7, modified_at = $8, deleted_at = $9
            WHERE id = $1
            RETURNING
                id, property_id, name, description, accommodation_type,
                base_price, max_guests, is_active, created_at, modified_at, deleted_at
            "#,
        )
        .bind(accommodation.id)
        .bind(&accommodation.name)
        .bind(&accommodation.description)
        .bind(accommodation.accommodation_type.as_str())
        .bind(accommodation.base_price)
        .bind(accommodation.max_guests)
        .bind(accommodation.is_active)
        .bind(accommodation.modified_at)
        .bind(accommodation.deleted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("updating accommodation", e))?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_type_maps_to_default() {
        let row = AccommodationRow {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            name: "Standard".into(),
            description: None,
            accommodation_type: "treehouse".into(),
            base_price: dec!(200.00),
            max_guests: 2,
            is_active: true,
            created_at: Utc::now(),
            modified_at: None,
            deleted_at: None,
        };
        let accommodation: Accommodation = row.into();
        assert_eq!(accommodation.accommodation_type, AccommodationType::Room);
        assert_eq!(accommodation.base_price, dec!(200.00));
    }
}
