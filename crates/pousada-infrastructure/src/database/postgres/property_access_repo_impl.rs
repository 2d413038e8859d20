//! PostgreSQL property access grants

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use pousada_core::domain::PropertyAccess;
use pousada_core::error::DomainError;
use pousada_core::repositories::PropertyAccessRepository;

use super::db_error;

pub struct PgPropertyAccessRepository {
    pool: PgPool,
}

impl PgPropertyAccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) async fn insert_access(conn: &mut PgConnection, access: &PropertyAccess) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO property_access (id, user_id, property_id, role, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id, property_id) DO NOTHING
        "#,
    )
    .bind(access.id)
    .bind(access.user_id)
    .bind(access.property_id)
    .bind(access.role.as_str())
    .bind(access.created_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

#[async_trait]
impl PropertyAccessRepository for PgPropertyAccessRepository {
    async fn backfill_owner_access(&self) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO property_access (id, user_id, property_id, role, created_at)
            SELECT gen_random_uuid(), p.owner_id, p.id, 'OWNER', NOW()
            FROM properties p
            ON CONFLICT (user_id, property_id) DO NOTHING
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("backfilling owner access", e))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::postgres::testing::{count, seed};

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_backfill_twice_creates_no_duplicates(pool: PgPool) {
        seed(&pool).await;
        sqlx::query("DELETE FROM property_access")
            .execute(&pool)
            .await
            .unwrap();

        let repo = PgPropertyAccessRepository::new(pool.clone());
        assert_eq!(repo.backfill_owner_access().await.unwrap(), 5);
        assert_eq!(repo.backfill_owner_access().await.unwrap(), 0);
        assert_eq!(count(&pool, "property_access").await, 5);

        let owners: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM property_access a
            JOIN properties p ON p.id = a.property_id AND p.owner_id = a.user_id
            WHERE a.role = 'OWNER'
            "#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(owners, 5);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_backfill_keeps_existing_grants(pool: PgPool) {
        seed(&pool).await;
        let repo = PgPropertyAccessRepository::new(pool.clone());
        assert_eq!(repo.backfill_owner_access().await.unwrap(), 0);
        assert_eq!(count(&pool, "property_access").await, 5);
    }
}
