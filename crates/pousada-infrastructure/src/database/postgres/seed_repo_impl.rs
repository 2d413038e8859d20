//! Development dataset loader

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use pousada_core::error::DomainError;
use pousada_core::repositories::{SeedFixture, SeedRepository, SeedSummary};

use super::accommodation_repo_impl::insert_accommodation;
use super::property_access_repo_impl::insert_access;
use super::property_repo_impl::insert_property;
use super::room_repo_impl::insert_room;
use super::tenant_repo_impl::{insert_membership, insert_tenant};
use super::user_repo_impl::insert_user;
use super::{db_error, write_error};

pub struct PgSeedRepository {
    pool: PgPool,
}

impl PgSeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedRepository for PgSeedRepository {
    async fn replace_all(&self, fixtures: &[SeedFixture]) -> Result<SeedSummary, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting seed transaction", e))?;

        // Children (accommodations, rooms, reservations, access) cascade.
        let properties_removed = sqlx::query("DELETE FROM properties")
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("clearing properties", e))?
            .rows_affected();
        let tenants_removed = sqlx::query("DELETE FROM tenants")
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("clearing tenants", e))?
            .rows_affected();
        let users_removed = sqlx::query("DELETE FROM users WHERE NOT is_superuser")
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("clearing users", e))?
            .rows_affected();

        for fixture in fixtures {
            insert_user(&mut tx, &fixture.user)
                .await
                .map_err(|e| write_error("seeding user", e))?;
            insert_tenant(&mut tx, &fixture.tenant)
                .await
                .map_err(|e| write_error("seeding tenant", e))?;
            insert_membership(&mut tx, &fixture.membership)
                .await
                .map_err(|e| write_error("seeding membership", e))?;
            insert_property(&mut tx, &fixture.property)
                .await
                .map_err(|e| write_error("seeding property", e))?;
            insert_access(&mut tx, &fixture.access)
                .await
                .map_err(|e| write_error("seeding property access", e))?;
            insert_accommodation(&mut tx, &fixture.accommodation)
                .await
                .map_err(|e| write_error("seeding accommodation", e))?;
            for room in &fixture.rooms {
                insert_room(&mut tx, room)
                    .await
                    .map_err(|e| write_error("seeding room", e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing seed transaction", e))?;

        info!("Seeded {} fixtures", fixtures.len());
        Ok(SeedSummary { properties_removed, tenants_removed, users_removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pousada_core::domain::User;
    use pousada_core::services::dev_fixtures;

    use crate::database::postgres::testing::{count, seed};

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_replace_all_twice_leaves_five_owners(pool: PgPool) {
        let mut admin =
            User::new("Admin".into(), "".into(), "admin@pousada.com".into(), "hash".into()).unwrap();
        admin.is_superuser = true;
        let mut conn = pool.acquire().await.unwrap();
        insert_user(&mut conn, &admin).await.unwrap();
        drop(conn);

        seed(&pool).await;
        let summary = PgSeedRepository::new(pool.clone())
            .replace_all(&dev_fixtures().unwrap())
            .await
            .unwrap();

        assert_eq!(
            summary,
            SeedSummary { properties_removed: 5, tenants_removed: 5, users_removed: 5 }
        );
        // The superuser survives both resets.
        assert_eq!(count(&pool, "users").await, 6);
        assert_eq!(count(&pool, "tenants").await, 5);
        assert_eq!(count(&pool, "tenant_memberships").await, 5);
        assert_eq!(count(&pool, "properties").await, 5);
        assert_eq!(count(&pool, "property_access").await, 5);
        assert_eq!(count(&pool, "rooms").await, 10);
    }
}
