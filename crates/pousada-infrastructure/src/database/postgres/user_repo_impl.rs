// ============================================================================
// Pousada Infrastructure - PostgreSQL User Repository
// File: crates/pousada-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use pousada_core::domain::{Tenant, TenantMembership, User};
use pousada_core::error::DomainError;
use pousada_core::repositories::UserRepository;

use super::tenant_repo_impl::{insert_membership, insert_tenant};
use super::{db_error, unique_violation, write_error, USERS_EMAIL_KEY};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            document: row.document,
            phone: row.phone,
            is_active: row.is_active,
            is_superuser: row.is_superuser,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

/// Inserts one user on an open connection or transaction.
pub(crate) async fn insert_user(conn: &mut PgConnection, user: &User) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO users (
            id, email, password_hash, first_name, last_name,
            document, phone, is_active, is_superuser, created_at, modified_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING
            id, email, password_hash, first_name, last_name,
            document, phone, is_active, is_superuser, created_at, modified_at
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.document)
    .bind(&user.phone)
    .bind(user.is_active)
    .bind(user.is_superuser)
    .bind(user.created_at)
    .bind(user.modified_at)
    .fetch_one(&mut *conn)
    .await
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, email, password_hash, first_name, last_name,
                document, phone, is_active, is_superuser, created_at, modified_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, email, password_hash, first_name, last_name,
                document, phone, is_active, is_superuser, created_at, modified_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by email", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create_account(
        &self,
        user: &User,
        tenant: &Tenant,
        membership: &TenantMembership,
    ) -> Result<User, DomainError> {
        info!("Creating account for user {} with tenant {}", user.id, tenant.slug);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting signup transaction", e))?;

        let row = insert_user(&mut tx, user).await.map_err(|e| {
            if unique_violation(&e).as_deref() == Some(USERS_EMAIL_KEY) {
                DomainError::EmailAlreadyExists(user.email.clone())
            } else {
                write_error("creating user", e)
            }
        })?;
        insert_tenant(&mut tx, tenant)
            .await
            .map_err(|e| write_error("creating tenant", e))?;
        insert_membership(&mut tx, membership)
            .await
            .map_err(|e| write_error("creating tenant membership", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("committing signup transaction", e))?;

        info!("Account created successfully: {}", row.id);
        Ok(row.into())
    }
}
