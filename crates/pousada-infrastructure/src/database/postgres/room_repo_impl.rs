// ============================================================================
// Pousada Infrastructure - PostgreSQL Room Repository
// File: crates/pousada-infrastructure/src/database/postgres/room_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use pousada_core::domain::Room;
use pousada_core::error::DomainError;
use pousada_core::repositories::RoomRepository;

use super::{db_error, write_error};

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoomRow {
    pub id: Uuid,
    pub accommodation_id: Uuid,
    pub number: String,
    pub floor: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: row.id,
            accommodation_id: row.accommodation_id,
            number: row.number,
            floor: row.floor,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

pub(crate) async fn insert_room(conn: &mut PgConnection, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO rooms (id, accommodation_id, number, floor, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(room.id)
    .bind(room.accommodation_id)
    .bind(&room.number)
    .bind(room.floor)
    .bind(room.is_active)
    .bind(room.created_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn list_active(&self, accommodation_id: &Uuid) -> Result<Vec<Room>, DomainError> {
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
            SELECT id, accommodation_id, number, floor, is_active, created_at
            FROM rooms
            WHERE accommodation_id = $1 AND is_active
            ORDER BY floor, number
            "#,
        )
        .bind(accommodation_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing rooms", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_owned(&self, owner_id: &Uuid, id: &Uuid) -> Result<Option<Room>, DomainError> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.accommodation_id, r.number, r.floor, r.is_active, r.created_at
            FROM rooms r
            JOIN accommodations a ON a.id = r.accommodation_id
            JOIN properties p ON p.id = a.property_id
            WHERE r.id = $2 AND p.owner_id = $1
              AND r.is_active AND a.is_active AND p.is_active
            "#,
        )
        .bind(owner_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding owned room", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn count_active_for_property(&self, property_id: &Uuid) -> Result<i64, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM rooms r
            JOIN accommodations a ON a.id = r.accommodation_id
            WHERE a.property_id = $1 AND a.is_active AND r.is_active
            "#,
        )
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("counting rooms", e))
    }

    async fn number_taken(&self, accommodation_id: &Uuid, number: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM rooms WHERE accommodation_id = $1 AND number = $2 AND is_active)",
        )
        .bind(accommodation_id)
        .bind(number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("checking room number", e))
    }

    async fn create(&self, room: &Room) -> Result<Room, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("acquiring connection", e))?;
        insert_room(&mut conn, room)
            .await
            .map_err(|e| write_error("creating room", e))?;
        Ok(room.clone())
    }

    async fn deactivate(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE rooms SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deactivating room", e))?;
        Ok(())
    }
}
