//! Read-only reservation aggregates for the owner dashboard

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use pousada_core::domain::ReservationStatus;
use pousada_core::error::DomainError;
use pousada_core::repositories::ReservationRepository;

use super::db_error;

pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(
        &self,
        condition: &str,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
        action: &str,
    ) -> Result<i64, DomainError> {
        let sql = format!(
            "SELECT COUNT(*) FROM reservations WHERE property_id = $1 AND {condition} AND status = ANY($3)"
        );
        sqlx::query_scalar(&sql)
            .bind(property_id)
            .bind(day)
            .bind(ReservationStatus::as_strs(statuses))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(action, e))
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn count_arrivals(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError> {
        self.count("check_in = $2", property_id, day, statuses, "counting arrivals")
            .await
    }

    async fn count_departures(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError> {
        self.count("check_out = $2", property_id, day, statuses, "counting departures")
            .await
    }

    async fn count_staying(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError> {
        self.count(
            "check_in <= $2 AND check_out > $2",
            property_id,
            day,
            statuses,
            "counting stays",
        )
        .await
    }

    async fn revenue_by_check_in(
        &self,
        property_id: &Uuid,
        from: NaiveDate,
        to: NaiveDate,
        excluded: &[ReservationStatus],
    ) -> Result<Decimal, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(total_price), 0)
            FROM reservations
            WHERE property_id = $1
              AND check_in BETWEEN $2 AND $3
              AND status <> ALL($4)
            "#,
        )
        .bind(property_id)
        .bind(from)
        .bind(to)
        .bind(ReservationStatus::as_strs(excluded))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("summing monthly revenue", e))
    }
}
