//! Read-only aggregate queries over reservations (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;
use crate::domain::ReservationStatus;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// `check_in == day` and status in `statuses`.
    async fn count_arrivals(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError>;

    /// `check_out == day` and status in `statuses`.
    async fn count_departures(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError>;

    /// `check_in <= day < check_out` and status in `statuses`.
    async fn count_staying(
        &self,
        property_id: &Uuid,
        day: NaiveDate,
        statuses: &[ReservationStatus],
    ) -> Result<i64, DomainError>;

    /// Sum of `total_price` with `from <= check_in <= to`, status not in
    /// `excluded`. Zero when nothing matches.
    async fn revenue_by_check_in(
        &self,
        property_id: &Uuid,
        from: NaiveDate,
        to: NaiveDate,
        excluded: &[ReservationStatus],
    ) -> Result<Decimal, DomainError>;
}
