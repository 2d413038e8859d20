//! Reservation statuses, as stored by the booking side.
//!
//! Reservations are written elsewhere; this crate only aggregates them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Arrivals expected today.
    pub const ARRIVING: &'static [ReservationStatus] =
        &[ReservationStatus::Confirmed, ReservationStatus::Pending];
    /// Departures expected today.
    pub const DEPARTING: &'static [ReservationStatus] = &[ReservationStatus::CheckedIn];
    /// Stays that hold a room.
    pub const OCCUPYING: &'static [ReservationStatus] =
        &[ReservationStatus::CheckedIn, ReservationStatus::Confirmed];
    /// Never counted as revenue.
    pub const VOIDED: &'static [ReservationStatus] =
        &[ReservationStatus::Cancelled, ReservationStatus::NoShow];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "checked_in" => Some(ReservationStatus::CheckedIn),
            "checked_out" => Some(ReservationStatus::CheckedOut),
            "cancelled" => Some(ReservationStatus::Cancelled),
            "no_show" => Some(ReservationStatus::NoShow),
            _ => None,
        }
    }

    pub fn as_strs(statuses: &[ReservationStatus]) -> Vec<String> {
        statuses.iter().map(|s| s.as_str().to_string()).collect()
    }
}
