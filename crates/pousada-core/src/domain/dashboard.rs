//! Owner dashboard figures and the arithmetic behind them.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Raw counts for one property and one day, as read from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyFigures {
    pub total_rooms: i64,
    pub checkins_today: i64,
    pub checkouts_today: i64,
    pub occupied_rooms: i64,
    pub revenue_month: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub occupancy_rate: u32,
    pub active_reservations: i64,
    pub checkins_today: i64,
    pub checkouts_today: i64,
    pub revenue_month: f64,
    pub property_name: String,
}

impl DashboardStats {
    pub fn from_figures(property_name: &str, figures: &DailyFigures) -> Self {
        Self {
            occupancy_rate: occupancy_rate(figures.occupied_rooms, figures.total_rooms),
            active_reservations: figures.occupied_rooms,
            checkins_today: figures.checkins_today,
            checkouts_today: figures.checkouts_today,
            revenue_month: figures.revenue_month.to_f64().unwrap_or_default(),
            property_name: property_name.to_string(),
        }
    }
}

/// Truncated integer percentage, 0 with no rooms, never above 100.
///
/// Reservations are not pinned to rooms, so overbooking can push the raw
/// ratio past 100.
pub fn occupancy_rate(occupied: i64, total_rooms: i64) -> u32 {
    if total_rooms <= 0 || occupied <= 0 {
        return 0;
    }
    let pct = (occupied.saturating_mul(100)) / total_rooms;
    pct.min(100) as u32
}

/// First and last calendar day of `today`'s month.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let next_month_first = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };
    let last = next_month_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);
    (first, last)
}
