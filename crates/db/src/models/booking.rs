//! Booking models.

use chrono::NaiveDate;
use innkeeper_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
///
/// `status` holds one of the `innkeeper_core::booking::STATUS_*` values;
/// `total_price` is computed at creation and never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub room_id: DbId,
    pub user_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub status: String,
    pub total_price: Decimal,
    pub special_requests: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert record for a new booking. Built by the API layer after
/// validation and pricing; never deserialized from client input directly.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub room_id: DbId,
    pub user_id: DbId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_price: Decimal,
    pub special_requests: String,
}
