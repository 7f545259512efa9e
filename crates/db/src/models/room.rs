//! Room catalog models.

use innkeeper_core::booking::RoomCapacity;
use innkeeper_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub room_number: String,
    pub floor: i32,
    pub room_type: String,
    pub bed_type: String,
    pub price_per_night: Decimal,
    pub capacity_adults: i32,
    pub capacity_children: i32,
    pub description: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// Occupant limits used by booking validation.
    pub fn capacity(&self) -> RoomCapacity {
        RoomCapacity {
            adults: self.capacity_adults,
            children: self.capacity_children,
        }
    }
}

/// DTO for creating a room (admin catalog management).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub room_number: String,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub bed_type: Option<String>,
    pub price_per_night: Decimal,
    pub capacity_adults: i32,
    pub capacity_children: i32,
    pub description: Option<String>,
}

/// DTO for updating a room. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub bed_type: Option<String>,
    pub price_per_night: Option<Decimal>,
    pub capacity_adults: Option<i32>,
    pub capacity_children: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
