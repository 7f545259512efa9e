//! Repository for the `rooms` table.

use sqlx::PgPool;

use innkeeper_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, room_number, floor, room_type, bed_type, price_per_night, \
     capacity_adults, capacity_children, description, is_active, created_at, updated_at";

/// Read access to the room catalog, plus admin-side management.
///
/// The reservation core only reads rooms; mutation is reserved for the
/// catalog-management endpoints.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (name, room_number, floor, room_type, bed_type,
                                price_per_night, capacity_adults, capacity_children, description)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 'double'), COALESCE($5, 'double'),
                     $6, $7, $8, COALESCE($9, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(&input.room_number)
            .bind(input.floor)
            .bind(&input.room_type)
            .bind(&input.bed_type)
            .bind(input.price_per_night)
            .bind(input.capacity_adults)
            .bind(input.capacity_children)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active (bookable) rooms ordered by room number.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM rooms WHERE is_active = TRUE ORDER BY room_number");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                name = COALESCE($2, name),
                floor = COALESCE($3, floor),
                room_type = COALESCE($4, room_type),
                bed_type = COALESCE($5, bed_type),
                price_per_night = COALESCE($6, price_per_night),
                capacity_adults = COALESCE($7, capacity_adults),
                capacity_children = COALESCE($8, capacity_children),
                description = COALESCE($9, description),
                is_active = COALESCE($10, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.floor)
            .bind(&input.room_type)
            .bind(&input.bed_type)
            .bind(input.price_per_night)
            .bind(input.capacity_adults)
            .bind(input.capacity_children)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
