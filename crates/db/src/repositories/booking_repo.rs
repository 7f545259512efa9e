//! Repository for the `bookings` table: the availability query and the
//! lifecycle transitions.
//!
//! Writes touching a room's active-booking set serialize on a `FOR UPDATE`
//! row lock held for the duration of the re-check-and-insert sequence.
//! Status transitions are single-row compare-and-swap updates: the WHERE
//! clause carries the status precondition and a `None` return means the
//! precondition no longer held.

use chrono::NaiveDate;
use sqlx::{PgExecutor, PgPool};

use innkeeper_core::booking::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED};
use innkeeper_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, user_id, check_in, check_out, adults, children, status, \
     total_price, special_requests, created_at, updated_at";

pub struct BookingRepo;

impl BookingRepo {
    /// Whether the room is free over the half-open interval
    /// `[check_in, check_out)`.
    ///
    /// True iff no pending or confirmed booking on the room overlaps the
    /// interval. `exclude_booking_id` skips one booking, so an existing
    /// booking can be re-validated against its own unchanged dates.
    ///
    /// Read-only and lock-free: advisory when called on the pool, and
    /// authoritative only when called on a transaction that already holds
    /// the room's row lock.
    pub async fn is_available(
        executor: impl PgExecutor<'_>,
        room_id: DbId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        // [a, b) and [c, d) overlap iff a < d AND c < b.
        sqlx::query_scalar::<_, bool>(
            "SELECT NOT EXISTS (
                SELECT 1 FROM bookings
                WHERE room_id = $1
                  AND status IN ('pending', 'confirmed')
                  AND check_in < $3
                  AND check_out > $2
                  AND ($4::BIGINT IS NULL OR id <> $4)
             )",
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .bind(exclude_booking_id)
        .fetch_one(executor)
        .await
    }

    /// Atomically insert a new pending booking.
    ///
    /// Takes the room's row lock, re-runs the availability check under that
    /// lock, and inserts only if the interval is still free. Returns
    /// `Ok(None)` when a conflicting active booking was found at commit
    /// time; nothing is persisted in that case.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serializes concurrent creates for the same room. Two requests
        // racing for overlapping dates queue here; the loser re-checks
        // against the winner's committed row and bails out.
        sqlx::query_scalar::<_, DbId>("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(input.room_id)
            .fetch_one(&mut *tx)
            .await?;

        let available = Self::is_available(
            &mut *tx,
            input.room_id,
            input.check_in,
            input.check_out,
            None,
        )
        .await?;

        if !available {
            tx.rollback().await?;
            tracing::debug!(
                room_id = input.room_id,
                check_in = %input.check_in,
                check_out = %input.check_out,
                "Booking create lost the availability re-check"
            );
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO bookings (room_id, user_id, check_in, check_out,
                                   adults, children, total_price, special_requests)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(input.room_id)
            .bind(input.user_id)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(input.adults)
            .bind(input.children)
            .bind(input.total_price)
            .bind(&input.special_requests)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(booking))
    }

    /// Find a booking by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every booking, most recent first. Staff view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// List a requester's own bookings, most recent first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Booking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List bookings checking in on the given day. Front-desk view.
    pub async fn list_checking_in_on(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bookings WHERE check_in = $1 ORDER BY check_in");
        sqlx::query_as::<_, Booking>(&query)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// CAS transition `pending -> confirmed`.
    ///
    /// Returns `None` if the booking does not exist or is not pending.
    pub async fn confirm(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(STATUS_CONFIRMED)
            .fetch_optional(pool)
            .await
    }

    /// CAS transition to `cancelled`, allowed while the booking is still
    /// active and its check-in is after `today`.
    ///
    /// Returns `None` if the precondition did not hold.
    pub async fn cancel(
        pool: &PgPool,
        id: DbId,
        today: NaiveDate,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1
               AND status IN ('pending', 'confirmed')
               AND check_in > $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(STATUS_CANCELLED)
            .bind(today)
            .fetch_optional(pool)
            .await
    }

    /// CAS transition `confirmed -> completed`, once check-out has passed.
    ///
    /// Returns `None` if the booking is not confirmed or not yet due.
    /// Invoked by an externally-scheduled sweep, so callers treat an
    /// already-completed booking as success.
    pub async fn mark_completed(
        pool: &PgPool,
        id: DbId,
        today: NaiveDate,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = 'confirmed' AND check_out <= $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(STATUS_COMPLETED)
            .bind(today)
            .fetch_optional(pool)
            .await
    }
}
