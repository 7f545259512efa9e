//! Booking status constants, lifecycle state machine, and request validation.
//!
//! Status values are stored as TEXT in the `bookings` table; the constants
//! here must match the CHECK constraint in the `create_bookings` migration.

use chrono::NaiveDate;

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_COMPLETED: &str = "completed";

/// Statuses that count toward the overlap check. Cancelled and completed
/// bookings release their dates.
pub const ACTIVE_STATUSES: [&str; 2] = [STATUS_PENDING, STATUS_CONFIRMED];

/// Whether a booking in this status holds its date range.
pub fn is_active(status: &str) -> bool {
    ACTIVE_STATUSES.contains(&status)
}

/// Whether a booking in this status admits no further transitions.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_CANCELLED || status == STATUS_COMPLETED
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the set of statuses reachable from `from`.
///
/// Terminal statuses (cancelled, completed) return an empty slice because
/// no further transitions are allowed. Unknown statuses likewise.
pub fn valid_transitions(from: &str) -> &'static [&'static str] {
    match from {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_COMPLETED, STATUS_CANCELLED],
        _ => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: &str, to: &str) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a transition, returning a typed error for invalid ones.
pub fn validate_transition(from: &str, to: &'static str) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.to_string(),
            to,
        })
    }
}

/// A booking can be cancelled while it is still active and its check-in
/// has not yet arrived. Cancellation flips status; rows are never deleted.
pub fn can_be_cancelled(status: &str, check_in: NaiveDate, today: NaiveDate) -> bool {
    is_active(status) && check_in > today
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

/// Occupant limits read from the room snapshot at validation time.
#[derive(Debug, Clone, Copy)]
pub struct RoomCapacity {
    pub adults: i32,
    pub children: i32,
}

/// Structural and policy validation for a creation request, checked before
/// any transaction is opened. Each violated rule names the offending field.
pub fn validate_request(
    check_in: NaiveDate,
    check_out: NaiveDate,
    adults: i32,
    children: i32,
    capacity: RoomCapacity,
    today: NaiveDate,
) -> Result<(), CoreError> {
    if check_in >= check_out {
        return Err(CoreError::validation(
            "check_out",
            "Check-out date must be after check-in date",
        ));
    }
    if check_in < today {
        return Err(CoreError::validation(
            "check_in",
            "Check-in date cannot be in the past",
        ));
    }
    if adults > capacity.adults {
        return Err(CoreError::validation(
            "adults",
            format!("Number of adults exceeds room capacity of {}", capacity.adults),
        ));
    }
    if children > capacity.children {
        return Err(CoreError::validation(
            "children",
            format!("Number of children exceeds room capacity of {}", capacity.children),
        ));
    }
    Ok(())
}
