//! Price derivation: nightly rate x stay length, exact decimal arithmetic.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Number of decimal places in the currency's minor unit.
const MINOR_UNIT_DP: u32 = 2;

/// Number of nights in the half-open stay `[check_in, check_out)`.
///
/// Fails with a validation error unless the stay is at least one night.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, CoreError> {
    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(CoreError::validation(
            "check_out",
            "Check-out date must be after check-in date",
        ));
    }
    Ok(nights)
}

/// Total price for a stay: `price_per_night * nights`, rounded to the
/// currency minor unit with round-half-even.
///
/// Pure and deterministic; the result is computed once at creation time
/// and never recomputed for the life of the booking.
pub fn total_price(
    price_per_night: Decimal,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Decimal, CoreError> {
    let nights = nights(check_in, check_out)?;
    let total = price_per_night * Decimal::from(nights);
    Ok(total.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointNearestEven))
}
