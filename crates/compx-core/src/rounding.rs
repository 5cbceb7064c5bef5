//! Decimal floor rounding of `f64` values.
//!
//! Rounding works on the exact binary value of the float, as a big-decimal
//! `FLOOR` scale would. `5.3` is stored as `5.29999999999999982...`, so it
//! floors to `5.2` at one place. Both sides of an equality check go through
//! the same conversion, which keeps such values equal to themselves.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` toward negative infinity, keeping `places` decimal digits.
///
/// NaN, infinities and zeros are returned unchanged.
pub fn floor_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    if places == 0 {
        return value.floor();
    }

    // Smaller than the last digit a 28-place decimal holds: the floor is 0
    // or one unit below it.
    if value.abs() < 1e-28 {
        return below_resolution(value, places);
    }

    match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(places, RoundingStrategy::ToNegativeInfinity)
            .to_f64()
            .unwrap_or(value),
        // Beyond 2^96 every f64 is already an integer.
        None => value,
    }
}

fn below_resolution(value: f64, places: u32) -> f64 {
    if value < 0.0 {
        -1.0 / 10f64.powi(places as i32)
    } else {
        0.0
    }
}
