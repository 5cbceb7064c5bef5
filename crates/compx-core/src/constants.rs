//! Process-wide configuration.
//!
//! The only mutable setting is the number of decimal places both sides of an
//! equality check are floor-rounded to. It lives in an atomic, so changing it
//! from one thread while another compares values is not a data race; the
//! comparison simply sees the old or the new precision.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::complex::ComplexNumber;
use crate::error::{CompxError, CompxResult};

/// Precision used by equality until [`set_default_round`] is called.
pub const DEFAULT_ROUND: u32 = 13;

/// Largest accepted precision.
pub const MAX_ROUND: u32 = 13;

static ROUND: AtomicU32 = AtomicU32::new(DEFAULT_ROUND);

/// The imaginary unit.
pub fn i() -> ComplexNumber {
    ComplexNumber::new(0.0, 1.0)
}

pub fn default_round() -> u32 {
    ROUND.load(Ordering::Relaxed)
}

/// Change the equality precision for every later comparison in the process.
///
/// Fails with [`CompxError::ConversionRangeOutsideOfBounds`] when `value` is
/// above [`MAX_ROUND`]; the current precision is kept in that case.
pub fn set_default_round(value: u32) -> CompxResult<()> {
    if value > MAX_ROUND {
        return Err(CompxError::ConversionRangeOutsideOfBounds(value));
    }
    let previous = ROUND.swap(value, Ordering::Relaxed);
    if previous != value {
        tracing::debug!(previous, current = value, "default rounding precision changed");
    }
    Ok(())
}
