//! # Mersenne — 2^p − 1 Construction and Digit Filter
//!
//! Builds the Mersenne number for a prime exponent and decides whether its
//! decimal length falls inside the configured window. Only the length is
//! checked here; value bounds apply to the perfect number downstream.
//!
//! The candidate is called a Mersenne prime throughout the search, but it is
//! only tested for primality when `require_mersenne_prime` is set (see
//! [`is_mersenne_prime`]). Otherwise 2^11 − 1 = 23 × 89 passes through like
//! any other.

use rug::Integer;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::{checked_u32, exact_digits, primality};

/// Largest exponent whose Mersenne number trial division finishes in seconds.
/// Each step past it multiplies the worst case by about √2.
pub const STRICT_EXPONENT_LIMIT: u32 = 43;

/// Decimal length of 2^43 − 1. A digit window capped here keeps strict mode cheap
/// whatever the exponent ceiling, since the window is checked first.
pub const STRICT_DIGIT_LIMIT: i64 = 13;

/// 2^n − 1. Fails when `n` does not fit the `u32` shift width.
pub fn mersenne_number(n: &Integer) -> Result<Integer> {
    let shift = checked_u32(n)?;
    Ok((Integer::from(1u32) << shift) - 1u32)
}

/// True iff the decimal digit count of `mersenne` is within
/// `[mersenne_min_digits, mersenne_max_digits]`.
pub fn is_valid_mersenne(mersenne: &Integer, config: &SearchConfig) -> bool {
    let digits = exact_digits(mersenne) as i64;
    digits >= config.mersenne_min_digits && digits <= config.mersenne_max_digits
}

/// Trial-division check of the Mersenne number itself.
///
/// Cost grows with √(2^p), so this is only practical for p up to
/// [`STRICT_EXPONENT_LIMIT`].
pub fn is_mersenne_prime(mersenne: &Integer) -> bool {
    primality::is_prime(mersenne)
}
