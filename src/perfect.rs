//! # Perfect — 2^(p−1)(2^p − 1) Construction and Acceptance Filter
//!
//! Euclid's form: when 2^p − 1 is prime, 2^(p−1)(2^p − 1) is perfect, and
//! Euler showed every even perfect number has this shape.
//!
//! The acceptance filter combines an inclusive value window with optional
//! digit bounds. A digit bound ≤ 0 switches that side off; this is the only
//! sentinel in the configuration.

use rug::Integer;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::{checked_u32, exact_digits};

/// 2^(n−1) × `mersenne`. Requires n ≥ 1 with n − 1 inside the `u32` shift width.
pub fn perfect_number(n: &Integer, mersenne: &Integer) -> Result<Integer> {
    if *n < 1 {
        return Err(SearchError::ExponentOutOfRange { exponent: n.clone() });
    }
    let shift = checked_u32(&Integer::from(n - 1u32))
        .map_err(|_| SearchError::ExponentOutOfRange { exponent: n.clone() })?;
    Ok(mersenne.clone() << shift)
}

/// True iff `perfect` lies in `[perfect_min, perfect_max]` and its digit count
/// satisfies every enabled digit bound.
pub fn is_valid_perfect(perfect: &Integer, config: &SearchConfig) -> bool {
    if perfect < &config.perfect_min || perfect > &config.perfect_max {
        return false;
    }
    let digits = exact_digits(perfect) as i64;
    (config.perfect_min_digits <= 0 || digits >= config.perfect_min_digits)
        && (config.perfect_max_digits <= 0 || digits <= config.perfect_max_digits)
}
