//! # perfect-hunter
//!
//! Enumerates even perfect numbers 2^(p−1)(2^p−1) over a bounded range of
//! exponents p, keeping only those that pass numeric and digit-length bounds.
//!
//! ## Pipeline
//!
//! For each exponent in `[exponent_min, exponent_max]`:
//!
//! 1. [`primality::is_prime`] on the exponent (trial division).
//! 2. [`mersenne::mersenne_number`] builds 2^p − 1, [`mersenne::is_valid_mersenne`]
//!    checks its digit length.
//! 3. [`perfect::perfect_number`] builds 2^(p−1)(2^p−1),
//!    [`perfect::is_valid_perfect`] checks value and digit bounds.
//! 4. [`search`] collects survivors until the result cap or the exponent
//!    ceiling; [`report`] prints them.
//!
//! Everything runs on one thread with `rug` (GMP) integers, so exponents and
//! bounds are not limited to machine words. Only the shift amount is: see
//! [`checked_u32`].

pub mod config;
pub mod error;
pub mod mersenne;
pub mod perfect;
pub mod primality;
pub mod report;
pub mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use search::find_perfect_numbers;

use rug::Integer;

/// Narrow an exponent to the `u32` shift amount GMP accepts.
///
/// Fails with [`SearchError::ExponentOutOfRange`] instead of truncating, so a
/// huge configured ceiling can never silently produce a wrong power of two.
pub fn checked_u32(n: &Integer) -> error::Result<u32> {
    n.to_u32()
        .ok_or_else(|| SearchError::ExponentOutOfRange { exponent: n.clone() })
}

/// Exact decimal digit count (expensive for very large numbers).
///
/// The sign is not counted, so `-28` has two digits.
pub fn exact_digits(n: &Integer) -> u64 {
    let s = n.to_string_radix(10);
    s.trim_start_matches('-').len() as u64
}
