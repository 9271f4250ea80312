//! # Search — Bounded Walk over Mersenne Exponents
//!
//! Walks exponents p from `exponent_min` to `exponent_max` one at a time and
//! pushes each candidate through the pipeline:
//!
//! ```text
//! is_prime(p) → 2^p − 1 → Mersenne digit filter → [strict: is_prime(2^p − 1)]
//!             → 2^(p−1)(2^p − 1) → perfect-number filter → results
//! ```
//!
//! ## Termination
//!
//! `exponent_min` is always examined. After each exponent the walk stops when
//! - the result cap (`result_limit > 0`) is reached, checked right after each
//!   accepted number, or
//! - the incremented exponent passes `exponent_max`.
//!
//! So an inverted range (`exponent_min > exponent_max`) examines exactly one
//! exponent, and negative exponents simply fail the primality test.
//!
//! There is no other exit. With no cap and a huge ceiling the walk runs until
//! the ceiling, or until an exponent no longer fits the `u32` shift width, at
//! which point [`crate::error::SearchError::ExponentOutOfRange`] is returned.
//!
//! The loop is single-threaded and does no I/O beyond tracing events. Results
//! come back in ascending exponent order; the same configuration always yields
//! the same sequence.

use rug::Integer;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::{exact_digits, mersenne, perfect, primality};

/// An accepted perfect number with the values it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfectNumber {
    pub exponent: Integer,
    pub mersenne: Integer,
    pub value: Integer,
    pub digits: u64,
}

/// Per-stage counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub exponents_tested: u64,
    pub prime_exponents: u64,
    /// Mersenne numbers outside the digit window.
    pub mersenne_rejected: u64,
    /// Mersenne numbers found composite (strict mode only).
    pub mersenne_composite: u64,
    pub perfect_rejected: u64,
    pub found: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ResultLimit,
    ExponentCeiling,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::ResultLimit => write!(f, "result_limit"),
            Termination::ExponentCeiling => write!(f, "exponent_ceiling"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub numbers: Vec<PerfectNumber>,
    pub stats: SearchStats,
    pub termination: Termination,
}

impl SearchOutcome {
    /// The accepted values alone, in discovery order.
    pub fn into_values(self) -> Vec<Integer> {
        self.numbers.into_iter().map(|pn| pn.value).collect()
    }
}

/// Run the search and return only the accepted values.
pub fn find_perfect_numbers(config: &SearchConfig) -> Result<Vec<Integer>> {
    Ok(search(config)?.into_values())
}

/// Run the search, keeping exponents, Mersenne factors and stage counters.
pub fn search(config: &SearchConfig) -> Result<SearchOutcome> {
    let cap = config.result_cap();
    info!(
        exponent_min = %config.exponent_min,
        exponent_max = %config.exponent_max,
        perfect_min = %config.perfect_min,
        perfect_max = %config.perfect_max,
        limit = ?cap,
        strict = config.require_mersenne_prime,
        "searching for perfect numbers"
    );
    if strict_mode_is_slow(config) {
        warn!(
            exponent_max = %config.exponent_max,
            practical_max = mersenne::STRICT_EXPONENT_LIMIT,
            "strict mode trial-divides 2^p - 1; exponents above the practical limit can take hours"
        );
    }

    let start = Instant::now();
    let mut numbers = Vec::new();
    let mut stats = SearchStats::default();
    let mut termination = Termination::ExponentCeiling;
    let mut exponent = config.exponent_min.clone();

    loop {
        stats.exponents_tested += 1;

        if let Some(found) = examine(&exponent, config, &mut stats)? {
            numbers.push(found);
            stats.found += 1;
            if cap.is_some_and(|cap| stats.found >= cap) {
                termination = Termination::ResultLimit;
                break;
            }
        }

        exponent += 1u32;
        if exponent > config.exponent_max {
            break;
        }
    }

    info!(
        found = stats.found,
        tested = stats.exponents_tested,
        prime_exponents = stats.prime_exponents,
        mersenne_rejected = stats.mersenne_rejected,
        mersenne_composite = stats.mersenne_composite,
        perfect_rejected = stats.perfect_rejected,
        termination = %termination,
        elapsed = format_args!("{:.3}s", start.elapsed().as_secs_f64()),
        "search complete"
    );

    Ok(SearchOutcome {
        numbers,
        stats,
        termination,
    })
}

/// Strict mode over an exponent range whose Mersenne numbers can still pass
/// the digit window but are too wide for trial division.
fn strict_mode_is_slow(config: &SearchConfig) -> bool {
    config.require_mersenne_prime
        && config.exponent_max > mersenne::STRICT_EXPONENT_LIMIT
        && config.mersenne_max_digits > mersenne::STRICT_DIGIT_LIMIT
}

/// Push one exponent through the pipeline. `Ok(None)` means a filter rejected it.
fn examine(
    exponent: &Integer,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> Result<Option<PerfectNumber>> {
    if !primality::is_prime(exponent) {
        return Ok(None);
    }
    stats.prime_exponents += 1;

    let mersenne = mersenne::mersenne_number(exponent)?;
    if !mersenne::is_valid_mersenne(&mersenne, config) {
        stats.mersenne_rejected += 1;
        debug!(
            p = %exponent,
            digits = exact_digits(&mersenne),
            "Mersenne number outside digit window"
        );
        return Ok(None);
    }
    if config.require_mersenne_prime && !mersenne::is_mersenne_prime(&mersenne) {
        stats.mersenne_composite += 1;
        debug!(p = %exponent, "Mersenne number is composite");
        return Ok(None);
    }

    let value = perfect::perfect_number(exponent, &mersenne)?;
    if !perfect::is_valid_perfect(&value, config) {
        stats.perfect_rejected += 1;
        debug!(p = %exponent, value = %value, "perfect number outside bounds");
        return Ok(None);
    }

    let digits = exact_digits(&value);
    debug!(p = %exponent, digits, value = %value, "perfect number accepted");
    Ok(Some(PerfectNumber {
        exponent: exponent.clone(),
        mersenne,
        value,
        digits,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use rug::ops::Pow;

    fn huge() -> Integer {
        Integer::from(10u32).pow(100u32)
    }

    fn values(config: &SearchConfig) -> Vec<Integer> {
        find_perfect_numbers(config).unwrap()
    }

    fn ints(xs: &[u64]) -> Vec<Integer> {
        xs.iter().map(|&x| Integer::from(x)).collect()
    }

    #[test]
    fn all_four_below_ten_thousand() {
        let config = SearchConfig {
            perfect_min: Integer::from(1u32),
            perfect_max: Integer::from(10_000u32),
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(7u32),
            result_limit: -1,
            ..SearchConfig::default()
        };
        assert_eq!(values(&config), ints(&[6, 28, 496, 8128]));
    }

    #[test]
    fn value_ceiling_of_one_hundred() {
        let config = SearchConfig {
            perfect_min: Integer::from(1u32),
            perfect_max: Integer::from(100u32),
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(7u32),
            result_limit: -1,
            ..SearchConfig::default()
        };
        assert_eq!(values(&config), ints(&[6, 28]));
    }

    #[test]
    fn exponent_ceiling_stops_before_count_cap() {
        let config = SearchConfig {
            perfect_max: huge(),
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(10u32),
            result_limit: 5,
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.termination, Termination::ExponentCeiling);
        assert_eq!(outcome.stats.exponents_tested, 9);
        assert_eq!(outcome.stats.prime_exponents, 4);
        assert_eq!(outcome.into_values(), ints(&[6, 28, 496, 8128]));
    }

    #[test]
    fn four_digit_window_keeps_only_8128() {
        let config = SearchConfig {
            perfect_min_digits: 4,
            perfect_max_digits: 4,
            perfect_min: Integer::from(1u32),
            perfect_max: huge(),
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(12u32),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.stats.perfect_rejected, 4);
        assert_eq!(outcome.into_values(), ints(&[8128]));
    }

    #[test]
    fn entry_point_configuration() {
        let outcome = search(&SearchConfig::entry_point()).unwrap();
        assert_eq!(outcome.termination, Termination::ExponentCeiling);
        assert_eq!(outcome.into_values(), ints(&[8128]));
    }

    #[test]
    fn count_cap_stops_early() {
        let config = SearchConfig {
            perfect_max: huge(),
            exponent_max: Integer::from(20u32),
            result_limit: 2,
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.termination, Termination::ResultLimit);
        // Stopped right after p = 3.
        assert_eq!(outcome.stats.exponents_tested, 2);
        assert_eq!(outcome.into_values(), ints(&[6, 28]));
    }

    #[test]
    fn zero_and_negative_caps_run_to_ceiling() {
        for limit in [0, -1, -50] {
            let config = SearchConfig {
                perfect_max: huge(),
                exponent_max: Integer::from(13u32),
                result_limit: limit,
                ..SearchConfig::default()
            };
            let outcome = search(&config).unwrap();
            assert_eq!(outcome.termination, Termination::ExponentCeiling);
            assert_eq!(outcome.stats.exponents_tested, 12);
            assert_eq!(outcome.stats.found, 6, "limit {}", limit);
        }
    }

    #[test]
    fn composite_mersenne_passes_without_strict_mode() {
        let config = SearchConfig {
            perfect_max: huge(),
            perfect_max_digits: 0,
            exponent_min: Integer::from(11u32),
            exponent_max: Integer::from(11u32),
            ..SearchConfig::default()
        };
        // 2^10 * 2047, not actually perfect since 2047 = 23 * 89.
        assert_eq!(values(&config), ints(&[2_096_128]));
    }

    #[test]
    fn strict_mode_skips_composite_mersenne() {
        let config = SearchConfig {
            perfect_max: huge(),
            exponent_max: Integer::from(13u32),
            require_mersenne_prime: true,
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.stats.mersenne_composite, 1);
        assert_eq!(outcome.into_values(), ints(&[6, 28, 496, 8128, 33_550_336]));
    }

    #[test]
    fn mersenne_digit_window_rejects_small_exponents() {
        let config = SearchConfig {
            perfect_max: huge(),
            exponent_max: Integer::from(13u32),
            mersenne_min_digits: 3,
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        // 3, 7 and 31 are too short.
        assert_eq!(outcome.stats.mersenne_rejected, 3);
        assert_eq!(outcome.numbers[0].exponent, 7);
        assert_eq!(outcome.numbers[0].mersenne, 127);
    }

    #[test]
    fn records_carry_exponent_and_digits() {
        let config = SearchConfig {
            exponent_max: Integer::from(7u32),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        let last = outcome.numbers.last().unwrap();
        assert_eq!(last.exponent, 7);
        assert_eq!(last.mersenne, 127);
        assert_eq!(last.value, 8128);
        assert_eq!(last.digits, 4);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let config = SearchConfig {
            perfect_min: Integer::from(9_000u32),
            perfect_max: Integer::from(9_999u32),
            ..SearchConfig::default()
        };
        assert!(values(&config).is_empty());
    }

    #[test]
    fn single_exponent_range() {
        let config = SearchConfig {
            exponent_min: Integer::from(5u32),
            exponent_max: Integer::from(5u32),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.stats.exponents_tested, 1);
        assert_eq!(outcome.into_values(), ints(&[496]));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let config = SearchConfig {
            perfect_max: huge(),
            exponent_max: Integer::from(31u32),
            ..SearchConfig::default()
        };
        assert_eq!(values(&config), values(&config));
    }

    #[test]
    fn inverted_range_examines_exponent_min_once() {
        let config = SearchConfig {
            exponent_min: Integer::from(7u32),
            exponent_max: Integer::from(2u32),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.stats.exponents_tested, 1);
        assert_eq!(outcome.termination, Termination::ExponentCeiling);
        assert_eq!(outcome.into_values(), ints(&[8128]));
    }

    #[test]
    fn inverted_range_with_composite_start_is_empty() {
        let config = SearchConfig {
            exponent_min: Integer::from(9u32),
            exponent_max: Integer::from(2u32),
            ..SearchConfig::default()
        };
        assert!(values(&config).is_empty());
    }

    #[test]
    fn negative_exponent_min_walks_up_to_primes() {
        let config = SearchConfig {
            exponent_min: Integer::from(-5),
            exponent_max: Integer::from(7u32),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        // -5..=7 is 13 exponents, of which 2, 3, 5 and 7 are prime.
        assert_eq!(outcome.stats.exponents_tested, 13);
        assert_eq!(outcome.stats.prime_exponents, 4);
        assert_eq!(outcome.into_values(), ints(&[6, 28, 496, 8128]));
    }

    #[test]
    fn all_negative_range_finds_nothing() {
        let config = SearchConfig {
            exponent_min: Integer::from(-10),
            exponent_max: Integer::from(-3),
            ..SearchConfig::default()
        };
        let outcome = search(&config).unwrap();
        assert_eq!(outcome.stats.exponents_tested, 8);
        assert!(outcome.numbers.is_empty());
    }

    #[test]
    fn strict_mode_flags_wide_exponent_ceilings() {
        let slow = SearchConfig {
            exponent_max: Integer::from(61u32),
            mersenne_max_digits: 20,
            require_mersenne_prime: true,
            ..SearchConfig::default()
        };
        assert!(strict_mode_is_slow(&slow));

        let narrow_window = SearchConfig {
            mersenne_max_digits: 10,
            ..slow.clone()
        };
        assert!(!strict_mode_is_slow(&narrow_window));

        let low_ceiling = SearchConfig {
            exponent_max: Integer::from(31u32),
            ..slow.clone()
        };
        assert!(!strict_mode_is_slow(&low_ceiling));

        let not_strict = SearchConfig {
            require_mersenne_prime: false,
            ..slow
        };
        assert!(!strict_mode_is_slow(&not_strict));
    }

    #[test]
    fn prime_exponent_beyond_shift_width_errors() {
        // 2^32 + 15 is the smallest prime above u32::MAX.
        let p = Integer::from(4_294_967_311u64);
        let config = SearchConfig {
            exponent_min: p.clone(),
            exponent_max: p.clone(),
            ..SearchConfig::default()
        };
        assert_eq!(
            search(&config).unwrap_err(),
            SearchError::ExponentOutOfRange { exponent: p }
        );
    }
}
