//! # Primality — Trial Division on Exponents
//!
//! Decides whether an exponent candidate is prime. Exponents in this search
//! are small (tens to thousands), so plain trial division by odd integers is
//! the whole test: no sieve, no Miller–Rabin.
//!
//! ## Square-Root Bound
//!
//! Divisors run from 3 up to ⌊√n⌋ computed with GMP's exact integer square
//! root. A floating-point `sqrt(n as f64)` bound gives the same answer below
//! 2^53 but can undershoot ⌊√n⌋ above that and report a composite as prime;
//! the exact bound never does.

use rug::Integer;

/// True iff `num` is prime. Total over all integers: anything ≤ 1 is not prime.
pub fn is_prime(num: &Integer) -> bool {
    if *num <= 1 {
        return false;
    }
    if *num == 2 {
        return true;
    }
    if num.is_even() {
        return false;
    }

    let bound = Integer::from(num.sqrt_ref());
    let mut divisor = Integer::from(3u32);
    while divisor <= bound {
        if num.is_divisible(&divisor) {
            return false;
        }
        divisor += 2u32;
    }
    true
}
