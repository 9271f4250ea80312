//! Error types for the perfect-number search.
//!
//! The arithmetic itself is total. The only failure is an exponent that does
//! not fit the native shift width.

use rug::Integer;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Exponent is negative or wider than the `u32` shift amount GMP accepts.
    #[error("exponent {exponent} is outside the supported range 0..={}", u32::MAX)]
    ExponentOutOfRange { exponent: Integer },
}

pub type Result<T> = std::result::Result<T, SearchError>;
