//! # Config — Search Bounds and TOML Loading
//!
//! [`SearchConfig`] is the immutable snapshot of every bound the search
//! consults. It is built once (named fields over [`Default`], a TOML file, or
//! CLI overrides in the binary) and passed by reference into
//! [`crate::search`]; nothing mutates it while a search runs.
//!
//! ## Field Map
//!
//! | Field | Meaning | Default |
//! |---|---|---|
//! | `perfect_min` / `perfect_max` | accepted perfect-number values, inclusive | 1 / 10000 |
//! | `perfect_min_digits` / `perfect_max_digits` | perfect-number digit bounds, ≤ 0 disables that side | 1 / `i64::MAX` |
//! | `exponent_min` / `exponent_max` | exponents tested, inclusive; `exponent_min` is always examined | 2 / 20 |
//! | `mersenne_min_digits` / `mersenne_max_digits` | digit bounds on 2^p − 1, inclusive | 1 / 10 |
//! | `result_limit` | stop after this many results, ≤ 0 means no cap | -1 |
//! | `require_mersenne_prime` | also trial-test 2^p − 1 | false |
//! | `run` | reserved, not read by the search | true |
//!
//! ## TOML Layout
//!
//! ```toml
//! [perfect]
//! min = 1000
//! max = "100000000000000000000000"   # strings for values beyond i64
//! min_digits = 1
//! max_digits = 0
//!
//! [mersenne]
//! min_exponent = 2
//! max_exponent = 61
//! min_digits = 1
//! max_digits = 20
//!
//! [search]
//! limit = 5
//! require_mersenne_prime = true
//! ```
//!
//! Every key is optional; missing keys keep the value of the base
//! configuration the file is applied to.

use anyhow::{Context, Result};
use rug::Integer;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub perfect_min: Integer,
    pub perfect_max: Integer,
    pub perfect_min_digits: i64,
    pub perfect_max_digits: i64,
    pub exponent_min: Integer,
    pub exponent_max: Integer,
    pub mersenne_min_digits: i64,
    pub mersenne_max_digits: i64,
    pub result_limit: i64,
    /// Skip exponents whose 2^p − 1 is composite. Off by default, so every
    /// prime exponent that passes the filters yields a result.
    pub require_mersenne_prime: bool,
    /// Reserved flag. Carried through configuration layers, ignored by the search.
    pub run: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            perfect_min: Integer::from(1u32),
            perfect_max: Integer::from(10_000u32),
            perfect_min_digits: 1,
            perfect_max_digits: i64::MAX,
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(20u32),
            mersenne_min_digits: 1,
            mersenne_max_digits: 10,
            result_limit: -1,
            require_mersenne_prime: false,
            run: true,
        }
    }
}

impl SearchConfig {
    /// The fixed search the binary runs when invoked without arguments:
    /// perfect numbers in [1000, 100000] from exponents 2..=10, at most 5.
    pub fn entry_point() -> Self {
        SearchConfig {
            perfect_min: Integer::from(1_000u32),
            perfect_max: Integer::from(100_000u32),
            exponent_min: Integer::from(2u32),
            exponent_max: Integer::from(10u32),
            result_limit: 5,
            ..SearchConfig::default()
        }
    }

    /// Positive result cap, or `None` when the search is unbounded by count.
    pub fn result_cap(&self) -> Option<u64> {
        u64::try_from(self.result_limit).ok().filter(|&n| n > 0)
    }
}

// ── TOML Configuration Structs ──────────────────────────────────

/// A big-integer bound as written in TOML: a native integer, or a decimal
/// string for values that do not fit `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerValue {
    Int(i64),
    Text(String),
}

impl IntegerValue {
    pub fn to_integer(&self) -> Result<Integer> {
        match self {
            IntegerValue::Int(n) => Ok(Integer::from(*n)),
            IntegerValue::Text(s) => s
                .trim()
                .parse::<Integer>()
                .with_context(|| format!("'{}' is not a decimal integer", s)),
        }
    }
}

/// Top-level file layout: `[perfect]`, `[mersenne]` and `[search]` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub perfect: PerfectSection,
    #[serde(default)]
    pub mersenne: MersenneSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// The `[perfect]` section: bounds on accepted perfect numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerfectSection {
    pub min: Option<IntegerValue>,
    pub max: Option<IntegerValue>,
    pub min_digits: Option<i64>,
    pub max_digits: Option<i64>,
}

/// The `[mersenne]` section: exponent range and digit bounds on 2^p − 1.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MersenneSection {
    pub min_exponent: Option<IntegerValue>,
    pub max_exponent: Option<IntegerValue>,
    pub min_digits: Option<i64>,
    pub max_digits: Option<i64>,
}

/// The `[search]` section: result cap and mode flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    pub limit: Option<i64>,
    pub require_mersenne_prime: Option<bool>,
    pub run: Option<bool>,
}

impl ConfigFile {
    /// Overlay the keys present in the file onto `base`.
    pub fn apply(&self, base: SearchConfig) -> Result<SearchConfig> {
        let mut config = base;

        if let Some(v) = &self.perfect.min {
            config.perfect_min = v.to_integer().context("perfect.min")?;
        }
        if let Some(v) = &self.perfect.max {
            config.perfect_max = v.to_integer().context("perfect.max")?;
        }
        if let Some(d) = self.perfect.min_digits {
            config.perfect_min_digits = d;
        }
        if let Some(d) = self.perfect.max_digits {
            config.perfect_max_digits = d;
        }

        if let Some(v) = &self.mersenne.min_exponent {
            config.exponent_min = v.to_integer().context("mersenne.min_exponent")?;
        }
        if let Some(v) = &self.mersenne.max_exponent {
            config.exponent_max = v.to_integer().context("mersenne.max_exponent")?;
        }
        if let Some(d) = self.mersenne.min_digits {
            config.mersenne_min_digits = d;
        }
        if let Some(d) = self.mersenne.max_digits {
            config.mersenne_max_digits = d;
        }

        if let Some(limit) = self.search.limit {
            config.result_limit = limit;
        }
        if let Some(strict) = self.search.require_mersenne_prime {
            config.require_mersenne_prime = strict;
        }
        if let Some(run) = self.search.run {
            config.run = run;
        }

        Ok(config)
    }
}

// ── TOML Parsing ────────────────────────────────────────────────

/// Parse a TOML string and apply it over `base`.
///
/// Bounds are not cross-checked: an inverted or empty range is a legal
/// configuration, and CLI flags may still be layered on top.
pub fn parse_toml(content: &str, base: SearchConfig) -> Result<SearchConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    file.apply(base)
}

/// Parse a TOML file and apply it over `base`.
pub fn parse_toml_file(path: &Path, base: SearchConfig) -> Result<SearchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_toml(&content, base).with_context(|| format!("parsing config file {}", path.display()))
}
