//! # Main — CLI Entry Point
//!
//! With no arguments the binary runs the fixed search: perfect numbers in
//! [1000, 100000] from exponents 2..=10, at most five, printed to stdout.
//!
//! ## Options
//!
//! - `--config` / `PERFECT_CONFIG`: TOML file applied over the library defaults.
//! - Bound overrides (`--min-value`, `--max-exp`, `--limit`, ...), each also
//!   readable from a `PERFECT_*` environment variable. Flags win over the file.
//! - `--format plain|json`: report layout on stdout.
//!
//! Logs go to stderr: human-readable by default, JSON with `LOG_FORMAT=json`,
//! filtered by `RUST_LOG` (default `info`).

mod cli;

use anyhow::Result;
use clap::Parser;
use perfect_hunter::report::OutputFormat;
use rug::Integer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "perfect-hunter",
    about = "Enumerate even perfect numbers from Mersenne exponents"
)]
struct Cli {
    /// TOML file with [perfect], [mersenne] and [search] sections
    #[arg(long, env = "PERFECT_CONFIG")]
    config: Option<PathBuf>,

    /// Smallest perfect number to accept
    #[arg(long, env = "PERFECT_MIN_VALUE", value_parser = parse_integer, allow_hyphen_values = true)]
    min_value: Option<Integer>,

    /// Largest perfect number to accept
    #[arg(long, env = "PERFECT_MAX_VALUE", value_parser = parse_integer, allow_hyphen_values = true)]
    max_value: Option<Integer>,

    /// Minimum perfect-number digit count (0 or less to disable)
    #[arg(long, env = "PERFECT_MIN_DIGITS", allow_hyphen_values = true)]
    min_digits: Option<i64>,

    /// Maximum perfect-number digit count (0 or less to disable)
    #[arg(long, env = "PERFECT_MAX_DIGITS", allow_hyphen_values = true)]
    max_digits: Option<i64>,

    /// First exponent p to test; always examined, even above --max-exp
    #[arg(long, env = "PERFECT_MIN_EXP", value_parser = parse_integer, allow_hyphen_values = true)]
    min_exp: Option<Integer>,

    /// Last exponent p to test
    #[arg(long, env = "PERFECT_MAX_EXP", value_parser = parse_integer, allow_hyphen_values = true)]
    max_exp: Option<Integer>,

    /// Minimum digit count of 2^p - 1
    #[arg(long, env = "PERFECT_MIN_MERSENNE_DIGITS", allow_hyphen_values = true)]
    min_mersenne_digits: Option<i64>,

    /// Maximum digit count of 2^p - 1
    #[arg(long, env = "PERFECT_MAX_MERSENNE_DIGITS", allow_hyphen_values = true)]
    max_mersenne_digits: Option<i64>,

    /// Stop after this many perfect numbers (0 or less for no cap)
    #[arg(long, env = "PERFECT_LIMIT", allow_hyphen_values = true)]
    limit: Option<i64>,

    /// Also trial-test 2^p - 1 and skip exponents where it is composite.
    /// Trial division is only practical up to p = 43; above that, keep
    /// --max-mersenne-digits at 13 or less or expect hours per exponent
    #[arg(long, env = "PERFECT_REQUIRE_MERSENNE_PRIME")]
    require_mersenne_prime: bool,

    /// Report layout on stdout
    #[arg(long, value_enum, env = "PERFECT_FORMAT", default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

fn parse_integer(s: &str) -> std::result::Result<Integer, String> {
    s.trim()
        .parse::<Integer>()
        .map_err(|e| format!("'{}' is not a decimal integer: {}", s, e))
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize structured logging: LOG_FORMAT=json for log shippers, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::run_search(&cli)
}
