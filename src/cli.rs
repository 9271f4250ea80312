//! # CLI Execution
//!
//! Extracted from `main.rs` to keep the entry point slim: layers the
//! configuration sources, runs the search and prints the report.

use anyhow::Result;
use perfect_hunter::{config, report, search, SearchConfig};
use tracing::info;

use super::Cli;

/// Resolve the configuration: flags over the TOML file over the base.
///
/// Without `--config` the base is the fixed entry-point search; with a file
/// it is the library defaults, so the file reads like a complete description.
pub fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading search config");
            config::parse_toml_file(path, SearchConfig::default())?
        }
        None => SearchConfig::entry_point(),
    };

    if let Some(v) = &cli.min_value {
        config.perfect_min = v.clone();
    }
    if let Some(v) = &cli.max_value {
        config.perfect_max = v.clone();
    }
    if let Some(d) = cli.min_digits {
        config.perfect_min_digits = d;
    }
    if let Some(d) = cli.max_digits {
        config.perfect_max_digits = d;
    }
    if let Some(v) = &cli.min_exp {
        config.exponent_min = v.clone();
    }
    if let Some(v) = &cli.max_exp {
        config.exponent_max = v.clone();
    }
    if let Some(d) = cli.min_mersenne_digits {
        config.mersenne_min_digits = d;
    }
    if let Some(d) = cli.max_mersenne_digits {
        config.mersenne_max_digits = d;
    }
    if let Some(limit) = cli.limit {
        config.result_limit = limit;
    }
    if cli.require_mersenne_prime {
        config.require_mersenne_prime = true;
    }

    Ok(config)
}

/// Build the configuration, search, and print the report to stdout.
pub fn run_search(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let outcome = search::search(&config)?;
    report::display(&outcome.numbers, cli.format)
}
