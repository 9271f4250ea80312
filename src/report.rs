//! # Report — Printing Search Results
//!
//! Plain output is the header line `Found Perfect Numbers:` followed by one
//! decimal value per line. JSON output carries the exponent, digit count and
//! Mersenne factor of each value; big integers are written as decimal strings
//! so no consumer has to parse numbers wider than 64 bits.

use anyhow::Result;
use rug::Integer;
use serde::Serialize;
use std::io::{self, Write};

use crate::search::PerfectNumber;

pub const HEADER: &str = "Found Perfect Numbers:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize)]
struct JsonReport {
    count: usize,
    perfect_numbers: Vec<JsonEntry>,
}

#[derive(Serialize)]
struct JsonEntry {
    exponent: String,
    digits: u64,
    mersenne: String,
    value: String,
}

/// Write the header and one value per line.
pub fn write_plain<W: Write>(out: &mut W, numbers: &[Integer]) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for n in numbers {
        writeln!(out, "{}", n)?;
    }
    Ok(())
}

/// Write a pretty-printed JSON document followed by a newline.
pub fn write_json<W: Write>(out: &mut W, numbers: &[PerfectNumber]) -> Result<()> {
    let report = JsonReport {
        count: numbers.len(),
        perfect_numbers: numbers
            .iter()
            .map(|pn| JsonEntry {
                exponent: pn.exponent.to_string(),
                digits: pn.digits,
                mersenne: pn.mersenne.to_string(),
                value: pn.value.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Print the plain report to standard output.
pub fn display_perfect_numbers(numbers: &[Integer]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_plain(&mut lock, numbers)?;
    lock.flush()
}

/// Print `numbers` to standard output in the chosen format.
pub fn display(numbers: &[PerfectNumber], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let values: Vec<Integer> = numbers.iter().map(|pn| pn.value.clone()).collect();
            display_perfect_numbers(&values)?;
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_json(&mut lock, numbers)?;
            lock.flush()?;
        }
    }
    Ok(())
}
