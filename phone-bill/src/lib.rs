//! # Phone bill library
//!
//! Functionality to calculate the total cost of the calls in a call log. Parse a log with
//! [`call::parse`] and use the [`pricer::Pricer`] to perform the actual calculation, or use
//! [`calculate`] to do both in one go.

use std::fmt;

/// Call records and the parser for call logs.
pub mod call;

/// Selection of the most called number, whose calls are free.
pub mod exemption;

/// Module for generating a human readable tariff.
pub mod explain;

/// Module containing the functionality to price a set of calls.
pub mod pricer;

/// The pricing policy for a single call.
pub mod tariff;

/// Numeric, time and identifier types used for parsing and pricing calls.
pub mod types;

use pricer::Pricer;
use tariff::Tariff;
use types::money::Money;

type Result<T> = std::result::Result<T, Error>;

/// Possible errors when parsing or pricing a call log.
#[derive(Debug)]
pub enum Error {
    /// A line of the log does not consist of exactly three comma separated fields.
    MalformedRecord {
        /// The 1-based line number in the log.
        line: usize,
        /// The amount of fields found on the line.
        fields: usize,
    },
    /// A timestamp does not match the `dd-MM-yyyy HH:mm:ss` layout.
    InvalidTimestamp {
        /// The 1-based line number in the log.
        line: usize,
        /// The offending field.
        value: String,
    },
    /// A call ends before it starts.
    InvertedTimestamps {
        /// The 1-based line number in the log.
        line: usize,
    },
    /// A numeric overflow occurred while summing the total.
    NumericOverflow,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { line, fields } => write!(
                f,
                "Line {line} has {fields} field(s), expected a number, a start and an end time"
            ),
            Self::InvalidTimestamp { line, value } => write!(
                f,
                "Line {line} has timestamp `{value}` which is not in the `dd-MM-yyyy HH:mm:ss` layout"
            ),
            Self::InvertedTimestamps { line } => {
                write!(f, "The call on line {line} ends before it starts")
            }
            Self::NumericOverflow => f.write_str("A numeric overflow occurred during bill calculation"),
        }
    }
}

/// Something that turns a raw call log into the total amount to be billed.
pub trait BillCalculator {
    /// Calculate the total cost of all the calls in `log`.
    fn calculate(&self, log: &str) -> Result<Money>;
}

impl BillCalculator for Tariff {
    fn calculate(&self, log: &str) -> Result<Money> {
        let calls = call::parse(log)?;
        let report = Pricer::with_tariff(&calls, self.clone()).build_report()?;

        Ok(report.total_cost)
    }
}

/// Calculate the total cost of all the calls in `log` using [`Tariff::standard`].
pub fn calculate(log: &str) -> Result<Money> {
    Tariff::standard().calculate(log)
}
