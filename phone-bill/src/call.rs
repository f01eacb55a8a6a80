use log::{debug, warn};

use crate::{
    types::{
        phone::PhoneNumber,
        time::{CallTimestamp, Minutes},
    },
    Error, Result,
};

const FIELD_SEPARATOR: char = ',';

/// A single call taken from a line of a call log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// The 1-based line of the log this call was read from.
    pub line: usize,
    /// The dialed number, [`PhoneNumber::UNKNOWN`] if the log contained something else than a
    /// number.
    pub number: PhoneNumber,
    /// The moment the call started.
    pub start: CallTimestamp,
    /// The moment the call ended.
    pub end: CallTimestamp,
}

impl CallRecord {
    pub fn new(line: usize, number: PhoneNumber, start: CallTimestamp, end: CallTimestamp) -> Self {
        Self {
            line,
            number,
            start,
            end,
        }
    }

    /// The billed length of this call in whole minutes, rounded up.
    ///
    /// Fails with [`Error::InvertedTimestamps`] if the call ends before it starts.
    pub fn duration_minutes(&self) -> Result<Minutes> {
        Minutes::from_duration_ceil(self.end.signed_duration_since(self.start))
            .ok_or(Error::InvertedTimestamps { line: self.line })
    }
}

/// Parse a call log into its calls, in the order they appear.
///
/// Every line holds one call as `<number>,<dd-MM-yyyy HH:mm:ss>,<dd-MM-yyyy HH:mm:ss>`. Blank lines
/// are skipped. Any line with another amount of fields, or with a timestamp in another layout,
/// fails the whole log. A number that can't be parsed is billed as [`PhoneNumber::UNKNOWN`].
pub fn parse(log: &str) -> Result<Vec<CallRecord>> {
    let mut calls = Vec::new();

    for (index, row) in log.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }

        calls.push(parse_record(index + 1, row)?);
    }

    debug!("parsed {} call(s) from log", calls.len());

    Ok(calls)
}

fn parse_record(line: usize, row: &str) -> Result<CallRecord> {
    let fields: Vec<&str> = row.split(FIELD_SEPARATOR).map(str::trim).collect();

    let &[number, start, end] = fields.as_slice() else {
        return Err(Error::MalformedRecord {
            line,
            fields: fields.len(),
        });
    };

    let number = number.parse().unwrap_or_else(|_| {
        warn!(
            "line {line}: number `{number}` is not numeric, billing it as {}",
            PhoneNumber::UNKNOWN
        );
        PhoneNumber::UNKNOWN
    });

    Ok(CallRecord::new(
        line,
        number,
        parse_timestamp(line, start)?,
        parse_timestamp(line, end)?,
    ))
}

fn parse_timestamp(line: usize, value: &str) -> Result<CallTimestamp> {
    value.parse().map_err(|_| Error::InvalidTimestamp {
        line,
        value: value.to_owned(),
    })
}
