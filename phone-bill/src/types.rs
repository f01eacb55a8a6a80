/// Monetary amounts.
pub mod money;

pub(crate) mod number;

/// Phone number identifiers as found in a call log.
pub mod phone;

/// Call timestamps and billed durations.
pub mod time;
