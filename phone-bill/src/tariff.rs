use std::ops::Range;

use rust_decimal_macros::dec;
use serde::Serialize;

use crate::{
    call::CallRecord,
    types::{
        money::Money,
        time::{CallTimestamp, Minutes},
    },
    Error, Result,
};

/// The part of the day a call was started in, which decides its minute price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePeriod {
    /// Started inside the peak window.
    Peak,
    /// Started outside the peak window.
    OffPeak,
}

/// The rating of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallCost {
    /// The period the call was started in.
    pub period: RatePeriod,
    /// The billed minutes.
    pub minutes: Minutes,
    /// The price of the call.
    pub cost: Money,
}

/// Pricing policy for calls.
///
/// A call is priced per started minute. The minute price is decided once by the hour the call
/// started in, a call running into or out of the peak window keeps the price of its start. Every
/// minute after a threshold is billed at a reduced price instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    peak_hours: Range<u32>,
    peak_rate: Money,
    off_peak_rate: Money,
    reduced_rate: Money,
    reduced_after: Minutes,
}

impl Tariff {
    /// The tariff used for all phone bills: peak hours from 08:00 until 16:00 at 1.0 per minute,
    /// 0.5 per minute otherwise and 0.2 for every minute after the fifth.
    pub fn standard() -> Self {
        Self {
            peak_hours: 8..16,
            peak_rate: dec!(1.0).into(),
            off_peak_rate: dec!(0.5).into(),
            reduced_rate: dec!(0.2).into(),
            reduced_after: Minutes::from(5),
        }
    }

    /// The hours of the day, as a half-open range, that are peak hours.
    pub fn peak_hours(&self) -> Range<u32> {
        self.peak_hours.clone()
    }

    /// The minute price for calls started in `period`.
    pub fn minute_rate(&self, period: RatePeriod) -> Money {
        match period {
            RatePeriod::Peak => self.peak_rate,
            RatePeriod::OffPeak => self.off_peak_rate,
        }
    }

    /// The minute price for every minute after [`Self::reduced_after`].
    pub fn reduced_rate(&self) -> Money {
        self.reduced_rate
    }

    /// The amount of minutes billed at the full rate before the reduced rate applies.
    pub fn reduced_after(&self) -> Minutes {
        self.reduced_after
    }

    /// The rate period of a call started at `start`.
    pub fn period(&self, start: CallTimestamp) -> RatePeriod {
        if self.peak_hours.contains(&start.hour()) {
            RatePeriod::Peak
        } else {
            RatePeriod::OffPeak
        }
    }

    /// Price a single call, regardless of the number it dialed.
    pub fn cost(&self, call: &CallRecord) -> Result<CallCost> {
        let minutes = call.duration_minutes()?;
        let period = self.period(call.start);
        let rate = self.minute_rate(period);

        let cost = if minutes > self.reduced_after {
            let reduced = minutes.saturating_sub(self.reduced_after);
            (rate * self.reduced_after)
                .checked_add(self.reduced_rate * reduced)
                .ok_or(Error::NumericOverflow)?
        } else {
            rate * minutes
        };

        Ok(CallCost {
            period,
            minutes,
            cost,
        })
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
