use log::debug;
use serde::Serialize;

use crate::{
    call::CallRecord,
    exemption::exempt_number,
    tariff::{CallCost, RatePeriod, Tariff},
    types::{
        money::Money,
        phone::PhoneNumber,
        time::{CallTimestamp, Minutes},
    },
    Error, Result,
};

/// Pricer that encapsulates a set of calls and the tariff to price them with.
/// To run the pricer call `build_report`. The resulting report contains the total and a breakdown
/// per call.
///
/// ```
/// use phone_bill::{call, pricer::Pricer};
///
/// let calls = call::parse("420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57").unwrap();
/// let report = Pricer::new(&calls).build_report().unwrap();
///
/// // A single call is always to the most called number.
/// assert!(report.total_cost.is_zero());
/// ```
pub struct Pricer<'a> {
    calls: &'a [CallRecord],
    tariff: Tariff,
}

impl<'a> Pricer<'a> {
    /// Instantiate the pricer with the standard tariff.
    pub fn new(calls: &'a [CallRecord]) -> Self {
        Self::with_tariff(calls, Tariff::standard())
    }

    /// Instantiate the pricer with a specific tariff.
    pub fn with_tariff(calls: &'a [CallRecord], tariff: Tariff) -> Self {
        Self { calls, tariff }
    }

    /// Price every call and build a report containing the results.
    ///
    /// The exempt number is settled over all calls before any call is priced. Calls to it are
    /// still rated, so a malformed exempt call fails the report just like any other.
    pub fn build_report(&self) -> Result<Report> {
        let exempt_number = exempt_number(self.calls);

        let mut calls = Vec::with_capacity(self.calls.len());
        let mut total_minutes = Minutes::zero();
        let mut total_cost = Money::zero();

        for call in self.calls {
            let CallCost {
                period,
                minutes,
                cost,
            } = self.tariff.cost(call)?;

            let exempt = exempt_number == Some(call.number);

            let cost = if exempt {
                Money::zero()
            } else {
                total_minutes = total_minutes.saturating_add(minutes);
                total_cost = total_cost
                    .checked_add(cost)
                    .ok_or(Error::NumericOverflow)?;
                cost
            };

            calls.push(CallReport {
                line: call.line,
                number: call.number,
                start: call.start,
                end: call.end,
                minutes,
                period,
                exempt,
                cost,
            });
        }

        debug!(
            "priced {} call(s), exempt number {:?}, total {total_cost}",
            calls.len(),
            exempt_number
        );

        Ok(Report {
            exempt_number,
            calls,
            total_minutes,
            total_cost,
        })
    }
}

/// The total cost of `calls` under the standard tariff.
pub fn total_cost(calls: &[CallRecord]) -> Result<Money> {
    Ok(Pricer::new(calls).build_report()?.total_cost)
}

/// Structure containing a set of calls priced according to a tariff.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The most called number, whose calls are free. `None` when there were no calls.
    pub exempt_number: Option<PhoneNumber>,
    /// Details per call, in log order.
    pub calls: Vec<CallReport>,
    /// The billed minutes of all calls that are not exempt.
    pub total_minutes: Minutes,
    /// The sum of the cost of all calls.
    pub total_cost: Money,
}

/// A report for a single call.
#[derive(Debug, Serialize)]
pub struct CallReport {
    /// The line of the log the call was read from.
    pub line: usize,
    /// The dialed number.
    pub number: PhoneNumber,
    /// The start of the call.
    pub start: CallTimestamp,
    /// The end of the call.
    pub end: CallTimestamp,
    /// The billed minutes, rounded up.
    pub minutes: Minutes,
    /// The period that decided the minute price.
    pub period: RatePeriod,
    /// Whether this call was to the exempt number.
    pub exempt: bool,
    /// The price of this call, zero when `exempt`.
    pub cost: Money,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{total_cost, Pricer};
    use crate::{
        call::parse,
        tariff::RatePeriod,
        types::{money::Money, phone::PhoneNumber, time::Minutes},
        Error,
    };

    #[test]
    fn most_called_number_is_free() {
        let calls = parse(
            "100,01-01-2020 18:00:00,01-01-2020 18:02:00\n\
             100,02-01-2020 19:00:00,02-01-2020 19:02:00\n\
             200,03-01-2020 10:00:00,03-01-2020 10:10:00\n\
             100,04-01-2020 20:00:00,04-01-2020 20:02:00",
        )
        .unwrap();

        assert_eq!(total_cost(&calls).unwrap(), Money::from(dec!(6.0)));
    }

    #[test]
    fn empty_log_costs_nothing() {
        let report = Pricer::new(&[]).build_report().unwrap();

        assert!(report.total_cost.is_zero());
        assert_eq!(report.exempt_number, None);
        assert!(report.calls.is_empty());
    }

    #[test]
    fn tied_numbers_exempt_the_greatest() {
        let calls = parse(
            "420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57\n\
             420776562353,18-01-2020 08:59:20,18-01-2020 09:10:00",
        )
        .unwrap();

        let report = Pricer::new(&calls).build_report().unwrap();

        assert_eq!(
            report.exempt_number,
            Some(PhoneNumber::from(420_776_562_353))
        );
        assert_eq!(report.total_cost, Money::from(dec!(1.5)));
    }

    #[test]
    fn unknown_number_is_billed_like_any_other() {
        let calls = parse(
            "n/a,01-01-2020 10:00:00,01-01-2020 10:06:00\n\
             100,01-01-2020 18:00:00,01-01-2020 18:01:00\n\
             100,02-01-2020 18:00:00,02-01-2020 18:01:00",
        )
        .unwrap();

        let report = Pricer::new(&calls).build_report().unwrap();

        assert_eq!(report.exempt_number, Some(PhoneNumber::from(100)));
        assert_eq!(report.calls[0].number, PhoneNumber::UNKNOWN);
        assert_eq!(report.total_cost, Money::from(dec!(5.2)));
    }

    #[test]
    fn report_breaks_down_every_call() {
        let calls = parse(
            "100,01-01-2020 07:59:59,01-01-2020 08:01:00\n\
             100,01-01-2020 12:00:00,01-01-2020 12:00:30\n\
             200,01-01-2020 08:00:00,01-01-2020 08:07:00",
        )
        .unwrap();

        let report = Pricer::new(&calls).build_report().unwrap();

        assert_eq!(report.calls.len(), 3);

        let first = &report.calls[0];
        assert!(first.exempt);
        assert_eq!(first.period, RatePeriod::OffPeak);
        assert_eq!(first.minutes, Minutes::from(2));
        assert!(first.cost.is_zero());

        let last = &report.calls[2];
        assert!(!last.exempt);
        assert_eq!(last.line, 3);
        assert_eq!(last.period, RatePeriod::Peak);
        assert_eq!(last.minutes, Minutes::from(7));
        assert_eq!(last.cost, Money::from(dec!(5.4)));

        assert_eq!(report.total_minutes, Minutes::from(7));
        assert_eq!(report.total_cost, Money::from(dec!(5.4)));
    }

    #[test]
    fn inverted_call_fails_the_report() {
        let calls = parse(
            "100,01-01-2020 10:00:00,01-01-2020 10:01:00\n\
             200,01-01-2020 10:05:00,01-01-2020 10:00:00",
        )
        .unwrap();

        let err = Pricer::new(&calls).build_report().unwrap_err();
        assert!(matches!(err, Error::InvertedTimestamps { line: 2 }));
    }

    #[test]
    fn report_serializes_to_json() {
        let calls = parse(
            "100,01-01-2020 10:00:00,01-01-2020 10:06:00\n\
             200,01-01-2020 18:00:00,01-01-2020 18:01:00",
        )
        .unwrap();

        let report = Pricer::new(&calls).build_report().unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["exempt_number"], 200);
        assert_eq!(json["total_minutes"], 6);
        assert_eq!(json["calls"][0]["start"], "01-01-2020 10:00:00");
        assert_eq!(json["calls"][0]["period"], "peak");
        assert_eq!(json["calls"][1]["period"], "off_peak");
        assert_eq!(json["calls"][1]["exempt"], true);
        assert_eq!(json["total_cost"].to_string(), "5.2");
    }
}
