use crate::tariff::{RatePeriod, Tariff};

#[derive(Debug)]
pub struct Explain {
    pub lines: Vec<String>,
}

/// Explain the given tariff in plain sentences.
pub fn explain(tariff: &Tariff) -> Explain {
    let mut lines = Vec::new();
    let peak_hours = tariff.peak_hours();

    lines.push(format!(
        "calls started between {:02}:00 and {:02}:00 cost {} per minute",
        peak_hours.start,
        peak_hours.end,
        tariff.minute_rate(RatePeriod::Peak)
    ));

    lines.push(format!(
        "calls started at any other time cost {} per minute",
        tariff.minute_rate(RatePeriod::OffPeak)
    ));

    lines.push(format!(
        "every minute after the first {} costs {}",
        tariff.reduced_after(),
        tariff.reduced_rate()
    ));

    lines.push("a started minute is billed as a full minute".to_owned());
    lines.push(
        "calls to the most called number are free, ties go to the greatest number".to_owned(),
    );

    Explain { lines }
}

#[cfg(test)]
mod tests {
    use super::explain;
    use crate::tariff::Tariff;

    #[test]
    fn explains_standard_tariff() {
        let explain = explain(&Tariff::standard());

        assert_eq!(
            explain.lines[..3],
            [
                "calls started between 08:00 and 16:00 cost 1.0 per minute",
                "calls started at any other time cost 0.5 per minute",
                "every minute after the first 5 costs 0.2",
            ]
        );
        assert_eq!(explain.lines.len(), 5);
    }
}
