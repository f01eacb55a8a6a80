use std::collections::HashMap;

use crate::{call::CallRecord, types::phone::PhoneNumber};

/// Count how many calls were made to each number.
pub fn count_calls(calls: &[CallRecord]) -> HashMap<PhoneNumber, usize> {
    let mut counts = HashMap::new();

    for call in calls {
        *counts.entry(call.number).or_insert(0) += 1;
    }

    counts
}

/// Pick the most called number from per-number call counts. A tie between numbers called equally
/// often goes to the numerically greatest number.
pub fn most_called(counts: &HashMap<PhoneNumber, usize>) -> Option<PhoneNumber> {
    counts
        .iter()
        .max_by_key(|&(&number, &count)| (count, number))
        .map(|(&number, _)| number)
}

/// The number whose calls are free: the most called number of `calls`, `None` if there are no
/// calls at all.
pub fn exempt_number(calls: &[CallRecord]) -> Option<PhoneNumber> {
    most_called(&count_calls(calls))
}
