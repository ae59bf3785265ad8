/// Frequency counting shared by the officer, error-type and country views.
use compact_str::CompactString;
use std::collections::HashMap;

/// One distinct value and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: CompactString,
    pub count: u64,
}

/// Count occurrences of each distinct value, sorted by count descending.
///
/// Values with equal counts keep the order in which they were first seen,
/// because the final sort is stable.
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();

    for value in values {
        let slot = *slots.entry(value).or_insert_with(|| {
            counts.push(ValueCount {
                value: CompactString::new(value),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Number of distinct values.
pub fn distinct<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().collect::<std::collections::HashSet<_>>().len()
}
