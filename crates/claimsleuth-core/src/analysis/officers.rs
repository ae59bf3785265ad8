/// Officer analysis — error counts, share of total, and each officer's
/// most common error type.
use super::counts::{distinct, value_counts, ValueCount};
use crate::model::ClaimTable;
use compact_str::CompactString;
use std::collections::HashMap;

/// One row of the officer performance table.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficerSummary {
    pub officer: CompactString,
    pub errors: u64,
    /// Share of all claims, 0.0 – 100.0.
    pub percent: f64,
    pub most_common_error: CompactString,
}

/// Error counts per officer, highest first.
pub fn count_by_officer(table: &ClaimTable) -> Vec<ValueCount> {
    value_counts(table.iter().map(|r| r.officer.as_str()))
}

/// `count` as a percentage of `total`. Zero when the table is empty.
pub fn percent_of_total(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// The most frequent error type among one officer's claims.
///
/// Ties resolve to the lexicographically smallest error type. Returns
/// `None` when the officer has no claims in the table.
pub fn modal_error_type(table: &ClaimTable, officer: &str) -> Option<CompactString> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in table.iter().filter(|r| r.officer == officer) {
        *counts.entry(record.error_type.as_str()).or_default() += 1;
    }
    mode(&counts).map(CompactString::new)
}

/// Highest count wins; equal counts go to the smaller string.
fn mode<'a>(counts: &HashMap<&'a str, u64>) -> Option<&'a str> {
    counts
        .iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(v, _)| *v)
}

/// Build the officer performance table in [`count_by_officer`] order.
///
/// Error types are grouped per officer in a single pass rather than
/// rescanning the table for every officer.
pub fn officer_summaries(table: &ClaimTable) -> Vec<OfficerSummary> {
    let total = table.len() as u64;

    let mut per_officer: HashMap<&str, HashMap<&str, u64>> = HashMap::new();
    for record in table {
        *per_officer
            .entry(record.officer.as_str())
            .or_default()
            .entry(record.error_type.as_str())
            .or_default() += 1;
    }

    count_by_officer(table)
        .into_iter()
        .map(|vc| {
            let most_common_error = per_officer
                .get(vc.value.as_str())
                .and_then(mode)
                .map(CompactString::new)
                .unwrap_or_default();
            OfficerSummary {
                percent: percent_of_total(vc.count, total),
                errors: vc.count,
                officer: vc.value,
                most_common_error,
            }
        })
        .collect()
}

/// Number of distinct officers.
pub fn unique_officers(table: &ClaimTable) -> usize {
    distinct(table.iter().map(|r| r.officer.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimRecord;

    fn table(rows: &[(&str, &str)]) -> ClaimTable {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        for (officer, error) in rows {
            t.push(ClaimRecord::new(*officer, *error));
        }
        t
    }

    #[test]
    fn counts_and_percentages_for_small_table() {
        let t = table(&[("A", "X"), ("A", "Y"), ("B", "X")]);
        let summaries = officer_summaries(&t);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].officer, "A");
        assert_eq!(summaries[0].errors, 2);
        assert_eq!(format!("{:.1}", summaries[0].percent), "66.7");
        assert_eq!(summaries[1].officer, "B");
        assert_eq!(summaries[1].errors, 1);
        assert_eq!(format!("{:.1}", summaries[1].percent), "33.3");
    }

    #[test]
    fn officer_counts_sum_to_row_count() {
        let t = table(&[
            ("A", "X"),
            ("B", "Y"),
            ("C", "X"),
            ("A", "Z"),
            ("B", "X"),
            ("A", "X"),
        ]);
        let sum: u64 = count_by_officer(&t).iter().map(|c| c.count).sum();
        assert_eq!(sum, t.len() as u64);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let t = table(&[("A", "X"), ("B", "X"), ("C", "X"), ("C", "Y"), ("D", "X")]);
        let total: f64 = officer_summaries(&t).iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9, "got {total}");
    }

    #[test]
    fn percent_of_empty_total_is_zero() {
        assert_eq!(percent_of_total(0, 0), 0.0);
        assert_eq!(percent_of_total(1, 4), 25.0);
    }

    #[test]
    fn modal_error_type_picks_most_frequent() {
        let t = table(&[("A", "Y"), ("A", "X"), ("A", "X"), ("B", "Y")]);
        assert_eq!(modal_error_type(&t, "A").as_deref(), Some("X"));
        assert_eq!(modal_error_type(&t, "B").as_deref(), Some("Y"));
    }

    /// Equal frequencies resolve to the lexicographically smallest label,
    /// regardless of which appeared first.
    #[test]
    fn modal_error_type_tie_is_lexicographic() {
        let t = table(&[("A", "Wrong_Plan"), ("A", "Data_Entry")]);
        assert_eq!(modal_error_type(&t, "A").as_deref(), Some("Data_Entry"));

        let summaries = officer_summaries(&t);
        assert_eq!(summaries[0].most_common_error, "Data_Entry");
    }

    #[test]
    fn modal_error_type_unknown_officer_is_none() {
        let t = table(&[("A", "X")]);
        assert_eq!(modal_error_type(&t, "Z"), None);
    }

    #[test]
    fn empty_table_has_no_officers() {
        let t = table(&[]);
        assert!(count_by_officer(&t).is_empty());
        assert!(officer_summaries(&t).is_empty());
        assert_eq!(unique_officers(&t), 0);
    }
}
