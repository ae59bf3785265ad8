/// Error-type ranking — the most frequent error labels.
use super::counts::{distinct, value_counts, ValueCount};
use crate::model::ClaimTable;

/// Length of the error-type ranking shown in the bar chart.
pub const TOP_ERROR_TYPES: usize = 10;

/// The [`TOP_ERROR_TYPES`] most frequent error types, highest first.
pub fn count_by_error_type(table: &ClaimTable) -> Vec<ValueCount> {
    let mut counts = value_counts(table.iter().map(|r| r.error_type.as_str()));
    counts.truncate(TOP_ERROR_TYPES);
    counts
}

/// Number of distinct error types across the whole table.
pub fn unique_error_types(table: &ClaimTable) -> usize {
    distinct(table.iter().map(|r| r.error_type.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimRecord;

    fn table_with_errors(errors: &[&str]) -> ClaimTable {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        for e in errors {
            t.push(ClaimRecord::new("A", *e));
        }
        t
    }

    #[test]
    fn small_table_ranking() {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        t.push(ClaimRecord::new("A", "X"));
        t.push(ClaimRecord::new("A", "Y"));
        t.push(ClaimRecord::new("B", "X"));

        let ranking = count_by_error_type(&t);
        let pairs: Vec<(&str, u64)> = ranking.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(pairs, [("X", 2), ("Y", 1)]);
    }

    /// Fifteen distinct types: only ten survive and they are non-increasing.
    #[test]
    fn ranking_truncated_to_ten_and_sorted() {
        let labels: Vec<String> = (0..15).map(|i| format!("E{i:02}")).collect();
        let mut errors = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            for _ in 0..(i % 4 + 1) {
                errors.push(label.as_str());
            }
        }
        let t = table_with_errors(&errors);

        let ranking = count_by_error_type(&t);
        assert_eq!(ranking.len(), TOP_ERROR_TYPES);
        assert!(ranking.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(unique_error_types(&t), 15);
    }

    #[test]
    fn ranking_shorter_than_ten_when_few_types() {
        let t = table_with_errors(&["X", "Y", "Y"]);
        assert_eq!(count_by_error_type(&t).len(), 2);
    }

    #[test]
    fn empty_table_ranking_is_empty() {
        let t = table_with_errors(&[]);
        assert!(count_by_error_type(&t).is_empty());
        assert_eq!(unique_error_types(&t), 0);
    }
}
