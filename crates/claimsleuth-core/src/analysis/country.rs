/// Error counts by country of treatment.
use super::counts::{value_counts, ValueCount};
use crate::model::ClaimTable;

/// Claims per `Country_of_Treatment`, highest first.
///
/// Returns `None` when the column is absent. Rows with an empty country
/// are not counted.
pub fn count_by_country(table: &ClaimTable) -> Option<Vec<ValueCount>> {
    if !table.has_country {
        return None;
    }
    Some(value_counts(
        table.iter().filter_map(|r| r.country.as_deref()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimRecord;

    #[test]
    fn counts_countries() {
        let mut t = ClaimTable::new(vec![
            "Officer".into(),
            "Error_Type".into(),
            "Country_of_Treatment".into(),
        ]);
        t.push(ClaimRecord::new("A", "X").with_country("Kenya"));
        t.push(ClaimRecord::new("A", "X").with_country("Ghana"));
        t.push(ClaimRecord::new("B", "X").with_country("Ghana"));
        t.push(ClaimRecord::new("B", "X"));

        let counts = count_by_country(&t).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].value, "Ghana");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].value, "Kenya");
    }

    #[test]
    fn absent_column_is_none() {
        let t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        assert_eq!(count_by_country(&t), None);
    }
}
