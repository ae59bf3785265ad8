/// Invoice date range.
use crate::model::ClaimTable;
use chrono::NaiveDate;
use std::fmt;

/// Earliest and latest invoice dates in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// The (min, max) of `Date_of_Invoice`.
///
/// `None` when the column is absent or every cell is empty. Unparseable
/// dates never reach this point: they fail the load.
pub fn date_range(table: &ClaimTable) -> Option<DateRange> {
    if !table.has_invoice_date {
        return None;
    }
    let mut dates = table.iter().filter_map(|r| r.invoice_date);
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimRecord;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_table(dates: &[Option<NaiveDate>]) -> ClaimTable {
        let mut t = ClaimTable::new(vec![
            "Officer".into(),
            "Error_Type".into(),
            "Date_of_Invoice".into(),
        ]);
        for d in dates {
            let mut r = ClaimRecord::new("A", "X");
            r.invoice_date = *d;
            t.push(r);
        }
        t
    }

    #[test]
    fn range_spans_min_and_max() {
        let t = dated_table(&[
            Some(ymd(2024, 5, 2)),
            None,
            Some(ymd(2023, 12, 31)),
            Some(ymd(2024, 1, 15)),
        ]);
        let range = date_range(&t).unwrap();
        assert_eq!(range.start, ymd(2023, 12, 31));
        assert_eq!(range.end, ymd(2024, 5, 2));
        assert_eq!(range.to_string(), "2023-12-31 to 2024-05-02");
    }

    #[test]
    fn all_empty_is_none() {
        assert_eq!(date_range(&dated_table(&[None, None])), None);
        assert_eq!(date_range(&dated_table(&[])), None);
    }

    #[test]
    fn absent_column_is_none() {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        t.push(ClaimRecord::new("A", "X").with_invoice_date(ymd(2024, 1, 1)));
        assert_eq!(date_range(&t), None);
    }
}
