/// Financial impact — total and average payment amounts.
///
/// Empty `Payment_Amount` cells are skipped by both the sum and the mean.
use crate::model::ClaimTable;

/// Payment totals for the financial impact panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialImpact {
    /// Sum of all non-missing amounts (0.0 when there are none).
    pub total: f64,
    /// Mean of all non-missing amounts; `None` when there are none.
    pub average: Option<f64>,
    /// Number of claims that carried an amount.
    pub priced_claims: usize,
}

fn amounts(table: &ClaimTable) -> impl Iterator<Item = f64> + '_ {
    table.iter().filter_map(|r| r.payment_amount)
}

/// Sum of `Payment_Amount`, or `None` when the column is absent.
pub fn payment_total(table: &ClaimTable) -> Option<f64> {
    table.has_payment_amount.then(|| amounts(table).sum())
}

/// Mean of `Payment_Amount`, or `None` when the column is absent or holds
/// no values.
pub fn payment_mean(table: &ClaimTable) -> Option<f64> {
    if !table.has_payment_amount {
        return None;
    }
    let (sum, n) = amounts(table).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Both payment figures, or `None` when the column is absent.
pub fn financial_impact(table: &ClaimTable) -> Option<FinancialImpact> {
    let total = payment_total(table)?;
    Some(FinancialImpact {
        total,
        average: payment_mean(table),
        priced_claims: amounts(table).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimRecord;

    fn priced_table(amounts: &[Option<f64>]) -> ClaimTable {
        let mut t = ClaimTable::new(vec![
            "Officer".into(),
            "Error_Type".into(),
            "Payment_Amount".into(),
        ]);
        for a in amounts {
            let mut r = ClaimRecord::new("A", "X");
            r.payment_amount = *a;
            t.push(r);
        }
        t
    }

    #[test]
    fn total_and_mean() {
        let t = priced_table(&[Some(100.0), Some(250.5), Some(49.5)]);
        let impact = financial_impact(&t).unwrap();
        assert!((impact.total - 400.0).abs() < 1e-9);
        assert!((impact.average.unwrap() - 400.0 / 3.0).abs() < 1e-9);
        assert_eq!(impact.priced_claims, 3);
    }

    #[test]
    fn missing_cells_are_skipped() {
        let t = priced_table(&[Some(10.0), None, Some(30.0)]);
        assert_eq!(payment_total(&t), Some(40.0));
        assert_eq!(payment_mean(&t), Some(20.0));
    }

    #[test]
    fn absent_column_omits_section() {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        t.push(ClaimRecord::new("A", "X"));
        assert_eq!(financial_impact(&t), None);
        assert_eq!(payment_total(&t), None);
        assert_eq!(payment_mean(&t), None);
    }

    /// Column present but no rows: total is zero, average is undefined.
    #[test]
    fn empty_column_has_zero_total_no_average() {
        let t = priced_table(&[]);
        let impact = financial_impact(&t).unwrap();
        assert_eq!(impact.total, 0.0);
        assert_eq!(impact.average, None);
        assert_eq!(impact.priced_claims, 0);
    }
}
