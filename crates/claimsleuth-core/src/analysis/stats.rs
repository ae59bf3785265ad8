/// Quick stats — headline numbers for the summary panel.
use super::dates::{date_range, DateRange};
use super::error_types::unique_error_types;
use super::officers::unique_officers;
use crate::model::ClaimTable;

#[derive(Debug, Clone, PartialEq)]
pub struct QuickStats {
    pub total_claims: usize,
    pub unique_officers: usize,
    pub unique_error_types: usize,
    pub column_count: usize,
    pub date_range: Option<DateRange>,
}

pub fn quick_stats(table: &ClaimTable) -> QuickStats {
    QuickStats {
        total_claims: table.len(),
        unique_officers: unique_officers(table),
        unique_error_types: unique_error_types(table),
        column_count: table.column_count(),
        date_range: date_range(table),
    }
}
