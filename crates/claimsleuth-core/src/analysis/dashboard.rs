/// The full derived view of one claim table.
///
/// `Dashboard::compute` is the single entry point the UI and the report
/// exporter use. It holds no reference to the table, so a snapshot can be
/// built, rendered and dropped within one frame.
use super::counts::ValueCount;
use super::country::count_by_country;
use super::error_types::count_by_error_type;
use super::financial::{financial_impact, FinancialImpact};
use super::officers::{officer_summaries, OfficerSummary};
use super::stats::{quick_stats, QuickStats};
use crate::model::ClaimTable;
use crate::tips::{prevention_tips, PreventionTip};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_claims: usize,
    /// Officer table rows, highest error count first.
    pub officers: Vec<OfficerSummary>,
    /// Top error types, highest count first.
    pub error_types: Vec<ValueCount>,
    /// Tips for the top three error types that have one.
    pub tips: Vec<PreventionTip>,
    /// `None` when `Payment_Amount` is absent.
    pub financial: Option<FinancialImpact>,
    /// `None` when `Country_of_Treatment` is absent.
    pub countries: Option<Vec<ValueCount>>,
    pub stats: QuickStats,
}

impl Dashboard {
    /// Recompute every aggregate from scratch.
    pub fn compute(table: &ClaimTable) -> Self {
        let error_types = count_by_error_type(table);
        let tips = prevention_tips(&error_types);
        Self {
            total_claims: table.len(),
            officers: officer_summaries(table),
            error_types,
            tips,
            financial: financial_impact(table),
            countries: count_by_country(table),
            stats: quick_stats(table),
        }
    }

    /// Officer error counts in display order, as `(officer, count)`.
    pub fn officer_counts(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.officers.iter().map(|o| (o.officer.as_str(), o.errors))
    }
}
