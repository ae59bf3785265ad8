/// Prevention tips — a fixed table of advice keyed by error type.
///
/// The table is static; only error types listed here ever get a tip.
use crate::analysis::ValueCount;
use compact_str::CompactString;

/// How many of the top-ranked error types are considered for tips.
pub const TOP_TIPS: usize = 3;

/// Error type label → one-line prevention suggestion.
pub const TIPS: [(&str, &str); 7] = [
    ("Wrong_Currency", "Implement auto-currency validation"),
    ("Data_Entry", "Add double-check verification step"),
    ("Missing_Referral", "Require referral documents before processing"),
    ("Wrong_Plan", "Real-time plan verification system"),
    ("Duplicate_Invoice", "Invoice duplicate checker"),
    ("Wrong_Diagnosis", "Diagnosis-treatment matching tool"),
    ("Currency_Mismatch", "Automated currency calculator"),
];

/// A tip matched to one of the top error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreventionTip {
    pub error_type: CompactString,
    pub tip: &'static str,
}

/// Look up the tip for an error type (exact, case-sensitive match).
pub fn tip_for(error_type: &str) -> Option<&'static str> {
    TIPS.iter()
        .find(|(label, _)| *label == error_type)
        .map(|(_, tip)| *tip)
}

/// Tips for the first [`TOP_TIPS`] entries of an error-type ranking.
///
/// Ranked types without a tip are skipped, not replaced by lower-ranked
/// ones, so the result holds at most three tips.
pub fn prevention_tips(ranking: &[ValueCount]) -> Vec<PreventionTip> {
    ranking
        .iter()
        .take(TOP_TIPS)
        .filter_map(|vc| {
            tip_for(&vc.value).map(|tip| PreventionTip {
                error_type: vc.value.clone(),
                tip,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(labels: &[&str]) -> Vec<ValueCount> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| ValueCount {
                value: CompactString::new(l),
                count: (labels.len() - i) as u64,
            })
            .collect()
    }

    #[test]
    fn known_label_has_tip() {
        assert_eq!(tip_for("Data_Entry"), Some("Add double-check verification step"));
        assert_eq!(tip_for("data_entry"), None);
        assert_eq!(tip_for("Unknown"), None);
    }

    #[test]
    fn only_top_three_are_considered() {
        let tips = prevention_tips(&ranked(&[
            "Wrong_Plan",
            "Data_Entry",
            "Wrong_Currency",
            "Duplicate_Invoice",
        ]));
        let labels: Vec<&str> = tips.iter().map(|t| t.error_type.as_str()).collect();
        assert_eq!(labels, ["Wrong_Plan", "Data_Entry", "Wrong_Currency"]);
    }

    /// An untipped type in the top three leaves a gap rather than pulling
    /// in the fourth-ranked type.
    #[test]
    fn untipped_types_are_skipped_without_backfill() {
        let tips = prevention_tips(&ranked(&[
            "Data_Entry",
            "Typo",
            "Wrong_Plan",
            "Wrong_Currency",
        ]));
        let labels: Vec<&str> = tips.iter().map(|t| t.error_type.as_str()).collect();
        assert_eq!(labels, ["Data_Entry", "Wrong_Plan"]);
    }

    #[test]
    fn empty_ranking_has_no_tips() {
        assert!(prevention_tips(&[]).is_empty());
    }
}
