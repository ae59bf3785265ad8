/// Report text layout.
use crate::analysis::Dashboard;
use chrono::NaiveDateTime;

/// Number of officers listed under "TOP OFFICERS WITH ERRORS".
pub const REPORT_TOP_OFFICERS: usize = 5;

const TITLE: &str = "CLAIM QUALITY ANALYSIS REPORT";
const BANNER_WIDTH: usize = 50;

/// Build the report text. Lines are joined with `\n`; there is no
/// trailing newline.
///
/// Officers come from the same ordered counts as the officer chart and
/// recommendations reuse the dashboard's prevention tips.
pub fn build_report(dashboard: &Dashboard, generated_at: NaiveDateTime) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(8 + REPORT_TOP_OFFICERS + dashboard.tips.len());

    lines.push(TITLE.to_string());
    lines.push("=".repeat(BANNER_WIDTH));
    lines.push(format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M")));
    lines.push(format!("Claims Analyzed: {}", dashboard.total_claims));

    lines.push(String::new());
    lines.push("TOP OFFICERS WITH ERRORS:".to_string());
    for (officer, count) in dashboard.officer_counts().take(REPORT_TOP_OFFICERS) {
        lines.push(format!("  • {officer}: {count} errors"));
    }

    lines.push(String::new());
    lines.push("RECOMMENDATIONS:".to_string());
    for tip in &dashboard.tips {
        lines.push(format!("  • {}: {}", tip.error_type, tip.tip));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimRecord, ClaimTable};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample_dashboard() -> Dashboard {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        let rows = [
            ("Ann", "Data_Entry"),
            ("Ann", "Wrong_Plan"),
            ("Ben", "Data_Entry"),
            ("Cat", "Typo"),
            ("Ann", "Data_Entry"),
        ];
        for (o, e) in rows {
            t.push(ClaimRecord::new(o, e));
        }
        Dashboard::compute(&t)
    }

    #[test]
    fn report_layout() {
        let text = build_report(&sample_dashboard(), at(9, 5, 42));
        let expected = "CLAIM QUALITY ANALYSIS REPORT\n\
            ==================================================\n\
            Generated: 2026-10-19 09:05\n\
            Claims Analyzed: 5\n\
            \n\
            TOP OFFICERS WITH ERRORS:\n\
            \x20 • Ann: 3 errors\n\
            \x20 • Ben: 1 errors\n\
            \x20 • Cat: 1 errors\n\
            \n\
            RECOMMENDATIONS:\n\
            \x20 • Data_Entry: Add double-check verification step\n\
            \x20 • Wrong_Plan: Real-time plan verification system";
        assert_eq!(text, expected);
    }

    #[test]
    fn officers_capped_at_five() {
        let mut t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        for i in 0..8 {
            t.push(ClaimRecord::new(format!("O{i}"), "X"));
        }
        let text = build_report(&Dashboard::compute(&t), at(0, 0, 0));
        assert_eq!(text.matches(" errors").count(), REPORT_TOP_OFFICERS);
    }

    /// Two exports of unchanged data differ only on the timestamp line.
    #[test]
    fn repeat_exports_differ_only_in_timestamp() {
        let d = sample_dashboard();
        let a = build_report(&d, at(9, 5, 0));
        let b = build_report(&d, at(17, 45, 0));
        let diff: Vec<(&str, &str)> = a
            .lines()
            .zip(b.lines())
            .filter(|(x, y)| x != y)
            .collect();
        assert_eq!(diff.len(), 1);
        assert!(diff[0].0.starts_with("Generated: "));
        assert_eq!(a.lines().count(), b.lines().count());
    }

    #[test]
    fn seconds_are_not_printed() {
        let text = build_report(&sample_dashboard(), at(23, 59, 59));
        assert!(text.contains("Generated: 2026-10-19 23:59\n"));
    }

    /// Tip text carries no bullet of its own: one `•` per recommendation.
    #[test]
    fn recommendation_lines_have_one_bullet() {
        let text = build_report(&sample_dashboard(), at(9, 0, 0));
        let recs: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != "RECOMMENDATIONS:")
            .skip(1)
            .collect();
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|l| l.matches('•').count() == 1), "{recs:?}");
        assert_eq!(recs[0], "  • Data_Entry: Add double-check verification step");
    }

    #[test]
    fn empty_dashboard_still_has_sections() {
        let t = ClaimTable::new(vec!["Officer".into(), "Error_Type".into()]);
        let text = build_report(&Dashboard::compute(&t), at(12, 0, 0));
        assert!(text.contains("Claims Analyzed: 0"));
        assert!(text.ends_with("RECOMMENDATIONS:"));
    }
}
