/// Display formatting helpers — counts, currency and percentages.
///
/// All aggregation happens on raw numbers. Strings are only produced at
/// the display boundary, so the UI and the report share one set of rules.

/// Insert `,` thousand separators into a run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a claim count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    group_thousands(&count.to_string())
}

/// Format a monetary amount as `$12,345.67`.
///
/// Negative amounts keep the sign after the currency symbol (`$-5.00`).
/// Non-finite values render as `n/a`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // Rounding can turn a tiny negative into "0.00"; don't print "-0.00".
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("${sign}{}.{cents}", group_thousands(whole))
}

/// Format a percentage with one decimal place, e.g. `66.7%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency_small() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1500.0), "$-1,500.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "n/a");
        assert_eq!(format_currency(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(200.0 / 3.0), "66.7%");
        assert_eq!(format_percent(100.0 / 3.0), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
