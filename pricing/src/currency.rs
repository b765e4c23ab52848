//! Currency display formatting

/// Format an amount of minor currency units as a US-dollar string.
///
/// All arithmetic stays in integers; the decimal point only ever exists in
/// the final string, so large amounts never lose precision. Negative
/// amounts (refunds) render with a leading sign.
///
/// # Examples
/// ```
/// use smartflo_pricing::format_currency;
///
/// assert_eq!(format_currency(1234), "$12.34");
/// assert_eq!(format_currency(-500), "-$5.00");
/// assert_eq!(format_currency(123_456_789), "$1,234,567.89");
/// ```
#[must_use]
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let minor = abs % 100;
    format!("{sign}${}.{minor:02}", group_thousands(dollars))
}

/// Insert a comma every three digits, counting from the right
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_amounts() {
        assert_eq!(format_currency(1234), "$12.34");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(99), "$0.99");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-500), "-$5.00");
        assert_eq!(format_currency(-1), "-$0.01");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(100_000), "$1,000.00");
        assert_eq!(format_currency(123_456_789), "$1,234,567.89");
        assert_eq!(format_currency(99_999), "$999.99");
    }

    #[test]
    fn test_extreme_values_keep_precision() {
        assert_eq!(format_currency(i64::MAX), "$92,233,720,368,547,758.07");
        assert_eq!(format_currency(i64::MIN + 1), "-$92,233,720,368,547,758.07");
    }
}
