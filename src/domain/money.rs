/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so $10.00 = 1000 cents.
pub type Cents = i64;

/// Format cents as a fixed-point currency amount.
/// Example: 1500 -> "15.00", -50 -> "-0.50"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Sum a sequence of prices. Returns `None` if the total does not fit in `Cents`.
pub fn total_cents<I>(prices: I) -> Option<Cents>
where
    I: IntoIterator<Item = Cents>,
{
    prices
        .into_iter()
        .try_fold(0 as Cents, |total, price| total.checked_add(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1500), "15.00");
        assert_eq!(format_cents(1300), "13.00");
        assert_eq!(format_cents(50), "0.50");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-1250), "-12.50");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_format_cents_extremes() {
        assert_eq!(format_cents(i64::MIN), "-92233720368547758.08");
        assert_eq!(format_cents(i64::MAX), "92233720368547758.07");
    }

    #[test]
    fn test_total_cents() {
        assert_eq!(total_cents([]), Some(0));
        assert_eq!(total_cents([1000, 500]), Some(1500));
        assert_eq!(total_cents([1000, -200]), Some(800));
    }

    #[test]
    fn test_total_cents_overflow() {
        assert_eq!(total_cents([i64::MAX, 1]), None);
        assert_eq!(total_cents([i64::MIN, -1]), None);
        assert_eq!(total_cents([i64::MAX, 1, -1]), None);
        assert_eq!(total_cents([i64::MAX, -1, 1]), Some(i64::MAX));
    }
}
