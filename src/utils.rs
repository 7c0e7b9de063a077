/// Round a monetary amount to exactly 2 decimal places.
/// Applied after every arithmetic step so displayed and compared
/// values stay exact to the cent.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_exact_values() {
        assert_eq!(round2(1.25), 1.25);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_round2_removes_drift() {
        // 0.1 + 0.2 is the classic binary float drift case
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(1.005000001), 1.01);
    }

    #[test]
    fn test_round2_negative_amounts() {
        assert_eq!(round2(-1.504999), -1.5);
        assert_eq!(round2(-0.005000001), -0.01);
    }

    #[test]
    fn test_format_currency_positive() {
        assert_eq!(format_currency(1.5), "$1.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(6.25), "$6.25");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-0.75), "-$0.75");
    }

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Juice Box", 20), "Juice Box");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("A very long item name indeed", 12);
        assert_eq!(result, "A very lo...");
        assert!(result.len() <= 12);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 10), "");
    }
}
