//! Number formatting for money and quantities.

/// Format a rupee amount with Indian digit grouping:
/// 35000000 -> "₹3,50,00,000".
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as i64;
    let digits = rounded.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Head groups by two digits, right to left.
        let mut parts = Vec::new();
        let head_chars: Vec<char> = head.chars().collect();
        let mut idx = head_chars.len();
        while idx > 0 {
            let start = idx.saturating_sub(2);
            parts.push(head_chars[start..idx].iter().collect::<String>());
            idx = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-\u{20B9}{}", grouped)
    } else {
        format!("\u{20B9}{}", grouped)
    }
}

/// One-decimal tons label used by the trend summaries.
pub fn format_tons(value: f64) -> String {
    format!("{:.1} tons", value)
}

/// Signed one-decimal label for variances.
pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_uses_indian_grouping() {
        assert_eq!(format_inr(35_000_000.0), "\u{20B9}3,50,00,000");
        assert_eq!(format_inr(50_000_000.0), "\u{20B9}5,00,00,000");
        assert_eq!(format_inr(999.0), "\u{20B9}999");
        assert_eq!(format_inr(1_000.0), "\u{20B9}1,000");
        assert_eq!(format_inr(100_000.0), "\u{20B9}1,00,000");
    }

    #[test]
    fn signed_labels_carry_their_sign() {
        assert_eq!(format_signed(4.26), "+4.3");
        assert_eq!(format_signed(-3.0), "-3.0");
        assert_eq!(format_signed(0.0), "+0.0");
    }
}
