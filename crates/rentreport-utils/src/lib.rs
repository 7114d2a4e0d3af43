//! Formatting helpers shared by the report crates

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimal places, rounding half away from zero
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Escape text for safe inclusion in HTML element content and attributes
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_money_pads() {
        assert_eq!(format_money(Decimal::from(250)), "250.00");
        assert_eq!(format_money(Decimal::from_str("12.5").unwrap()), "12.50");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_money_rounds_half_up() {
        assert_eq!(format_money(Decimal::from_str("1.005").unwrap()), "1.01");
        assert_eq!(format_money(Decimal::from_str("2.344").unwrap()), "2.34");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>Tent & \"Co\"</b>"), "&lt;b&gt;Tent &amp; &quot;Co&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
