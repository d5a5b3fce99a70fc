//! Formatting helpers shared by the display modules

use rust_decimal::Decimal;

use crate::models::Currency;

/// Format an amount with its currency symbol, e.g. `NT$ 12,345.5`
///
/// Amounts are rounded to two decimal places and trailing zeros dropped.
pub fn format_money(amount: Decimal, currency: &Currency) -> String {
    format!("{} {}", currency.symbol(), group_thousands(amount))
}

/// Format a base-currency amount
pub fn format_base(amount: Decimal) -> String {
    format_money(amount, &Currency::default())
}

fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Percentage label with one decimal place, not clamped
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Progress bar of `width` cells filled to `pct` (0-100)
pub fn format_bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from(3125), &Currency::Twd), "NT$ 3,125");
        assert_eq!(
            format_money(Decimal::new(1234567, 1), &Currency::Usd),
            "$ 123,456.7"
        );
        assert_eq!(format_money(Decimal::from(-1875), &Currency::Twd), "NT$ -1,875");
        assert_eq!(format_money(Decimal::from(999), &Currency::Hkd), "HK$ 999");
        assert_eq!(
            format_money(Decimal::new(5, 0), &Currency::from_code("GBP")),
            "GBP 5"
        );
    }

    #[test]
    fn test_format_money_rounds() {
        let third = Decimal::from(10) / Decimal::new(3, 0);
        assert_eq!(format_base(third), "NT$ 3.33");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(62.5), "62.5%");
        assert_eq!(format_percentage(150.0), "150.0%");
    }

    #[test]
    fn test_format_bar_clamps() {
        let bar = format_bar(150.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 10);

        let bar = format_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("午餐便當加飲料", 5), "午餐...");
        assert_eq!(truncate("Hi", 5), "Hi");
    }
}
