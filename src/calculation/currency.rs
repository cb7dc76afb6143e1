//! Currency rounding and display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use shipping_quote::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(1285, 3)), Decimal::new(129, 2));
/// assert_eq!(round_currency(Decimal::new(1284, 3)), Decimal::new(128, 2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as US dollars: `$1,234.56`.
pub fn format_usd(amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.2829190125")), dec("1.28"));
        assert_eq!(round_currency(dec("1.104")), dec("1.10"));
        assert_eq!(round_currency(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_format_small_amount() {
        assert_eq!(format_usd(dec("1.28")), "$1.28");
        assert_eq!(format_usd(dec("0")), "$0.00");
        assert_eq!(format_usd(dec("1.1")), "$1.10");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_usd(dec("1234.5")), "$1,234.50");
        assert_eq!(format_usd(dec("999999.999")), "$1,000,000.00");
        assert_eq!(format_usd(dec("100")), "$100.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_usd(dec("-12.345")), "-$12.35");
    }
}
