//! Currency display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest daily rate the engine prices (one billion currency units).
///
/// Keeps every intermediate amount of a breakdown far inside `Decimal`'s
/// range, whatever the rental length.
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Formats an amount for display with the market's currency symbol.
///
/// The integer part is grouped in thousands. Fractional amounts are shown
/// to at most two places, without trailing zeros.
///
/// # Example
///
/// ```
/// use rental_pricing::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(3955), "रू"), "रू 3,955");
/// assert_eq!(format_currency(Decimal::new(5395, 1), "रू"), "रू 539.5");
/// ```
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{} {}{}.{}", symbol, sign, grouped, fraction),
        None => format!("{} {}{}", symbol, sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(dec("0"), "रू"), "रू 0");
        assert_eq!(format_currency(dec("955"), "रू"), "रू 955");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_currency(dec("3955"), "रू"), "रू 3,955");
        assert_eq!(format_currency(dec("22374"), "रू"), "रू 22,374");
        assert_eq!(format_currency(dec("1234567"), "रू"), "रू 1,234,567");
    }

    #[test]
    fn test_trailing_zeros_are_dropped() {
        assert_eq!(format_currency(dec("7119.00"), "रू"), "रू 7,119");
        assert_eq!(format_currency(dec("539.50"), "रू"), "रू 539.5");
    }

    #[test]
    fn test_fraction_is_limited_to_two_places() {
        assert_eq!(format_currency(dec("428.5714"), "रू"), "रू 428.57");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(dec("-2000"), "NPR"), "NPR -2,000");
    }
}
