//! Final total rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RoundingPolicy;

/// Rounds an amount to a whole currency unit under the given policy.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::round_total;
/// use rental_pricing::config::RoundingPolicy;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(46895, 1); // 4689.5
/// assert_eq!(round_total(amount, RoundingPolicy::HalfUp), Decimal::from(4690));
/// assert_eq!(round_total(amount, RoundingPolicy::HalfEven), Decimal::from(4690));
/// ```
pub fn round_total(amount: Decimal, policy: RoundingPolicy) -> Decimal {
    let strategy = match policy {
        RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
    };
    amount.round_dp_with_strategy(0, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_up_rounds_midpoints_up() {
        assert_eq!(round_total(dec("4690.5"), RoundingPolicy::HalfUp), dec("4691"));
        assert_eq!(round_total(dec("4689.5"), RoundingPolicy::HalfUp), dec("4690"));
        assert_eq!(round_total(dec("0.5"), RoundingPolicy::HalfUp), dec("1"));
    }

    #[test]
    fn test_half_even_rounds_midpoints_to_even() {
        assert_eq!(round_total(dec("4690.5"), RoundingPolicy::HalfEven), dec("4690"));
        assert_eq!(round_total(dec("4689.5"), RoundingPolicy::HalfEven), dec("4690"));
        assert_eq!(round_total(dec("0.5"), RoundingPolicy::HalfEven), dec("0"));
    }

    #[test]
    fn test_non_midpoints_round_to_nearest() {
        for policy in [RoundingPolicy::HalfUp, RoundingPolicy::HalfEven] {
            assert_eq!(round_total(dec("3954.49"), policy), dec("3954"));
            assert_eq!(round_total(dec("3954.51"), policy), dec("3955"));
            assert_eq!(round_total(dec("7119"), policy), dec("7119"));
        }
    }
}
