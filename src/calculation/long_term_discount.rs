//! Long-term discount calculation.
//!
//! Longer rentals earn a percentage off the base subtotal. Tiers are mutually
//! exclusive: the tier with the highest threshold the rental reaches wins.

use rust_decimal::Decimal;

use crate::config::{DiscountTier, PricingRules};
use crate::models::AuditStep;

/// The result of applying the long-term discount.
#[derive(Debug, Clone)]
pub struct LongTermDiscountResult {
    /// The discount percentage applied (0 when no tier is reached).
    pub percentage: Decimal,
    /// The amount taken off the subtotal.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the tier a rental of `days` falls into, if any.
///
/// `tiers` may be in any order.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::discount_tier_for;
/// use rental_pricing::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let tiers = &config.rules().long_term_discounts;
///
/// assert_eq!(discount_tier_for(2, tiers), None);
/// assert_eq!(discount_tier_for(3, tiers).map(|t| t.percentage), Some(Decimal::from(5)));
/// assert_eq!(discount_tier_for(29, tiers).map(|t| t.percentage), Some(Decimal::from(15)));
/// assert_eq!(discount_tier_for(30, tiers).map(|t| t.percentage), Some(Decimal::from(25)));
/// ```
pub fn discount_tier_for(days: u32, tiers: &[DiscountTier]) -> Option<&DiscountTier> {
    tiers
        .iter()
        .filter(|tier| days >= tier.min_days)
        .max_by_key(|tier| tier.min_days)
}

/// Calculates the long-term discount on a rental's base subtotal.
///
/// | days | discount |
/// |---|---|
/// | 30 or more | 25% |
/// | 14 to 29 | 15% |
/// | 7 to 13 | 10% |
/// | 3 to 6 | 5% |
/// | under 3 | none |
///
/// (values from the shipped Nepal configuration)
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_long_term_discount;
/// use rental_pricing::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let result = calculate_long_term_discount(7, Decimal::from(7000), config.rules(), 1);
///
/// assert_eq!(result.percentage, Decimal::from(10));
/// assert_eq!(result.amount, Decimal::from(700));
/// ```
pub fn calculate_long_term_discount(
    days: u32,
    subtotal: Decimal,
    rules: &PricingRules,
    step_number: u32,
) -> LongTermDiscountResult {
    let tier = discount_tier_for(days, &rules.long_term_discounts);

    let (percentage, min_days) = match tier {
        Some(tier) => (tier.percentage, Some(tier.min_days)),
        None => (Decimal::ZERO, None),
    };
    let amount = subtotal * percentage / Decimal::ONE_HUNDRED;

    let reasoning = match min_days {
        Some(min_days) => format!(
            "{} days reaches the {}+ day tier: {}% of {} = {}",
            days,
            min_days,
            percentage.normalize(),
            subtotal.normalize(),
            amount.normalize()
        ),
        None => format!("{} days is below every discount tier: no discount", days),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "long_term_discount".to_string(),
        rule_name: "Long-Term Discount".to_string(),
        rule_ref: "long_term_discounts".to_string(),
        input: serde_json::json!({
            "days": days,
            "subtotal": subtotal.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier_min_days": min_days,
            "percentage": percentage.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    LongTermDiscountResult {
        percentage,
        amount,
        audit_step,
    }
}
