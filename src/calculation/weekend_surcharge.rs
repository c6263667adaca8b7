//! Weekend surcharge calculation.
//!
//! Weekend days in the rental span carry a premium on their proportional
//! share of the base subtotal.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::AuditStep;

use super::count_weekend_days;

/// The result of a weekend surcharge calculation.
#[derive(Debug, Clone)]
pub struct WeekendSurchargeResult {
    /// Saturdays and Sundays from start to end, both included.
    pub weekend_days: u32,
    /// The surcharge amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the weekend surcharge for a rental.
///
/// `surcharge = (weekend_days / days) × subtotal × rate`, where `subtotal` is
/// the base subtotal before the long-term discount.
///
/// Weekend days are counted over the inclusive date range, so the count can
/// exceed the billed days (Saturday to Sunday is one billed day but touches
/// two weekend dates). The ratio is not capped.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_weekend_surcharge;
/// use rental_pricing::config::PricingConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// // Thursday to Saturday: 2 billed days, 1 weekend day
/// let start = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
///
/// let result = calculate_weekend_surcharge(start, end, 2, Decimal::from(2000), config.rules(), 1);
/// assert_eq!(result.weekend_days, 1);
/// assert_eq!(result.amount, Decimal::from(150));
/// ```
pub fn calculate_weekend_surcharge(
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u32,
    subtotal: Decimal,
    rules: &PricingRules,
    step_number: u32,
) -> WeekendSurchargeResult {
    let weekend_days = count_weekend_days(start_date, end_date);
    let rate = rules.weekend_surcharge.rate;

    let amount = if weekend_days == 0 || days == 0 {
        Decimal::ZERO
    } else {
        subtotal * Decimal::from(weekend_days) / Decimal::from(days) * rate
    };

    let reasoning = if weekend_days == 0 {
        format!(
            "No Saturday or Sunday between {} and {}: no surcharge",
            start_date, end_date
        )
    } else {
        format!(
            "{} weekend of {} billed days: ({} / {}) × {} × {} = {}",
            weekend_days,
            days,
            weekend_days,
            days,
            subtotal.normalize(),
            rate.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_surcharge".to_string(),
        rule_name: "Weekend Surcharge".to_string(),
        rule_ref: "weekend_surcharge".to_string(),
        input: serde_json::json!({
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "days": days,
            "subtotal": subtotal.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekend_days": weekend_days,
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    WeekendSurchargeResult {
        weekend_days,
        amount,
        audit_step,
    }
}
