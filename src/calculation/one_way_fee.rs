//! One-way rental fee.

use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::{AuditStep, RentalRequest};

/// The result of a one-way fee check.
#[derive(Debug, Clone)]
pub struct OneWayFeeResult {
    /// The fee charged (0 for a round trip).
    pub amount: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Charges the flat one-way fee when the car is returned elsewhere.
///
/// Uses [`RentalRequest::is_one_way`]: both locations filled in and not
/// exactly equal.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_one_way_fee;
/// use rental_pricing::config::PricingConfig;
/// use rental_pricing::models::RentalRequest;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let request = RentalRequest {
///     start_date: None,
///     end_date: None,
///     pickup_location: "Kathmandu".to_string(),
///     dropoff_location: "Pokhara".to_string(),
///     daily_rate: Decimal::from(1000),
///     with_driver: false,
///     with_insurance: false,
/// };
///
/// let result = calculate_one_way_fee(&request, config.rules(), 1);
/// assert_eq!(result.amount, Decimal::from(2000));
/// ```
pub fn calculate_one_way_fee(
    request: &RentalRequest,
    rules: &PricingRules,
    step_number: u32,
) -> OneWayFeeResult {
    let one_way = request.is_one_way();
    let amount = if one_way {
        rules.one_way_fee
    } else {
        Decimal::ZERO
    };

    let reasoning = if one_way {
        format!(
            "Pickup '{}' differs from drop-off '{}': one-way fee {}",
            request.pickup_location,
            request.dropoff_location,
            amount.normalize()
        )
    } else {
        "Car returned to its pickup location: no one-way fee".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "one_way_fee".to_string(),
        rule_name: "One-Way Fee".to_string(),
        rule_ref: "one_way_fee".to_string(),
        input: serde_json::json!({
            "pickup_location": request.pickup_location,
            "dropoff_location": request.dropoff_location
        }),
        output: serde_json::json!({
            "one_way": one_way,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    OneWayFeeResult { amount, audit_step }
}
