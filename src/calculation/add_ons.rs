//! Optional service pricing: hired driver and insurance.

use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::AuditStep;

/// The result of pricing the optional services.
#[derive(Debug, Clone)]
pub struct AddOnsResult {
    /// Price of the hired driver (0 when not requested).
    pub driver_cost: Decimal,
    /// Price of insurance cover (0 when not requested).
    pub insurance_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices the driver and insurance add-ons at a flat rate per billed day.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_add_ons;
/// use rental_pricing::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let result = calculate_add_ons(5, true, true, config.rules(), 1);
///
/// assert_eq!(result.driver_cost, Decimal::from(7500));
/// assert_eq!(result.insurance_cost, Decimal::from(2500));
/// ```
pub fn calculate_add_ons(
    days: u32,
    with_driver: bool,
    with_insurance: bool,
    rules: &PricingRules,
    step_number: u32,
) -> AddOnsResult {
    let billed_days = Decimal::from(days);
    let rates = &rules.add_ons;

    let driver_cost = if with_driver {
        billed_days * rates.driver_per_day
    } else {
        Decimal::ZERO
    };
    let insurance_cost = if with_insurance {
        billed_days * rates.insurance_per_day
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "add_ons".to_string(),
        rule_name: "Optional Services".to_string(),
        rule_ref: "add_ons".to_string(),
        input: serde_json::json!({
            "days": days,
            "with_driver": with_driver,
            "with_insurance": with_insurance
        }),
        output: serde_json::json!({
            "driver_per_day": rates.driver_per_day.normalize().to_string(),
            "insurance_per_day": rates.insurance_per_day.normalize().to_string(),
            "driver_cost": driver_cost.normalize().to_string(),
            "insurance_cost": insurance_cost.normalize().to_string()
        }),
        reasoning: format!(
            "Driver: {}, insurance: {} over {} days",
            driver_cost.normalize(),
            insurance_cost.normalize(),
            days
        ),
    };

    AddOnsResult {
        driver_cost,
        insurance_cost,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;

    #[test]
    fn test_no_add_ons() {
        let config = PricingConfig::default();
        let result = calculate_add_ons(5, false, false, config.rules(), 1);

        assert_eq!(result.driver_cost, Decimal::ZERO);
        assert_eq!(result.insurance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_driver_only() {
        let config = PricingConfig::default();
        let result = calculate_add_ons(3, true, false, config.rules(), 1);

        assert_eq!(result.driver_cost, Decimal::from(4500));
        assert_eq!(result.insurance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_insurance_only() {
        let config = PricingConfig::default();
        let result = calculate_add_ons(30, false, true, config.rules(), 1);

        assert_eq!(result.driver_cost, Decimal::ZERO);
        assert_eq!(result.insurance_cost, Decimal::from(15000));
    }

    #[test]
    fn test_zero_days_costs_nothing() {
        let config = PricingConfig::default();
        let result = calculate_add_ons(0, true, true, config.rules(), 1);

        assert_eq!(result.driver_cost, Decimal::ZERO);
        assert_eq!(result.insurance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_has_correct_information() {
        let config = PricingConfig::default();
        let result = calculate_add_ons(5, true, true, config.rules(), 7);

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "add_ons");
        assert_eq!(result.audit_step.input["with_driver"], true);
        assert_eq!(result.audit_step.output["driver_cost"], "7500");
        assert_eq!(result.audit_step.output["insurance_cost"], "2500");
    }
}
