//! Tax calculation (13% VAT in Nepal).

use rust_decimal::Decimal;

use crate::config::PricingRules;
use crate::models::AuditStep;

/// The result of a tax calculation.
#[derive(Debug, Clone)]
pub struct TaxResult {
    /// The tax amount, unrounded.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the configured tax rate to the pre-tax total.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_tax;
/// use rental_pricing::config::PricingConfig;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let result = calculate_tax(Decimal::from(3500), config.rules(), 1);
/// assert_eq!(result.amount, Decimal::from(455));
/// ```
pub fn calculate_tax(pre_tax_total: Decimal, rules: &PricingRules, step_number: u32) -> TaxResult {
    let rate = rules.tax.rate;
    let amount = pre_tax_total * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vat".to_string(),
        rule_name: rules.tax.name.clone(),
        rule_ref: "tax".to_string(),
        input: serde_json::json!({
            "pre_tax_total": pre_tax_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}: {} × {} = {}",
            rules.tax.name,
            pre_tax_total.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    TaxResult { amount, audit_step }
}
