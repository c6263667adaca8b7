//! Full price breakdown for a rental request.
//!
//! Runs every pricing rule in order and assembles the itemized
//! [`PriceBreakdown`] together with its audit trace:
//!
//! 1. billed days
//! 2. base subtotal
//! 3. long-term discount
//! 4. weekend surcharge
//! 5. one-way fee
//! 6. add-ons
//! 7. tax
//! 8. rounded total

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PricingConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, MAX_DAILY_RATE, PriceBreakdown, PriceQuote,
    RentalRequest, format_currency,
};

use super::{
    calculate_add_ons, calculate_long_term_discount, calculate_one_way_fee, calculate_rental_days,
    calculate_tax, calculate_weekend_surcharge, round_total,
};

/// A price breakdown together with the trace of how it was reached.
#[derive(Debug, Clone)]
pub struct BreakdownCalculation {
    /// The itemized price.
    pub breakdown: PriceBreakdown,
    /// Every rule applied, in order, plus any warnings.
    pub audit_trace: AuditTrace,
}

/// Prices a rental request.
///
/// This is a pure function of its inputs: calling it twice with the same
/// request and configuration yields the same breakdown. It never fails.
/// When either date is missing, or the daily rate is larger in magnitude
/// than [`MAX_DAILY_RATE`], the placeholder breakdown (`days == 0`, every
/// amount zero) is returned with a warning.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_price_breakdown;
/// use rental_pricing::config::PricingConfig;
/// use rental_pricing::models::RentalRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::default();
/// let request = RentalRequest {
///     start_date: NaiveDate::from_ymd_opt(2024, 12, 2), // Monday
///     end_date: NaiveDate::from_ymd_opt(2024, 12, 3),
///     pickup_location: "Kathmandu".to_string(),
///     dropoff_location: "Kathmandu".to_string(),
///     daily_rate: Decimal::from(3500),
///     with_driver: false,
///     with_insurance: false,
/// };
///
/// let result = calculate_price_breakdown(&request, &config);
/// assert_eq!(result.breakdown.days, 1);
/// assert_eq!(result.breakdown.tax, Decimal::from(455));
/// assert_eq!(result.breakdown.total, Decimal::from(3955));
/// ```
pub fn calculate_price_breakdown(
    request: &RentalRequest,
    config: &PricingConfig,
) -> BreakdownCalculation {
    let start_time = Instant::now();
    let rules = config.rules();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings = location_warnings(request, config);
    let mut step_number: u32 = 1;

    let duration = calculate_rental_days(request.start_date, request.end_date, step_number);
    let days = duration.days;
    steps.push(duration.audit_step);
    step_number += 1;

    let Some((start_date, end_date)) = request.dates().filter(|_| days > 0) else {
        warnings.push(AuditWarning::new(
            "DATES_MISSING",
            "Start and end dates are both needed to price a rental",
            "low",
        ));
        debug!(daily_rate = %request.daily_rate, "Dates missing, returning empty breakdown");
        return empty_calculation(request, steps, warnings, start_time);
    };

    if request.daily_rate.abs() > MAX_DAILY_RATE {
        warnings.push(AuditWarning::new(
            "RATE_OUT_OF_RANGE",
            format!(
                "Daily rate {} exceeds the largest priceable rate {}",
                request.daily_rate, MAX_DAILY_RATE
            ),
            "high",
        ));
        debug!(daily_rate = %request.daily_rate, "Rate out of range, returning empty breakdown");
        return empty_calculation(request, steps, warnings, start_time);
    }

    if duration.clamped {
        warnings.push(AuditWarning::new(
            "DURATION_CLAMPED",
            format!(
                "End date {} is not after start date {}: billed as 1 day",
                end_date, start_date
            ),
            "medium",
        ));
    }

    let subtotal = Decimal::from(days) * request.daily_rate;
    steps.push(AuditStep {
        step_number,
        rule_id: "base_subtotal".to_string(),
        rule_name: "Base Subtotal".to_string(),
        rule_ref: "daily_rate".to_string(),
        input: serde_json::json!({
            "days": days,
            "daily_rate": request.daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "subtotal": subtotal.normalize().to_string()
        }),
        reasoning: format!(
            "{} days × {} = {}",
            days,
            request.daily_rate.normalize(),
            subtotal.normalize()
        ),
    });
    step_number += 1;

    let discount = calculate_long_term_discount(days, subtotal, rules, step_number);
    steps.push(discount.audit_step);
    step_number += 1;

    let weekend =
        calculate_weekend_surcharge(start_date, end_date, days, subtotal, rules, step_number);
    steps.push(weekend.audit_step);
    step_number += 1;

    let one_way = calculate_one_way_fee(request, rules, step_number);
    steps.push(one_way.audit_step);
    step_number += 1;

    let adjusted_subtotal = subtotal - discount.amount + weekend.amount + one_way.amount;

    let add_ons = calculate_add_ons(
        days,
        request.with_driver,
        request.with_insurance,
        rules,
        step_number,
    );
    steps.push(add_ons.audit_step);
    step_number += 1;

    let pre_tax_total = adjusted_subtotal + add_ons.driver_cost + add_ons.insurance_cost;

    let tax = calculate_tax(pre_tax_total, rules, step_number);
    steps.push(tax.audit_step);
    step_number += 1;

    let unrounded_total = pre_tax_total + tax.amount;
    let total = round_total(unrounded_total, rules.rounding);
    steps.push(AuditStep {
        step_number,
        rule_id: "total_rounding".to_string(),
        rule_name: "Total Rounding".to_string(),
        rule_ref: "rounding".to_string(),
        input: serde_json::json!({
            "adjusted_subtotal": adjusted_subtotal.normalize().to_string(),
            "pre_tax_total": pre_tax_total.normalize().to_string(),
            "tax": tax.amount.normalize().to_string(),
            "policy": rules.rounding
        }),
        output: serde_json::json!({
            "unrounded_total": unrounded_total.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}, rounded to {}",
            pre_tax_total.normalize(),
            tax.amount.normalize(),
            unrounded_total.normalize(),
            total.normalize()
        ),
    });

    debug!(
        days,
        weekend_days = weekend.weekend_days,
        total = %total,
        "Priced rental request"
    );

    BreakdownCalculation {
        breakdown: PriceBreakdown {
            daily_rate: request.daily_rate,
            days,
            subtotal,
            discount_percentage: discount.percentage,
            long_term_discount: discount.amount,
            weekend_days: weekend.weekend_days,
            weekend_surcharge: weekend.amount,
            one_way_fee: one_way.amount,
            adjusted_subtotal,
            driver_cost: add_ons.driver_cost,
            insurance_cost: add_ons.insurance_cost,
            pre_tax_total,
            tax: tax.amount,
            total,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: elapsed_us(start_time),
        },
    }
}

/// Prices a rental request, returning only the breakdown.
pub fn price_rental(request: &RentalRequest, config: &PricingConfig) -> PriceBreakdown {
    calculate_price_breakdown(request, config).breakdown
}

/// Prices a rental request and wraps the result as a [`PriceQuote`].
pub fn quote_rental(request: &RentalRequest, config: &PricingConfig) -> PriceQuote {
    let calculation = calculate_price_breakdown(request, config);
    let market = config.market();

    PriceQuote {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: market.currency.clone(),
        request: request.clone(),
        formatted_total: format_currency(calculation.breakdown.total, &market.currency_symbol),
        breakdown: calculation.breakdown,
        audit_trace: calculation.audit_trace,
    }
}

fn location_warnings(request: &RentalRequest, config: &PricingConfig) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    for (code, label, location) in [
        ("UNKNOWN_PICKUP_LOCATION", "Pickup", &request.pickup_location),
        ("UNKNOWN_DROPOFF_LOCATION", "Drop-off", &request.dropoff_location),
    ] {
        if !location.is_empty() && !config.is_known_location(location) {
            warnings.push(AuditWarning::new(
                code,
                format!("{} location '{}' is not served in {}", label, location, config.market().name),
                "low",
            ));
        }
    }
    warnings
}

fn empty_calculation(
    request: &RentalRequest,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
    start_time: Instant,
) -> BreakdownCalculation {
    BreakdownCalculation {
        breakdown: PriceBreakdown::empty(request.daily_rate),
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: elapsed_us(start_time),
        },
    }
}

fn elapsed_us(start_time: Instant) -> u64 {
    u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX)
}
