//! Dynamic daily rate.
//!
//! Scales a vehicle's base rate by demand, rental length, booking lead time
//! and the vehicle itself. The result is a suggested daily rate that can be
//! fed back into [`calculate_price_breakdown`](super::calculate_price_breakdown);
//! it is never below the base rate.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::PricingResult;
use crate::models::{AuditStep, VehicleProfile, VehicleType};
use crate::validation::validate_daily_rate;

use super::calculate_demand_factor;

/// The result of a dynamic rate calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicRateResult {
    /// The vehicle's base daily rate.
    pub base_rate: Decimal,
    /// Clamped demand factor for the start date.
    pub demand_factor: Decimal,
    /// Factor from the number of days between start and end.
    pub duration_factor: Decimal,
    /// Factor from the number of days until the rental starts.
    pub lead_time_factor: Decimal,
    /// Factor from the vehicle's rating and type.
    pub vehicle_factor: Decimal,
    /// Product of the four factors.
    pub multiplier: Decimal,
    /// The suggested daily rate, rounded half-up to 2 decimal places.
    pub rate: Decimal,
    /// True when the scaled rate fell below the base rate and was raised to it.
    pub floored: bool,
    /// The demand step followed by the dynamic rate step.
    pub audit_steps: Vec<AuditStep>,
}

fn duration_factor(days: i64) -> Decimal {
    match days {
        d if d >= 14 => Decimal::new(85, 2),
        d if d >= 7 => Decimal::new(90, 2),
        d if d >= 3 => Decimal::new(95, 2),
        _ => Decimal::ONE,
    }
}

fn lead_time_factor(days_until_start: i64) -> Decimal {
    match days_until_start {
        d if d <= 1 => Decimal::new(120, 2),
        d if d <= 3 => Decimal::new(110, 2),
        d if d >= 30 => Decimal::new(95, 2),
        d if d >= 14 => Decimal::new(98, 2),
        _ => Decimal::ONE,
    }
}

fn vehicle_factor(vehicle: &VehicleProfile) -> Decimal {
    let rating = if vehicle.rating >= Decimal::new(45, 1) {
        Decimal::new(115, 2)
    } else if vehicle.rating >= Decimal::new(40, 1) {
        Decimal::new(108, 2)
    } else {
        Decimal::ONE
    };

    let body = match vehicle.vehicle_type {
        VehicleType::Luxury | VehicleType::Sports => Decimal::new(125, 2),
        VehicleType::Suv => Decimal::new(110, 2),
        VehicleType::Electric => Decimal::new(115, 2),
        _ => Decimal::ONE,
    };

    rating * body
}

/// Calculates the dynamic daily rate for a vehicle.
///
/// `multiplier = demand × duration × lead time × vehicle`, and the rate is
/// `base_rate × multiplier`, raised to `base_rate` when lower, then rounded
/// half-up to 2 decimal places.
///
/// # Errors
///
/// Returns `DailyRateOutOfRange` when `base_rate` is negative or above
/// [`MAX_DAILY_RATE`](crate::models::MAX_DAILY_RATE).
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_dynamic_rate;
/// use rental_pricing::models::{VehicleProfile, VehicleType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // A Wednesday in March, a week long, booked ten days ahead
/// let start = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 19).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let vehicle = VehicleProfile {
///     vehicle_type: VehicleType::Suv,
///     rating: Decimal::new(42, 1),
/// };
///
/// let result = calculate_dynamic_rate(Decimal::from(1000), start, end, today, 300, &vehicle, 1)?;
/// assert_eq!(result.rate, Decimal::new(106920, 2));
/// # Ok::<(), rental_pricing::error::PricingError>(())
/// ```
pub fn calculate_dynamic_rate(
    base_rate: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
    total_bookings: u32,
    vehicle: &VehicleProfile,
    step_number: u32,
) -> PricingResult<DynamicRateResult> {
    validate_daily_rate(base_rate)?;

    let demand = calculate_demand_factor(start_date, total_bookings, step_number);
    let days = (end_date - start_date).num_days();
    let days_until_start = (start_date - today).num_days();

    let duration_factor = duration_factor(days);
    let lead_time_factor = lead_time_factor(days_until_start);
    let vehicle_factor = vehicle_factor(vehicle);
    let multiplier = demand.factor * duration_factor * lead_time_factor * vehicle_factor;

    let scaled = base_rate * multiplier;
    let floored = scaled < base_rate;
    let mut rate = scaled
        .max(base_rate)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rate.rescale(2);

    let rate_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "dynamic_rate".to_string(),
        rule_name: "Dynamic Daily Rate".to_string(),
        rule_ref: "dynamic_rate".to_string(),
        input: serde_json::json!({
            "base_rate": base_rate.normalize().to_string(),
            "days": days,
            "days_until_start": days_until_start,
            "vehicle_type": vehicle.vehicle_type,
            "rating": vehicle.rating.normalize().to_string()
        }),
        output: serde_json::json!({
            "demand_factor": demand.factor.normalize().to_string(),
            "duration_factor": duration_factor.normalize().to_string(),
            "lead_time_factor": lead_time_factor.normalize().to_string(),
            "vehicle_factor": vehicle_factor.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string(),
            "floored": floored,
            "rate": rate.to_string()
        }),
        reasoning: if floored {
            format!(
                "{} × {} = {} is below the base rate, so the base rate {} applies",
                base_rate.normalize(),
                multiplier.normalize(),
                scaled.normalize(),
                rate
            )
        } else {
            format!(
                "{} × {} = {}, rounded to {}",
                base_rate.normalize(),
                multiplier.normalize(),
                scaled.normalize(),
                rate
            )
        },
    };

    Ok(DynamicRateResult {
        base_rate,
        demand_factor: demand.factor,
        duration_factor,
        lead_time_factor,
        vehicle_factor,
        multiplier,
        rate,
        floored,
        audit_steps: vec![demand.audit_step, rate_step],
    })
}
