//! Demand factor estimation.
//!
//! An advisory multiplier describing how busy a rental period is expected to
//! be. It is reported alongside quotes for fleet planning but never changes
//! the price of a [`PriceBreakdown`](crate::models::PriceBreakdown).

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Lowest factor ever reported.
pub const MIN_DEMAND_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Highest factor ever reported.
pub const MAX_DEMAND_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The result of a demand factor estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandFactorResult {
    /// Combined factor, clamped to [`MIN_DEMAND_FACTOR`]..=[`MAX_DEMAND_FACTOR`].
    pub factor: Decimal,
    /// Peak season component (June to August and December).
    pub seasonal: Decimal,
    /// Start-day component (Friday to Sunday).
    pub day_of_week: Decimal,
    /// Component from the number of bookings already taken.
    pub booking_density: Decimal,
    /// Festival holiday component (20 December to 5 January).
    pub holiday: Decimal,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

fn seasonal_factor(date: NaiveDate) -> Decimal {
    match date.month() {
        6 | 7 | 8 | 12 => Decimal::new(13, 1),
        _ => Decimal::ONE,
    }
}

fn day_of_week_factor(date: NaiveDate) -> Decimal {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => Decimal::new(125, 2),
        _ => Decimal::ONE,
    }
}

fn booking_density_factor(total_bookings: u32) -> Decimal {
    match total_bookings {
        n if n > 1000 => Decimal::new(14, 1),
        n if n > 500 => Decimal::new(12, 1),
        n if n < 100 => Decimal::new(8, 1),
        _ => Decimal::ONE,
    }
}

fn holiday_factor(date: NaiveDate) -> Decimal {
    let festive = (date.month() == 12 && date.day() >= 20) || (date.month() == 1 && date.day() <= 5);
    if festive {
        Decimal::new(15, 1)
    } else {
        Decimal::ONE
    }
}

/// Estimates the demand factor for a rental starting on `start_date`.
///
/// The four components are multiplied together and the product is clamped
/// to the 0.5..=2.0 band.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_demand_factor;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // A Wednesday in March with ordinary booking volume
/// let start = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
/// let result = calculate_demand_factor(start, 300, 1);
///
/// assert_eq!(result.factor, Decimal::ONE);
/// ```
pub fn calculate_demand_factor(
    start_date: NaiveDate,
    total_bookings: u32,
    step_number: u32,
) -> DemandFactorResult {
    let seasonal = seasonal_factor(start_date);
    let day_of_week = day_of_week_factor(start_date);
    let booking_density = booking_density_factor(total_bookings);
    let holiday = holiday_factor(start_date);

    let raw = seasonal * day_of_week * booking_density * holiday;
    let factor = raw.clamp(MIN_DEMAND_FACTOR, MAX_DEMAND_FACTOR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "demand_factor".to_string(),
        rule_name: "Demand Factor".to_string(),
        rule_ref: "demand".to_string(),
        input: serde_json::json!({
            "start_date": start_date.to_string(),
            "total_bookings": total_bookings
        }),
        output: serde_json::json!({
            "seasonal": seasonal.normalize().to_string(),
            "day_of_week": day_of_week.normalize().to_string(),
            "booking_density": booking_density.normalize().to_string(),
            "holiday": holiday.normalize().to_string(),
            "raw": raw.normalize().to_string(),
            "factor": factor.normalize().to_string()
        }),
        reasoning: format!(
            "{} × {} × {} × {} = {}, clamped to {}",
            seasonal.normalize(),
            day_of_week.normalize(),
            booking_density.normalize(),
            holiday.normalize(),
            raw.normalize(),
            factor.normalize()
        ),
    };

    DemandFactorResult {
        factor,
        seasonal,
        day_of_week,
        booking_density,
        holiday,
        audit_step,
    }
}
