//! Rental duration calculation.
//!
//! Converts the chosen start and end dates into a number of billed days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of working out how many days a rental is billed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDurationResult {
    /// Number of billed days. 0 only when a date is missing.
    pub days: u32,
    /// True if a same-day or reversed selection was raised to one day.
    pub clamped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Minimum number of billed days once both dates are chosen.
pub const MINIMUM_BILLED_DAYS: u32 = 1;

/// Calculates the number of billed days between two dates.
///
/// - Either date missing: 0 days, the placeholder case.
/// - Both present: the whole number of days from start to end, raised to
///   [`MINIMUM_BILLED_DAYS`] when the span is zero or negative.
///
/// Dates carry no time of day, so the span is always a whole number of days
/// and no rounding up is needed.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::calculate_rental_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 12, 2);
/// let end = NaiveDate::from_ymd_opt(2024, 12, 9);
///
/// assert_eq!(calculate_rental_days(start, end, 1).days, 7);
/// assert_eq!(calculate_rental_days(start, start, 1).days, 1);
/// assert_eq!(calculate_rental_days(start, None, 1).days, 0);
/// ```
pub fn calculate_rental_days(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    step_number: u32,
) -> RentalDurationResult {
    let Some((start, end)) = start_date.zip(end_date) else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "rental_duration".to_string(),
            rule_name: "Rental Duration".to_string(),
            rule_ref: "duration".to_string(),
            input: serde_json::json!({
                "start_date": start_date.map(|d| d.to_string()),
                "end_date": end_date.map(|d| d.to_string()),
            }),
            output: serde_json::json!({
                "days": 0,
                "clamped": false
            }),
            reasoning: "Start or end date not chosen yet: nothing to price".to_string(),
        };

        return RentalDurationResult {
            days: 0,
            clamped: false,
            audit_step,
        };
    };

    let span = (end - start).num_days();
    let clamped = span < i64::from(MINIMUM_BILLED_DAYS);
    let days = if clamped {
        MINIMUM_BILLED_DAYS
    } else {
        u32::try_from(span).unwrap_or(u32::MAX)
    };

    let reasoning = if clamped {
        format!(
            "{} to {} spans {} days: billed as the minimum of {} day",
            start, end, span, MINIMUM_BILLED_DAYS
        )
    } else {
        format!("{} to {} spans {} days", start, end, days)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rental_duration".to_string(),
        rule_name: "Rental Duration".to_string(),
        rule_ref: "duration".to_string(),
        input: serde_json::json!({
            "start_date": start.to_string(),
            "end_date": end.to_string()
        }),
        output: serde_json::json!({
            "span_days": span,
            "days": days,
            "clamped": clamped
        }),
        reasoning,
    };

    RentalDurationResult {
        days,
        clamped,
        audit_step,
    }
}
