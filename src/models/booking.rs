//! Booking submission model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payload forwarded to booking creation once a quote is accepted.
///
/// Only the final total travels with the raw booking fields; the itemized
/// breakdown stays with the customer's quote.
///
/// # Example
///
/// ```
/// use rental_pricing::models::BookingSubmission;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let submission = BookingSubmission {
///     vehicle_id: "42".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
///     pickup_location: "Kathmandu".to_string(),
///     dropoff_location: "Kathmandu".to_string(),
///     total_price: Decimal::from(3955),
/// };
/// assert_eq!(submission.total_price, Decimal::from(3955));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSubmission {
    /// The vehicle being booked.
    pub vehicle_id: String,
    /// The first day of the rental.
    pub start_date: NaiveDate,
    /// The return day of the rental.
    pub end_date: NaiveDate,
    /// Where the car is collected.
    pub pickup_location: String,
    /// Where the car is returned.
    pub dropoff_location: String,
    /// The rounded total from the price breakdown.
    pub total_price: Decimal,
}
