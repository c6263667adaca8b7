//! Rental request model.
//!
//! This module contains the [`RentalRequest`] type describing what a customer
//! has selected in the booking form: the dates, the location pair, the car's
//! daily rate and the optional services.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer's rental selection, priced by
/// [`calculate_price_breakdown`](crate::calculation::calculate_price_breakdown).
///
/// Dates are optional because the form is priced on every change, including
/// before the customer has picked both dates.
///
/// # Example
///
/// ```
/// use rental_pricing::models::RentalRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RentalRequest {
///     start_date: NaiveDate::from_ymd_opt(2024, 12, 2),
///     end_date: NaiveDate::from_ymd_opt(2024, 12, 3),
///     pickup_location: "Kathmandu".to_string(),
///     dropoff_location: "Pokhara".to_string(),
///     daily_rate: Decimal::from(3500),
///     with_driver: false,
///     with_insurance: true,
/// };
///
/// assert!(request.has_dates());
/// assert!(request.is_one_way());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The first day of the rental, if chosen.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The return day of the rental, if chosen.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Where the car is collected.
    #[serde(default)]
    pub pickup_location: String,
    /// Where the car is returned.
    #[serde(default)]
    pub dropoff_location: String,
    /// The car's base price per day.
    pub daily_rate: Decimal,
    /// Whether a driver is hired with the car.
    #[serde(default)]
    pub with_driver: bool,
    /// Whether insurance cover is added.
    #[serde(default)]
    pub with_insurance: bool,
}

impl RentalRequest {
    /// Returns both dates when the customer has chosen them.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }

    /// Returns true if both start and end dates are present.
    pub fn has_dates(&self) -> bool {
        self.dates().is_some()
    }

    /// Returns true if the car is returned somewhere other than where it was
    /// collected.
    ///
    /// Both locations must be filled in. The comparison is an exact string
    /// comparison: no trimming and no case folding.
    pub fn is_one_way(&self) -> bool {
        !self.pickup_location.is_empty()
            && !self.dropoff_location.is_empty()
            && self.pickup_location != self.dropoff_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(pickup: &str, dropoff: &str) -> RentalRequest {
        RentalRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 12, 2),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 3),
            pickup_location: pickup.to_string(),
            dropoff_location: dropoff.to_string(),
            daily_rate: Decimal::from(3500),
            with_driver: false,
            with_insurance: false,
        }
    }

    #[test]
    fn test_same_location_is_not_one_way() {
        assert!(!create_request("Kathmandu", "Kathmandu").is_one_way());
    }

    #[test]
    fn test_different_locations_are_one_way() {
        assert!(create_request("Kathmandu", "Pokhara").is_one_way());
    }

    #[test]
    fn test_location_comparison_is_not_normalized() {
        assert!(create_request("Kathmandu", "kathmandu").is_one_way());
        assert!(create_request("Kathmandu", "Kathmandu ").is_one_way());
    }

    #[test]
    fn test_empty_location_is_never_one_way() {
        assert!(!create_request("", "Pokhara").is_one_way());
        assert!(!create_request("Kathmandu", "").is_one_way());
        assert!(!create_request("", "").is_one_way());
    }

    #[test]
    fn test_has_dates_requires_both() {
        let mut request = create_request("Kathmandu", "Kathmandu");
        assert!(request.has_dates());

        request.end_date = None;
        assert!(!request.has_dates());
        assert_eq!(request.dates(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "start_date": "2024-12-02",
            "end_date": "2024-12-03",
            "daily_rate": "3500"
        }"#;

        let request: RentalRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 12, 2));
        assert_eq!(request.daily_rate, Decimal::from(3500));
        assert!(request.pickup_location.is_empty());
        assert!(!request.with_driver);
        assert!(!request.with_insurance);
    }
}
