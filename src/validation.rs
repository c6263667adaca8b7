//! Booking validation and submission preparation.
//!
//! Pricing accepts any selection and prices it as best it can. Placing a
//! booking is stricter: both dates and both locations must be chosen, the
//! rental cannot start in the past and must end after it starts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::price_rental;
use crate::config::PricingConfig;
use crate::error::{PricingError, PricingResult};
use crate::models::{BookingSubmission, MAX_DAILY_RATE, RentalRequest};

/// Checks the rental dates before a booking is placed.
///
/// Returns the two dates when they are present, `start` is not before
/// `today`, and `end` falls strictly after `start`.
///
/// # Example
///
/// ```
/// use rental_pricing::validation::validate_booking_dates;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 12, 2);
/// let end = NaiveDate::from_ymd_opt(2024, 12, 3);
///
/// assert!(validate_booking_dates(start, end, today).is_ok());
/// assert!(validate_booking_dates(end, start, today).is_err());
/// ```
pub fn validate_booking_dates(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> PricingResult<(NaiveDate, NaiveDate)> {
    let start = start.ok_or_else(|| missing("start_date"))?;
    let end = end.ok_or_else(|| missing("end_date"))?;

    if start < today {
        warn!(%start, %today, "Booking start date is in the past");
        return Err(PricingError::StartDateInPast { start, today });
    }

    if end <= start {
        warn!(%start, %end, "Booking end date is not after start date");
        return Err(PricingError::InvalidDateRange { start, end });
    }

    Ok((start, end))
}

/// Checks that a daily rate lies between zero and [`MAX_DAILY_RATE`].
///
/// # Example
///
/// ```
/// use rental_pricing::validation::validate_daily_rate;
/// use rust_decimal::Decimal;
///
/// assert!(validate_daily_rate(Decimal::from(3500)).is_ok());
/// assert!(validate_daily_rate(Decimal::from(-1)).is_err());
/// ```
pub fn validate_daily_rate(rate: Decimal) -> PricingResult<()> {
    if rate < Decimal::ZERO || rate > MAX_DAILY_RATE {
        warn!(%rate, max = %MAX_DAILY_RATE, "Daily rate is out of range");
        return Err(PricingError::DailyRateOutOfRange {
            rate,
            max: MAX_DAILY_RATE,
        });
    }
    Ok(())
}

/// Checks that both pickup and drop-off locations are filled in.
pub fn validate_booking_locations(request: &RentalRequest) -> PricingResult<()> {
    if request.pickup_location.is_empty() {
        return Err(missing("pickup_location"));
    }
    if request.dropoff_location.is_empty() {
        return Err(missing("dropoff_location"));
    }
    Ok(())
}

/// Validates a rental request and builds the booking payload for it.
///
/// Runs date and location validation, rejects locations the market does not
/// serve and rates outside the accepted range, prices the request and carries only the rounded total forward.
///
/// # Example
///
/// ```
/// use rental_pricing::config::PricingConfig;
/// use rental_pricing::models::RentalRequest;
/// use rental_pricing::validation::prepare_booking;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RentalRequest {
///     start_date: NaiveDate::from_ymd_opt(2024, 12, 2),
///     end_date: NaiveDate::from_ymd_opt(2024, 12, 3),
///     pickup_location: "Kathmandu".to_string(),
///     dropoff_location: "Kathmandu".to_string(),
///     daily_rate: Decimal::from(3500),
///     with_driver: false,
///     with_insurance: false,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
///
/// let submission = prepare_booking("42", &request, &PricingConfig::default(), today)?;
/// assert_eq!(submission.total_price, Decimal::from(3955));
/// # Ok::<(), rental_pricing::error::PricingError>(())
/// ```
pub fn prepare_booking(
    vehicle_id: &str,
    request: &RentalRequest,
    config: &PricingConfig,
    today: NaiveDate,
) -> PricingResult<BookingSubmission> {
    if vehicle_id.is_empty() {
        return Err(missing("vehicle_id"));
    }

    let (start_date, end_date) = validate_booking_dates(request.start_date, request.end_date, today)?;
    validate_booking_locations(request)?;
    config.require_location(&request.pickup_location)?;
    config.require_location(&request.dropoff_location)?;
    validate_daily_rate(request.daily_rate)?;

    let breakdown = price_rental(request, config);

    Ok(BookingSubmission {
        vehicle_id: vehicle_id.to_string(),
        start_date,
        end_date,
        pickup_location: request.pickup_location.clone(),
        dropoff_location: request.dropoff_location.clone(),
        total_price: breakdown.total,
    })
}

fn missing(field: &str) -> PricingError {
    warn!(field, "Booking is missing a required field");
    PricingError::MissingField {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_request(start: &str, end: &str) -> RentalRequest {
        RentalRequest {
            start_date: Some(make_date(start)),
            end_date: Some(make_date(end)),
            pickup_location: "Kathmandu".to_string(),
            dropoff_location: "Pokhara".to_string(),
            daily_rate: Decimal::from(1000),
            with_driver: false,
            with_insurance: false,
        }
    }

    // ==========================================================================
    // Date validation
    // ==========================================================================

    #[test]
    fn test_valid_dates() {
        let result = validate_booking_dates(
            Some(make_date("2024-12-05")),
            Some(make_date("2024-12-07")),
            make_date("2024-12-01"),
        );
        assert_eq!(result.unwrap(), (make_date("2024-12-05"), make_date("2024-12-07")));
    }

    #[test]
    fn test_start_today_is_allowed() {
        let today = make_date("2024-12-05");
        assert!(validate_booking_dates(Some(today), Some(make_date("2024-12-06")), today).is_ok());
    }

    #[test]
    fn test_missing_start_date() {
        match validate_booking_dates(None, Some(make_date("2024-12-06")), make_date("2024-12-01")) {
            Err(PricingError::MissingField { field }) => assert_eq!(field, "start_date"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_end_date() {
        match validate_booking_dates(Some(make_date("2024-12-06")), None, make_date("2024-12-01")) {
            Err(PricingError::MissingField { field }) => assert_eq!(field, "end_date"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_start_in_past() {
        let result = validate_booking_dates(
            Some(make_date("2024-11-30")),
            Some(make_date("2024-12-03")),
            make_date("2024-12-01"),
        );
        assert!(matches!(result, Err(PricingError::StartDateInPast { .. })));
    }

    #[test]
    fn test_same_day_is_rejected() {
        let day = make_date("2024-12-05");
        let result = validate_booking_dates(Some(day), Some(day), make_date("2024-12-01"));
        assert!(matches!(result, Err(PricingError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let result = validate_booking_dates(
            Some(make_date("2024-12-08")),
            Some(make_date("2024-12-07")),
            make_date("2024-12-01"),
        );
        match result {
            Err(PricingError::InvalidDateRange { start, end }) => {
                assert_eq!(start, make_date("2024-12-08"));
                assert_eq!(end, make_date("2024-12-07"));
            }
            other => panic!("Expected InvalidDateRange, got {:?}", other),
        }
    }

    // ==========================================================================
    // Location validation
    // ==========================================================================

    #[test]
    fn test_locations_present() {
        let request = create_request("2024-12-05", "2024-12-07");
        assert!(validate_booking_locations(&request).is_ok());
    }

    #[test]
    fn test_missing_dropoff_location() {
        let mut request = create_request("2024-12-05", "2024-12-07");
        request.dropoff_location = String::new();

        match validate_booking_locations(&request) {
            Err(PricingError::MissingField { field }) => assert_eq!(field, "dropoff_location"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    // ==========================================================================
    // Rate validation
    // ==========================================================================

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert!(validate_daily_rate(Decimal::ZERO).is_ok());
        assert!(validate_daily_rate(MAX_DAILY_RATE).is_ok());
    }

    #[test]
    fn test_rate_above_limit_is_rejected() {
        let rate = MAX_DAILY_RATE + Decimal::new(1, 2);
        match validate_daily_rate(rate) {
            Err(PricingError::DailyRateOutOfRange { rate: rejected, .. }) => assert_eq!(rejected, rate),
            other => panic!("Expected DailyRateOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = validate_daily_rate(Decimal::new(-1, 2));
        assert!(matches!(result, Err(PricingError::DailyRateOutOfRange { .. })));
    }

    // ==========================================================================
    // Submission
    // ==========================================================================

    #[test]
    fn test_prepare_booking_carries_total_only() {
        let config = PricingConfig::default();
        let request = create_request("2024-12-05", "2024-12-07");

        let submission = prepare_booking("7", &request, &config, make_date("2024-12-01")).unwrap();

        assert_eq!(submission.vehicle_id, "7");
        assert_eq!(submission.start_date, make_date("2024-12-05"));
        assert_eq!(submission.end_date, make_date("2024-12-07"));
        assert_eq!(submission.pickup_location, "Kathmandu");
        assert_eq!(submission.dropoff_location, "Pokhara");
        assert_eq!(submission.total_price, Decimal::from(4690));
    }

    #[test]
    fn test_prepare_booking_rejects_unknown_location() {
        let config = PricingConfig::default();
        let mut request = create_request("2024-12-05", "2024-12-07");
        request.dropoff_location = "Lhasa".to_string();

        match prepare_booking("7", &request, &config, make_date("2024-12-01")) {
            Err(PricingError::UnknownLocation { location }) => assert_eq!(location, "Lhasa"),
            other => panic!("Expected UnknownLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_booking_requires_vehicle() {
        let config = PricingConfig::default();
        let request = create_request("2024-12-05", "2024-12-07");

        let result = prepare_booking("", &request, &config, make_date("2024-12-01"));
        assert!(matches!(result, Err(PricingError::MissingField { .. })));
    }

    #[test]
    fn test_prepare_booking_rejects_oversized_rate() {
        let config = PricingConfig::default();
        let mut request = create_request("2024-12-05", "2024-12-07");
        request.daily_rate = "30000000000000000000000000000".parse().unwrap();

        match prepare_booking("7", &request, &config, make_date("2024-12-01")) {
            Err(PricingError::DailyRateOutOfRange { max, .. }) => assert_eq!(max, MAX_DAILY_RATE),
            other => panic!("Expected DailyRateOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_booking_checks_dates_before_locations() {
        let config = PricingConfig::default();
        let mut request = create_request("2024-12-05", "2024-12-05");
        request.pickup_location = String::new();

        let result = prepare_booking("7", &request, &config, make_date("2024-12-01"));
        assert!(matches!(result, Err(PricingError::InvalidDateRange { .. })));
    }
}
