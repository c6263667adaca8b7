//! Error types for the rental pricing engine.
//!
//! The price calculation itself is total and never fails. Errors only arise at
//! the boundaries around it: loading configuration and validating a booking
//! before it is submitted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the rental pricing engine.
///
/// # Example
///
/// ```
/// use rental_pricing::error::PricingError;
///
/// let error = PricingError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PricingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its rules are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A field required to place a booking was not provided.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The end date does not fall strictly after the start date.
    #[error("End date {end} must be after start date {start}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The start date lies before the current date.
    #[error("Start date {start} cannot be in the past (today is {today})")]
    StartDateInPast {
        /// The requested start date.
        start: NaiveDate,
        /// The date the booking was validated on.
        today: NaiveDate,
    },

    /// A location is not served in this market.
    #[error("Unknown location: {location}")]
    UnknownLocation {
        /// The location that was not recognised.
        location: String,
    },

    /// The daily rate is negative or above the largest rate the engine prices.
    #[error("Daily rate {rate} is outside the accepted range 0 to {max}")]
    DailyRateOutOfRange {
        /// The rejected rate.
        rate: Decimal,
        /// The largest accepted rate.
        max: Decimal,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PricingError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PricingError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = PricingError::InvalidConfig {
            message: "tax rate must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: tax rate must be between 0 and 1"
        );
    }

    #[test]
    fn test_missing_field_displays_field() {
        let error = PricingError::MissingField {
            field: "start_date".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required field: start_date");
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = PricingError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 12, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "End date 2024-12-03 must be after start date 2024-12-05"
        );
    }

    #[test]
    fn test_start_date_in_past_displays_dates() {
        let error = PricingError::StartDateInPast {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2024-01-01 cannot be in the past (today is 2024-12-02)"
        );
    }

    #[test]
    fn test_unknown_location_displays_location() {
        let error = PricingError::UnknownLocation {
            location: "Atlantis".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown location: Atlantis");
    }

    #[test]
    fn test_daily_rate_out_of_range_displays_limit() {
        let error = PricingError::DailyRateOutOfRange {
            rate: Decimal::from(-5),
            max: Decimal::from(1_000_000_000),
        };
        assert_eq!(
            error.to_string(),
            "Daily rate -5 is outside the accepted range 0 to 1000000000"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PricingError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> PricingResult<()> {
            Err(PricingError::MissingField {
                field: "end_date".to_string(),
            })
        }

        fn propagates_error() -> PricingResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
