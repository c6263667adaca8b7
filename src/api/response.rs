//! Response types for the rental pricing API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// The locations served in the configured market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    /// Market code (e.g., "NP").
    pub market: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Served pickup and drop-off locations.
    pub locations: Vec<String>,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PricingError> for ApiErrorResponse {
    fn from(error: PricingError) -> Self {
        let message = error.to_string();
        match error {
            PricingError::ConfigNotFound { .. }
            | PricingError::ConfigParseError { .. }
            | PricingError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            PricingError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!("Field '{}' is required to place a booking", field),
                ),
            },
            PricingError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE_RANGE", message),
            },
            PricingError::StartDateInPast { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("START_DATE_IN_PAST", message),
            },
            PricingError::DailyRateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            PricingError::UnknownLocation { location } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_LOCATION",
                    message,
                    format!("'{}' is not a pickup or drop-off location in this market", location),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_date_errors_are_bad_requests() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 8).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();

        let api_error: ApiErrorResponse = PricingError::InvalidDateRange { start, end }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
        assert!(api_error.error.message.contains("2024-12-08"));

        let api_error: ApiErrorResponse = PricingError::StartDateInPast { start, today: end }.into();
        assert_eq!(api_error.error.code, "START_DATE_IN_PAST");
    }

    #[test]
    fn test_missing_field_error() {
        let api_error: ApiErrorResponse = PricingError::MissingField {
            field: "pickup_location".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MISSING_FIELD");
        assert!(api_error.error.details.unwrap().contains("pickup_location"));
    }

    #[test]
    fn test_rate_out_of_range_is_validation_error() {
        let api_error: ApiErrorResponse = PricingError::DailyRateOutOfRange {
            rate: rust_decimal::Decimal::from(-5),
            max: crate::models::MAX_DAILY_RATE,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("-5"));
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let api_error: ApiErrorResponse = PricingError::InvalidConfig {
            message: "no locations".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
