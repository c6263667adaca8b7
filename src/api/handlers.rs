//! HTTP request handlers for the rental pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_demand_factor, calculate_dynamic_rate, quote_rental};
use crate::error::PricingError;
use crate::models::RentalRequest;
use crate::validation::{prepare_booking, validate_daily_rate};

use super::request::{BookingPrepareRequest, DemandFactorRequest, DynamicRateRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse, LocationsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/bookings/prepare", post(prepare_booking_handler))
        .route("/locations", get(locations_handler))
        .route("/demand-factor", post(demand_factor_handler))
        .route("/dynamic-rate", post(dynamic_rate_handler))
        .with_state(state)
}

/// Handler for POST /quote.
///
/// Prices the selection and returns the breakdown with its audit trace.
/// Incomplete selections are priced too: missing dates give an all-zero
/// breakdown rather than an error. A daily rate outside the accepted range
/// is rejected with `VALIDATION_ERROR`.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request: RentalRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_daily_rate(request.daily_rate) {
        warn!(correlation_id = %correlation_id, error = %err, "Quote rejected");
        return error_response(err);
    }

    let start_time = Instant::now();
    let quote = quote_rental(&request, state.config().config());
    info!(
        correlation_id = %correlation_id,
        priced = quote.breakdown.is_priced(),
        days = quote.breakdown.days,
        total = %quote.breakdown.total,
        warnings = quote.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Quote completed successfully"
    );

    json_response(StatusCode::OK, &quote)
}

/// Handler for POST /bookings/prepare.
///
/// Validates the selection against today's date and returns the payload to
/// forward to booking creation.
async fn prepare_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingPrepareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking preparation");

    let (vehicle_id, request) = match payload {
        Ok(Json(req)) => req.into_parts(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = Utc::now().date_naive();
    match prepare_booking(&vehicle_id, &request, state.config().config(), today) {
        Ok(submission) => {
            info!(
                correlation_id = %correlation_id,
                vehicle_id = %submission.vehicle_id,
                total_price = %submission.total_price,
                "Booking prepared"
            );
            json_response(StatusCode::OK, &submission)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Booking rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /locations.
async fn locations_handler(State(state): State<AppState>) -> Response {
    let market = state.config().market();
    let body = LocationsResponse {
        market: market.code.clone(),
        currency: market.currency.clone(),
        locations: state.config().config().locations().to_vec(),
    };
    json_response(StatusCode::OK, &body)
}

/// Handler for POST /demand-factor.
async fn demand_factor_handler(
    payload: Result<Json<DemandFactorRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = calculate_demand_factor(request.start_date, request.total_bookings, 1);
    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        factor = %result.factor,
        "Demand factor estimated"
    );

    json_response(StatusCode::OK, &result)
}

/// Handler for POST /dynamic-rate.
///
/// Suggests a daily rate for a vehicle; lead time is measured from today.
async fn dynamic_rate_handler(
    payload: Result<Json<DynamicRateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = Utc::now().date_naive();
    match calculate_dynamic_rate(
        request.base_rate,
        request.start_date,
        request.end_date,
        today,
        request.total_bookings,
        &request.vehicle(),
        1,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                base_rate = %result.base_rate,
                multiplier = %result.multiplier,
                rate = %result.rate,
                floored = result.floored,
                "Dynamic rate calculated"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Dynamic rate rejected"
            );
            error_response(err)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: PricingError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is in the body text, not the rejection's Display
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
