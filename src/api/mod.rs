//! HTTP API module for the rental pricing engine.
//!
//! This module provides the REST API endpoints for quoting rentals,
//! preparing bookings, listing served locations and estimating demand.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BookingPrepareRequest, DemandFactorRequest, DynamicRateRequest, QuoteRequest};
pub use response::{ApiError, LocationsResponse};
pub use state::AppState;
