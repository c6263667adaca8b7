//! Core data models for the rental pricing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod booking;
mod money;
mod price_breakdown;
mod quote;
mod rental_request;
mod vehicle;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use booking::BookingSubmission;
pub use money::{MAX_DAILY_RATE, format_currency};
pub use price_breakdown::PriceBreakdown;
pub use quote::PriceQuote;
pub use rental_request::RentalRequest;
pub use vehicle::{VehicleProfile, VehicleType};
