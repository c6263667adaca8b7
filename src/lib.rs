//! Rental Pricing Engine for the Nepal car-rental market
//!
//! This crate prices a car rental from the customer's selection (dates,
//! pickup and drop-off locations, the car's daily rate and optional services)
//! into an itemized breakdown with long-term discounts, a weekend surcharge,
//! a one-way fee, add-ons and 13% VAT, and serves it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
