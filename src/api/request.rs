//! Request types for the rental pricing API.
//!
//! The booking form sends dates as `YYYY-MM-DD` strings and leaves them empty
//! until the customer picks them, so an empty date string is read as "not
//! chosen yet" rather than rejected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{RentalRequest, VehicleProfile, VehicleType};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The first day of the rental, if chosen.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    /// The return day of the rental, if chosen.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
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

impl From<QuoteRequest> for RentalRequest {
    fn from(req: QuoteRequest) -> Self {
        RentalRequest {
            start_date: req.start_date,
            end_date: req.end_date,
            pickup_location: req.pickup_location,
            dropoff_location: req.dropoff_location,
            daily_rate: req.daily_rate,
            with_driver: req.with_driver,
            with_insurance: req.with_insurance,
        }
    }
}

/// Request body for the `/bookings/prepare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPrepareRequest {
    /// The vehicle being booked.
    pub vehicle_id: String,
    /// The first day of the rental.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    /// The return day of the rental.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
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

impl BookingPrepareRequest {
    /// Splits the request into the vehicle id and the rental selection.
    pub fn into_parts(self) -> (String, RentalRequest) {
        let rental = RentalRequest {
            start_date: self.start_date,
            end_date: self.end_date,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            daily_rate: self.daily_rate,
            with_driver: self.with_driver,
            with_insurance: self.with_insurance,
        };
        (self.vehicle_id, rental)
    }
}

/// Request body for the `/demand-factor` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandFactorRequest {
    /// The first day of the rental.
    pub start_date: NaiveDate,
    /// Bookings already taken across the fleet.
    pub total_bookings: u32,
}

/// Request body for the `/dynamic-rate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicRateRequest {
    /// The vehicle's base price per day.
    pub base_rate: Decimal,
    /// The first day of the rental.
    pub start_date: NaiveDate,
    /// The return day of the rental.
    pub end_date: NaiveDate,
    /// Bookings already taken across the fleet.
    pub total_bookings: u32,
    /// Body style of the vehicle.
    pub vehicle_type: VehicleType,
    /// Average customer rating of the vehicle.
    pub rating: Decimal,
}

impl DynamicRateRequest {
    /// Returns the vehicle attributes used by the dynamic rate.
    pub fn vehicle(&self) -> VehicleProfile {
        VehicleProfile {
            vehicle_type: self.vehicle_type,
            rating: self.rating,
        }
    }
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
