//! Vehicle attributes that affect dynamic pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The body style of a fleet vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    /// Standard saloon.
    Sedan,
    /// Sport utility vehicle.
    Suv,
    /// Compact hatchback.
    Hatchback,
    /// Luxury car.
    Luxury,
    /// Sports car.
    Sports,
    /// Battery electric vehicle.
    Electric,
    /// Hybrid vehicle.
    Hybrid,
    /// Passenger van.
    Van,
    /// Pickup or light truck.
    Truck,
    /// Convertible.
    Convertible,
}

/// What the dynamic rate needs to know about a vehicle.
///
/// # Example
///
/// ```
/// use rental_pricing::models::{VehicleProfile, VehicleType};
/// use rust_decimal::Decimal;
///
/// let vehicle = VehicleProfile {
///     vehicle_type: VehicleType::Suv,
///     rating: Decimal::new(42, 1),
/// };
/// let json = serde_json::to_value(&vehicle).unwrap();
/// assert_eq!(json["vehicle_type"], "SUV");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Body style.
    pub vehicle_type: VehicleType,
    /// Average customer rating, usually 0 to 5.
    pub rating: Decimal,
}
