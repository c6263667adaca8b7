//! Price breakdown model.
//!
//! This module contains the [`PriceBreakdown`] type, the itemized result of
//! pricing a [`RentalRequest`](super::RentalRequest).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The itemized price of a rental.
///
/// Every field keeps full decimal precision except `total`, which is rounded
/// to a whole currency unit. A breakdown with `days == 0` means the dates
/// have not been chosen yet; every amount in it is zero.
///
/// # Example
///
/// ```
/// use rental_pricing::models::PriceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PriceBreakdown::empty(Decimal::from(3500));
/// assert_eq!(breakdown.days, 0);
/// assert_eq!(breakdown.total, Decimal::ZERO);
/// assert!(!breakdown.is_priced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The car's base price per day.
    pub daily_rate: Decimal,
    /// Number of billed days.
    pub days: u32,
    /// `days × daily_rate`, before any discount or surcharge.
    pub subtotal: Decimal,
    /// The long-term discount tier applied, in percent.
    pub discount_percentage: Decimal,
    /// Amount taken off the subtotal for a long rental.
    pub long_term_discount: Decimal,
    /// Saturdays and Sundays in the rental span, both ends included.
    pub weekend_days: u32,
    /// Premium for the weekend share of the subtotal.
    pub weekend_surcharge: Decimal,
    /// Flat fee for returning the car to a different location.
    pub one_way_fee: Decimal,
    /// Subtotal after discount, weekend surcharge and one-way fee.
    pub adjusted_subtotal: Decimal,
    /// Price of the hired driver.
    pub driver_cost: Decimal,
    /// Price of the insurance cover.
    pub insurance_cost: Decimal,
    /// Adjusted subtotal plus add-ons.
    pub pre_tax_total: Decimal,
    /// Tax on the pre-tax total.
    pub tax: Decimal,
    /// The amount charged, rounded to a whole currency unit.
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Returns the placeholder breakdown shown before both dates are chosen.
    pub fn empty(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            days: 0,
            subtotal: Decimal::ZERO,
            discount_percentage: Decimal::ZERO,
            long_term_discount: Decimal::ZERO,
            weekend_days: 0,
            weekend_surcharge: Decimal::ZERO,
            one_way_fee: Decimal::ZERO,
            adjusted_subtotal: Decimal::ZERO,
            driver_cost: Decimal::ZERO,
            insurance_cost: Decimal::ZERO,
            pre_tax_total: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Returns true if the breakdown covers at least one billed day.
    pub fn is_priced(&self) -> bool {
        self.days > 0
    }
}
