//! Calculation logic for the rental pricing engine.
//!
//! This module contains all the calculation functions for pricing a rental,
//! including billed-day counting, weekend day detection, long-term discount
//! tiers, the weekend surcharge, the one-way fee, driver and insurance
//! add-ons, VAT and final rounding. [`calculate_price_breakdown`] runs them
//! in order. The advisory demand factor and the dynamic daily rate built on
//! it live here too.

mod add_ons;
mod breakdown;
mod day_detection;
mod demand;
mod duration;
mod dynamic_rate;
mod long_term_discount;
mod one_way_fee;
mod rounding;
mod tax;
mod weekend_surcharge;

pub use add_ons::{AddOnsResult, calculate_add_ons};
pub use breakdown::{BreakdownCalculation, calculate_price_breakdown, price_rental, quote_rental};
pub use day_detection::{DayType, count_weekend_days, get_day_type};
pub use demand::{DemandFactorResult, MAX_DEMAND_FACTOR, MIN_DEMAND_FACTOR, calculate_demand_factor};
pub use duration::{MINIMUM_BILLED_DAYS, RentalDurationResult, calculate_rental_days};
pub use dynamic_rate::{DynamicRateResult, calculate_dynamic_rate};
pub use long_term_discount::{LongTermDiscountResult, calculate_long_term_discount, discount_tier_for};
pub use one_way_fee::{OneWayFeeResult, calculate_one_way_fee};
pub use rounding::round_total;
pub use tax::{TaxResult, calculate_tax};
pub use weekend_surcharge::{WeekendSurchargeResult, calculate_weekend_surcharge};
