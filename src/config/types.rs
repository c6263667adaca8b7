//! Configuration types for rental pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PricingError, PricingResult};
use crate::models::MAX_DAILY_RATE;

/// Metadata about the market the prices are quoted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketMetadata {
    /// Short market code (e.g., "NP").
    pub code: String,
    /// Human-readable market name.
    pub name: String,
    /// ISO 4217 currency code (e.g., "NPR").
    pub currency: String,
    /// Symbol used when displaying amounts (e.g., "रू").
    pub currency_symbol: String,
    /// The version or effective date of the pricing rules.
    pub version: String,
}

/// A single long-term discount tier.
///
/// A rental of at least `min_days` billed days receives `percentage` off
/// its base subtotal, unless a tier with a higher threshold also applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Minimum number of billed days for this tier.
    pub min_days: u32,
    /// Discount in percent (e.g., 25 for 25%).
    pub percentage: Decimal,
}

/// Weekend surcharge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendSurchargeConfig {
    /// Premium applied to the weekend share of the subtotal (e.g., 0.15).
    pub rate: Decimal,
}

/// Per-day prices of the optional services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnRates {
    /// Price of a hired driver per billed day.
    pub driver_per_day: Decimal,
    /// Price of insurance cover per billed day.
    pub insurance_per_day: Decimal,
}

/// Tax configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Display name of the tax (e.g., "VAT").
    pub name: String,
    /// Fraction of the pre-tax total charged as tax (e.g., 0.13).
    pub rate: Decimal,
}

/// How the final total is rounded to a whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Midpoints round away from zero (4689.5 becomes 4690).
    #[default]
    HalfUp,
    /// Midpoints round to the nearest even unit (4689.5 becomes 4690, 4690.5 becomes 4690).
    HalfEven,
}

/// The pricing rules loaded from pricing.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Long-term discount tiers. Sorted by descending `min_days` once
    /// wrapped in a [`PricingConfig`].
    pub long_term_discounts: Vec<DiscountTier>,
    /// Weekend surcharge configuration.
    pub weekend_surcharge: WeekendSurchargeConfig,
    /// Flat fee charged when pickup and drop-off locations differ.
    pub one_way_fee: Decimal,
    /// Optional service prices.
    pub add_ons: AddOnRates,
    /// Tax configuration.
    pub tax: TaxConfig,
    /// Rounding applied to the final total.
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Locations configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsConfig {
    /// Pickup and drop-off locations served in the market.
    pub locations: Vec<String>,
}

/// The complete pricing configuration for a market.
///
/// # Example
///
/// ```
/// use rental_pricing::config::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(config.market().currency, "NPR");
/// assert!(config.is_known_location("Pokhara"));
/// ```
#[derive(Debug, Clone)]
pub struct PricingConfig {
    metadata: MarketMetadata,
    rules: PricingRules,
    locations: Vec<String>,
}

impl PricingConfig {
    /// Creates a new PricingConfig from its component parts.
    pub fn new(metadata: MarketMetadata, rules: PricingRules, locations: Vec<String>) -> Self {
        let mut rules = rules;
        rules
            .long_term_discounts
            .sort_by(|a, b| b.min_days.cmp(&a.min_days));
        Self {
            metadata,
            rules,
            locations,
        }
    }

    /// Returns the market metadata.
    pub fn market(&self) -> &MarketMetadata {
        &self.metadata
    }

    /// Returns the pricing rules.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Returns the served locations.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Returns true if the location is in the configured list (exact match).
    pub fn is_known_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    /// Checks that a location is served, returning `UnknownLocation` otherwise.
    pub fn require_location(&self, location: &str) -> PricingResult<()> {
        if self.is_known_location(location) {
            return Ok(());
        }
        warn!(%location, "Location is not served");
        Err(PricingError::UnknownLocation {
            location: location.to_string(),
        })
    }

    /// Checks that the rules are internally consistent.
    pub fn validate(&self) -> PricingResult<()> {
        let rules = &self.rules;
        let hundred = Decimal::ONE_HUNDRED;

        for (index, tier) in rules.long_term_discounts.iter().enumerate() {
            if tier.percentage < Decimal::ZERO || tier.percentage > hundred {
                return Err(invalid(format!(
                    "discount for {} days must be between 0 and 100 percent, got {}",
                    tier.min_days, tier.percentage
                )));
            }
            if rules.long_term_discounts[..index]
                .iter()
                .any(|other| other.min_days == tier.min_days)
            {
                return Err(invalid(format!(
                    "duplicate discount tier for {} days",
                    tier.min_days
                )));
            }
        }

        check_fraction("weekend surcharge rate", rules.weekend_surcharge.rate)?;
        check_fraction("tax rate", rules.tax.rate)?;
        check_amount("one-way fee", rules.one_way_fee)?;
        check_amount("driver price per day", rules.add_ons.driver_per_day)?;
        check_amount("insurance price per day", rules.add_ons.insurance_per_day)?;

        if self.locations.is_empty() {
            return Err(invalid("at least one location must be configured".to_string()));
        }

        Ok(())
    }
}

impl Default for PricingConfig {
    /// The built-in Nepal market, identical to `config/nepal`.
    fn default() -> Self {
        let tier = |min_days: u32, percentage: i64| DiscountTier {
            min_days,
            percentage: Decimal::from(percentage),
        };

        let metadata = MarketMetadata {
            code: "NP".to_string(),
            name: "Nepal".to_string(),
            currency: "NPR".to_string(),
            currency_symbol: "रू".to_string(),
            version: "2024-12-01".to_string(),
        };

        let rules = PricingRules {
            long_term_discounts: vec![tier(30, 25), tier(14, 15), tier(7, 10), tier(3, 5)],
            weekend_surcharge: WeekendSurchargeConfig {
                rate: Decimal::new(15, 2),
            },
            one_way_fee: Decimal::from(2000),
            add_ons: AddOnRates {
                driver_per_day: Decimal::from(1500),
                insurance_per_day: Decimal::from(500),
            },
            tax: TaxConfig {
                name: "VAT".to_string(),
                rate: Decimal::new(13, 2),
            },
            rounding: RoundingPolicy::HalfUp,
        };

        let locations = [
            "Kathmandu",
            "Pokhara",
            "Chitwan",
            "Lalitpur",
            "Bhaktapur",
            "Nagarkot",
            "Lumbini",
            "Dharan",
            "Biratnagar",
            "Butwal",
            "Hetauda",
            "Janakpur",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self::new(metadata, rules, locations)
    }
}

fn invalid(message: String) -> PricingError {
    PricingError::InvalidConfig { message }
}

fn check_fraction(name: &str, value: Decimal) -> PricingResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(invalid(format!("{} must be between 0 and 1, got {}", name, value)));
    }
    Ok(())
}

fn check_amount(name: &str, value: Decimal) -> PricingResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(format!("{} cannot be negative, got {}", name, value)));
    }
    if value > MAX_DAILY_RATE {
        return Err(invalid(format!(
            "{} cannot exceed {}, got {}",
            name, MAX_DAILY_RATE, value
        )));
    }
    Ok(())
}
