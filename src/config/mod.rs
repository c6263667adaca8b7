//! Configuration loading and management for the rental pricing engine.
//!
//! This module loads a market's pricing rules from YAML files: discount
//! tiers, weekend surcharge, one-way fee, add-on prices, tax and the list
//! of served locations.
//!
//! # Example
//!
//! ```no_run
//! use rental_pricing::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/nepal").unwrap();
//! println!("Loaded market: {}", loader.market().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AddOnRates, DiscountTier, LocationsConfig, MarketMetadata, PricingConfig, PricingRules,
    RoundingPolicy, TaxConfig, WeekendSurchargeConfig,
};
