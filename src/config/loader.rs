//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading market pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PricingError, PricingResult};

use super::types::{LocationsConfig, MarketMetadata, PricingConfig, PricingRules};

/// Loads and provides access to a market's pricing configuration.
///
/// # Directory Structure
///
/// ```text
/// config/nepal/
/// ├── market.yaml      # Market metadata and currency
/// ├── pricing.yaml     # Discount tiers, surcharges, fees, tax
/// └── locations.yaml   # Served pickup/drop-off locations
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nepal")?;
/// println!("Currency: {}", loader.market().currency);
/// # Ok::<(), rental_pricing::error::PricingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or if the resulting rules fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<MarketMetadata>(&path.join("market.yaml"))?;
        let rules = Self::load_yaml::<PricingRules>(&path.join("pricing.yaml"))?;
        let locations = Self::load_yaml::<LocationsConfig>(&path.join("locations.yaml"))?;

        let config = PricingConfig::new(metadata, rules, locations.locations);
        config.validate()?;

        debug!(
            market = %config.market().code,
            version = %config.market().version,
            tiers = config.rules().long_term_discounts.len(),
            locations = config.locations().len(),
            "Loaded pricing configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the market metadata.
    pub fn market(&self) -> &MarketMetadata {
        self.config.market()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoundingPolicy;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/nepal"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.market().code, "NP");
        assert_eq!(loader.market().currency, "NPR");
        assert_eq!(loader.market().currency_symbol, "रू");
    }

    #[test]
    fn test_loaded_rules_match_builtin_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = PricingConfig::default();

        assert_eq!(loader.config().rules(), builtin.rules());
        assert_eq!(loader.config().locations(), builtin.locations());
    }

    #[test]
    fn test_loaded_rates() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.config().rules();

        assert_eq!(rules.weekend_surcharge.rate, dec("0.15"));
        assert_eq!(rules.one_way_fee, dec("2000"));
        assert_eq!(rules.add_ons.driver_per_day, dec("1500"));
        assert_eq!(rules.add_ons.insurance_per_day, dec("500"));
        assert_eq!(rules.tax.rate, dec("0.13"));
        assert_eq!(rules.tax.name, "VAT");
        assert_eq!(rules.rounding, RoundingPolicy::HalfUp);
    }

    #[test]
    fn test_loaded_tiers_are_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tiers = &loader.config().rules().long_term_discounts;

        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0].min_days, 30);
        assert_eq!(tiers[0].percentage, dec("25"));
        assert_eq!(tiers[3].min_days, 3);
        assert_eq!(tiers[3].percentage, dec("5"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(PricingError::ConfigNotFound { path }) => {
                assert!(path.contains("market.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
