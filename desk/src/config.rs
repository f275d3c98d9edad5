//! Desk configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DeskError;

pub const CONFIG_ENV: &str = "COMMISSION_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "commission-desk.toml";

/// A contract product line and the commission rate it carries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLine {
    /// Lookup key, e.g. `icc-logistics`
    pub key: String,

    /// Display name
    pub label: String,

    /// Percentage of the deal amount that becomes the commission pool
    pub rate_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Symbol used when rendering currency
    pub currency_symbol: String,

    /// Upline depth assumed when a command does not give one
    pub default_uplines: u8,

    /// Product-line catalog
    pub products: Vec<ProductLine>,
}

impl Config {
    /// Load configuration from the TOML file named by `COMMISSION_CONFIG`
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a TOML file
    pub fn load_from(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        let config_str = std::fs::read_to_string(expanded_path.as_ref())
            .context(format!("Failed to read config file: {}", path))?;

        let config = Self::from_toml(&config_str)?;
        log::debug!("Loaded {} product lines from {}", config.products.len(), path);

        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)
            .context("Failed to parse config TOML")?;

        config.validate()?;
        Ok(config)
    }

    /// Product lines offered by the affiliate backend
    pub fn default_catalog() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_uplines: 0,
            products: vec![
                ProductLine {
                    key: "icc-logistics".to_string(),
                    label: "ICC Logistics".to_string(),
                    rate_percent: 18.0,
                },
                ProductLine {
                    key: "general-agency".to_string(),
                    label: "General Agency".to_string(),
                    rate_percent: 55.0,
                },
                ProductLine {
                    key: "private-reinsurance".to_string(),
                    label: "Private Reinsurance".to_string(),
                    rate_percent: 70.0,
                },
            ],
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_catalog();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        let expanded_path = shellexpand::tilde(path);
        std::fs::write(expanded_path.as_ref(), toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }

    /// Reject duplicate keys and non-finite rates
    ///
    /// Out-of-range rates are left alone; the calculator clamps them.
    pub fn validate(&self) -> Result<(), DeskError> {
        let mut seen = HashSet::new();

        for product in &self.products {
            if !seen.insert(product.key.as_str()) {
                return Err(DeskError::DuplicateProduct(product.key.clone()));
            }
            if !product.rate_percent.is_finite() {
                return Err(DeskError::InvalidRate {
                    key: product.key.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn product(&self, key: &str) -> Result<&ProductLine, DeskError> {
        self.products
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| DeskError::UnknownProduct(key.to_string()))
    }

    /// Contract rate from an explicit percentage or a product key
    pub fn resolve_rate(&self, rate: Option<f64>, product: Option<&str>) -> Result<f64, DeskError> {
        match (rate, product) {
            (Some(rate), _) => Ok(rate),
            (None, Some(key)) => Ok(self.product(key)?.rate_percent),
            (None, None) => Err(DeskError::NoRate),
        }
    }
}
