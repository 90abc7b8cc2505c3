//! Catalog configuration for the product widget.
//!
//! The widget ships with a hardcoded catalog ([`CatalogConfig::default`]).
//! [`CatalogConfig::from_json`] accepts an override document; absent fields
//! fall back to the defaults.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BRAND: &str = "Vue Mastery";
pub const DEFAULT_PRODUCT: &str = "Socks";

/// Error returned by [`CatalogConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog must define at least one variant")]
    NoVariants,
    #[error("duplicate variant id: {0}")]
    DuplicateVariant(u32),
}

/// One purchasable color/stock option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u32,
    pub color: String,
    pub image: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub brand: String,
    pub product: String,
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
    pub on_sale: bool,
    pub premium: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_owned(),
            product: DEFAULT_PRODUCT.to_owned(),
            details: vec!["80% cotton".to_owned(), "20% polyester".to_owned(), "Gender-neutral".to_owned()],
            variants: vec![
                Variant {
                    id: 2234,
                    color: "green".to_owned(),
                    image: "./assets/vmSocks-green.jpeg".to_owned(),
                    quantity: 15,
                },
                Variant {
                    id: 2235,
                    color: "blue".to_owned(),
                    image: "./assets/vmSocks-blue.png".to_owned(),
                    quantity: 0,
                },
            ],
            on_sale: false,
            premium: true,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a catalog override.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the catalog can back a product selection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.id) {
                return Err(ConfigError::DuplicateVariant(variant.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
