#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::config::{CatalogConfig, ConfigError};
pub use crate::config::Variant;

pub const FREE_SHIPPING: &str = "Free";
pub const STANDARD_SHIPPING: &str = "2.99";

/// Product state: catalog data plus the selected variant.
///
/// Derived values (`title`, `image`, `in_stock`, `shipping`) are recomputed
/// on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductState {
    brand: String,
    name: String,
    details: Vec<String>,
    variants: Vec<Variant>,
    selected: usize,
    on_sale: bool,
    premium: bool,
}

impl Default for ProductState {
    fn default() -> Self {
        Self::from_valid(CatalogConfig::default())
    }
}

impl ProductState {
    /// Build product state from a catalog, selecting the first variant.
    pub fn from_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: CatalogConfig) -> Self {
        Self {
            brand: config.brand,
            name: config.product,
            details: config.details,
            variants: config.variants,
            selected: 0,
            on_sale: config.on_sale,
            premium: config.premium,
        }
    }

    /// Select the variant at `index`. Out-of-range indices are ignored.
    pub fn select_variant(&mut self, index: usize) -> bool {
        if index >= self.variants.len() {
            log::warn!("product: ignoring variant index {index} (have {})", self.variants.len());
            return false;
        }
        self.selected = index;
        true
    }

    /// Id of the selected variant, to be handed to the cart owner.
    #[must_use]
    pub fn add_to_cart(&self) -> u32 {
        self.selected_variant().id
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.selected_variant().quantity > 0
    }

    /// Shipping cost label. Premium customers ship free.
    #[must_use]
    pub fn shipping(&self) -> &'static str {
        if self.premium { FREE_SHIPPING } else { STANDARD_SHIPPING }
    }

    #[must_use]
    pub fn selected_variant(&self) -> &Variant {
        &self.variants[self.selected]
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.on_sale
    }

    #[must_use]
    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn set_premium(&mut self, premium: bool) {
        self.premium = premium;
    }
}
