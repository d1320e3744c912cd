//! Catalog Config

use clap::Args;

/// Static product catalog settings. Product `n` costs `n × price_step`.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Highest known product id
    #[arg(
        long = "catalog-max-product-id",
        env = "CATALOG_MAX_PRODUCT_ID",
        default_value_t = 10
    )]
    pub max_product_id: u64,

    /// Price increment per product id, in minor units
    #[arg(
        long = "catalog-price-step",
        env = "CATALOG_PRICE_STEP",
        default_value_t = 10
    )]
    pub price_step: u64,
}
