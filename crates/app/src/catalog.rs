//! Catalog
//!
//! Product price lookup. Prices are in minor units.

use coupons::products::ProductId;
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
}

#[automock]
pub trait Catalog: Send + Sync {
    /// Unit price of `product`.
    fn price_of(&self, product: ProductId) -> Result<u64, CatalogError>;
}

/// Fixed catalog where product `n` in `1..=max_product_id` costs `n × price_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCatalog {
    max_product_id: u64,
    price_step: u64,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(max_product_id: u64, price_step: u64) -> Self {
        Self {
            max_product_id,
            price_step,
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl Catalog for StaticCatalog {
    fn price_of(&self, product: ProductId) -> Result<u64, CatalogError> {
        let id = product.get();

        if id == 0 || id > self.max_product_id {
            return Err(CatalogError::ProductNotFound(product));
        }

        Ok(id.saturating_mul(self.price_step))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn prices_scale_with_product_id() -> TestResult {
        let catalog = StaticCatalog::default();

        assert_eq!(catalog.price_of(ProductId::new(1))?, 10);
        assert_eq!(catalog.price_of(ProductId::new(10))?, 100);

        Ok(())
    }

    #[test]
    fn unknown_products_are_rejected() {
        let catalog = StaticCatalog::new(3, 25);

        for id in [0, 4, u64::MAX] {
            let result = catalog.price_of(ProductId::new(id));

            assert!(
                matches!(result, Err(CatalogError::ProductNotFound(product)) if product.get() == id),
                "expected ProductNotFound for {id}, got {result:?}"
            );
        }
    }
}
