//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use coupons::{
    applications::apply_with_observer,
    cart::{Cart, PricedItem},
    coupons::CouponId,
    eligibility::{DiscountCandidate, find_applicable_with_observer},
    receipt::DiscountedCart,
};
use mockall::automock;
use tracing::debug;

use crate::{
    catalog::Catalog,
    domain::{
        carts::{data::CartLine, errors::CartsServiceError},
        coupons::CouponsService,
    },
    observer::TracingObserver,
};

#[derive(Clone)]
pub struct DefaultCartsService {
    catalog: Arc<dyn Catalog>,
    coupons: Arc<dyn CouponsService>,
}

impl DefaultCartsService {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, coupons: Arc<dyn CouponsService>) -> Self {
        Self { catalog, coupons }
    }

    fn price_cart(&self, lines: &[CartLine]) -> Result<Cart, CartsServiceError> {
        lines
            .iter()
            .map(|line| {
                if line.quantity == 0 {
                    return Err(CartsServiceError::InvalidQuantity(line.product_id));
                }

                let unit_price = self.catalog.price_of(line.product_id)?;

                Ok(PricedItem::new(line.product_id, line.quantity, unit_price))
            })
            .collect()
    }
}

impl std::fmt::Debug for DefaultCartsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for DefaultCartsService {
    async fn applicable_coupons(
        &self,
        lines: Vec<CartLine>,
    ) -> Result<Vec<DiscountCandidate>, CartsServiceError> {
        let cart = self.price_cart(&lines)?;

        if cart.is_empty() {
            return Ok(Vec::new());
        }

        let coupons = self.coupons.snapshot().await;

        let candidates = find_applicable_with_observer(&cart, &coupons, &mut TracingObserver);

        debug!(
            coupons = coupons.len(),
            candidates = candidates.len(),
            "applicable coupons found"
        );

        Ok(candidates)
    }

    async fn apply_coupon(
        &self,
        coupon: CouponId,
        lines: Vec<CartLine>,
    ) -> Result<DiscountedCart, CartsServiceError> {
        let cart = self.price_cart(&lines)?;
        let record = self.coupons.get_coupon(coupon).await?;

        Ok(apply_with_observer(&cart, &record.rule, &mut TracingObserver))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Prices the cart and lists every coupon that currently discounts it.
    async fn applicable_coupons(
        &self,
        lines: Vec<CartLine>,
    ) -> Result<Vec<DiscountCandidate>, CartsServiceError>;

    /// Prices the cart and applies a single coupon to it.
    async fn apply_coupon(
        &self,
        coupon: CouponId,
        lines: Vec<CartLine>,
    ) -> Result<DiscountedCart, CartsServiceError>;
}
