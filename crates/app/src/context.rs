//! App Context

use std::sync::Arc;

use coupons::coupons::DiscountRule;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::Catalog,
    domain::{
        carts::{CartsService, DefaultCartsService},
        coupons::{CouponsService, CouponsServiceError, InMemoryCouponsService, data::NewCoupon},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to seed coupon {index}")]
    Seed {
        index: usize,
        #[source]
        source: CouponsServiceError,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub coupons: Arc<dyn CouponsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build an in-memory application context, storing `seed` in order.
    ///
    /// # Errors
    ///
    /// Returns an error when a seed rule fails validation.
    pub async fn in_memory(
        catalog: Arc<dyn Catalog>,
        seed: Vec<DiscountRule>,
    ) -> Result<Self, AppInitError> {
        let coupons: Arc<dyn CouponsService> = Arc::new(InMemoryCouponsService::new());

        let seeded = seed.len();

        for (index, rule) in seed.into_iter().enumerate() {
            coupons
                .create_coupon(NewCoupon { rule })
                .await
                .map_err(|source| AppInitError::Seed { index, source })?;
        }

        if seeded > 0 {
            info!(coupons = seeded, "coupon store seeded");
        }

        Ok(Self {
            carts: Arc::new(DefaultCartsService::new(catalog, Arc::clone(&coupons))),
            coupons,
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
