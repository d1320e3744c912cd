//! Carts service errors.

use coupons::products::ProductId;
use thiserror::Error;

use crate::{catalog::CatalogError, domain::coupons::CouponsServiceError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("quantity for product {0} must be at least 1")]
    InvalidQuantity(ProductId),

    #[error("cart could not be priced")]
    Pricing(#[from] CatalogError),

    #[error("coupon not found")]
    CouponNotFound,

    /// The coupon store failed a lookup for a reason other than a missing coupon. The
    /// in-memory store never does, but other [`CouponsService`] implementations may.
    ///
    /// [`CouponsService`]: crate::domain::coupons::CouponsService
    #[error("coupons unavailable")]
    Coupons(#[source] CouponsServiceError),
}

impl From<CouponsServiceError> for CartsServiceError {
    fn from(error: CouponsServiceError) -> Self {
        match error {
            CouponsServiceError::NotFound => Self::CouponNotFound,
            other @ CouponsServiceError::InvalidRule(_) => Self::Coupons(other),
        }
    }
}
