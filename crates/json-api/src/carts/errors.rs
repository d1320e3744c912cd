//! Errors

use salvo::http::StatusError;
use tracing::error;

use coupons_app::{catalog::CatalogError, domain::carts::CartsServiceError};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity(product) => StatusError::bad_request()
            .brief(format!("Quantity for product {product} must be at least 1")),
        CartsServiceError::Pricing(CatalogError::ProductNotFound(product)) => {
            StatusError::bad_request().brief(format!("Unknown product {product}"))
        }
        CartsServiceError::CouponNotFound => StatusError::not_found().brief("Coupon not found"),
        CartsServiceError::Coupons(source) => {
            error!("failed to load coupons: {source}");

            StatusError::internal_server_error()
        }
    }
}
