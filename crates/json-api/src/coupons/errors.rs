//! Coupon Errors

use salvo::http::StatusError;
use tracing::debug;

use coupons_app::domain::coupons::CouponsServiceError;

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::NotFound => {
            debug!("coupon not found");

            StatusError::not_found().brief("Coupon not found")
        }
        CouponsServiceError::InvalidRule(source) => {
            StatusError::bad_request().brief(format!("Invalid coupon rule: {source}"))
        }
    }
}
