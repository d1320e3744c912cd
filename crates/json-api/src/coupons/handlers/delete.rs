//! Delete Coupon Handler

use coupons::coupons::CouponId;
use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{coupons::errors::into_status_error, extensions::*};

/// Delete Coupon Handler
#[endpoint(
    tags("coupons"),
    summary = "Delete Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .coupons
        .delete_coupon(CouponId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
