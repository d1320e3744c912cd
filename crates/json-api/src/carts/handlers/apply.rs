//! Apply Coupon Handler

use coupons::coupons::CouponId;
use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    carts::{errors::into_status_error, requests::CartRequest, responses::ApplyCouponResponse},
    extensions::*,
};

/// Apply Coupon Handler
///
/// Applies one coupon and returns the itemized cart. A coupon that does not apply leaves
/// the cart undiscounted.
#[endpoint(
    tags("carts"),
    summary = "Apply Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon applied"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<CartRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplyCouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let discounted = state
        .carts
        .apply_coupon(CouponId::new(id.into_inner()), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApplyCouponResponse {
        updated_cart: discounted.into(),
    }))
}
