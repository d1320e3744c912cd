//! Applicable Coupons Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{
        errors::into_status_error, requests::CartRequest, responses::ApplicableCouponsResponse,
    },
    extensions::*,
};

/// Applicable Coupons Handler
///
/// Prices the cart from the catalog and lists every coupon that would discount it.
#[endpoint(
    tags("carts"),
    summary = "List Applicable Coupons",
    responses(
        (status_code = StatusCode::OK, description = "Applicable coupons"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartRequest>,
    depot: &mut Depot,
) -> Result<Json<ApplicableCouponsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let candidates = state
        .carts
        .applicable_coupons(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApplicableCouponsResponse {
        applicable_coupons: candidates.into_iter().map(Into::into).collect(),
    }))
}
