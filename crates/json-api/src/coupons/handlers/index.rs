//! Coupon Index Handler

use salvo::prelude::*;

use crate::{
    coupons::{errors::into_status_error, responses::CouponsResponse},
    extensions::*,
};

/// Coupon Index Handler
///
/// Returns every stored coupon.
#[endpoint(tags("coupons"), summary = "List Coupons")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CouponsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupons = state
        .coupons
        .list_coupons()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CouponsResponse {
        coupons: coupons.into_iter().map(Into::into).collect(),
    }))
}
