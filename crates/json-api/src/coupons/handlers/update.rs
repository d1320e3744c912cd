//! Update Coupon Handler

use coupons::coupons::CouponId;
use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use coupons_app::domain::coupons::data::CouponUpdate;

use crate::{
    coupons::{errors::into_status_error, requests::CouponRuleBody, responses::CouponResponse},
    extensions::*,
};

/// Update Coupon Handler
///
/// Replaces the rule of an existing coupon. The coupon keeps its id.
#[endpoint(
    tags("coupons"),
    summary = "Update Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid coupon rule"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<CouponRuleBody>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let updated = state
        .coupons
        .update_coupon(
            CouponId::new(id.into_inner()),
            CouponUpdate {
                rule: json.into_inner().into(),
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use coupons::{
        coupons::{DiscountRule, types::ProductWiseRule},
        products::ProductId,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use coupons_app::domain::coupons::{CouponsServiceError, MockCouponsService};

    use crate::test_helpers::{coupons_service, make_record};

    use super::*;

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("coupons/{id}").put(handler))
    }

    #[tokio::test]
    async fn update_coupon_returns_updated_rule() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_update_coupon()
            .once()
            .withf(|id, update| {
                *id == CouponId::new(2)
                    && update.rule == DiscountRule::from(ProductWiseRule::new(ProductId::new(3), 30))
            })
            .return_once(|id, update| Ok(make_record(id, update.rule)));

        let mut res = TestClient::put("http://example.com/coupons/2")
            .json(&json!({
                "type": "product-wise",
                "details": { "product_id": 3, "discount": 30 }
            }))
            .send(&make_service(coupons))
            .await;

        let body: CouponResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 2);

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_coupon_returns_404() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_update_coupon()
            .once()
            .return_once(|_, _| Err(CouponsServiceError::NotFound));

        let res = TestClient::put("http://example.com/coupons/2")
            .json(&json!({
                "type": "cart-wise",
                "details": { "threshold": 0, "discount": 5 }
            }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
