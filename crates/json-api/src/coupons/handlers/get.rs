//! Get Coupon Handler

use coupons::coupons::CouponId;
use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    coupons::{errors::into_status_error, responses::CouponResponse},
    extensions::*,
};

/// Get Coupon Handler
///
/// Returns a coupon.
#[endpoint(
    tags("coupons"),
    summary = "Get Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon found"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupon = state
        .coupons
        .get_coupon(CouponId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(coupon.into()))
}

#[cfg(test)]
mod tests {
    use coupons::coupons::types::CartWiseRule;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use coupons_app::domain::coupons::{CouponsServiceError, MockCouponsService};

    use crate::{
        coupons::requests::{CartWiseDetails, CouponRuleBody},
        test_helpers::{coupons_service, make_record},
    };

    use super::*;

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("coupons/{id}").get(handler))
    }

    #[tokio::test]
    async fn get_returns_coupon() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_get_coupon()
            .once()
            .withf(|id| *id == CouponId::new(5))
            .return_once(|id| Ok(make_record(id, CartWiseRule::new(300, 15).into())));

        let mut res = TestClient::get("http://example.com/coupons/5")
            .send(&make_service(coupons))
            .await;

        let body: CouponResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);
        assert_eq!(
            body.rule,
            CouponRuleBody::CartWise(CartWiseDetails {
                threshold: 300,
                discount: 15,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_coupon_returns_404() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_get_coupon()
            .once()
            .return_once(|_| Err(CouponsServiceError::NotFound));

        let res = TestClient::get("http://example.com/coupons/99")
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn get_non_numeric_id_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/coupons/abc")
            .send(&make_service(MockCouponsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
