//! Create Coupon Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use coupons_app::domain::coupons::data::NewCoupon;

use crate::{
    coupons::{errors::into_status_error, requests::CouponRuleBody, responses::CouponResponse},
    extensions::*,
};

/// Create Coupon Handler
#[endpoint(
    tags("coupons"),
    summary = "Create Coupon",
    responses(
        (status_code = StatusCode::CREATED, description = "Coupon created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid coupon rule"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CouponRuleBody>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let created = state
        .coupons
        .create_coupon(NewCoupon {
            rule: json.into_inner().into(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/coupons/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use coupons::coupons::{CouponId, DiscountRule, RuleError, types::CartWiseRule};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use coupons_app::domain::coupons::{CouponsServiceError, MockCouponsService};

    use crate::test_helpers::{coupons_service, make_record};

    use super::*;

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("coupons").post(handler))
    }

    #[tokio::test]
    async fn create_coupon_returns_201_with_location() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .withf(|new| new.rule == DiscountRule::from(CartWiseRule::new(100, 10)))
            .return_once(|new| Ok(make_record(CouponId::new(7), new.rule)));

        let mut res = TestClient::post("http://example.com/coupons")
            .json(&json!({
                "type": "cart-wise",
                "details": { "threshold": 100, "discount": 10 }
            }))
            .send(&make_service(coupons))
            .await;

        let body: CouponResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/coupons/7"));
        assert_eq!(body.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn create_coupon_invalid_rule_returns_400() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .return_once(|_| {
                Err(CouponsServiceError::InvalidRule(
                    RuleError::InvalidDiscount(150),
                ))
            });

        let res = TestClient::post("http://example.com/coupons")
            .json(&json!({
                "type": "cart-wise",
                "details": { "threshold": 100, "discount": 150 }
            }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn create_coupon_unknown_type_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/coupons")
            .json(&json!({
                "type": "free-shipping",
                "details": { "threshold": 100 }
            }))
            .send(&make_service(MockCouponsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
