//! Test helpers.

use std::sync::Arc;

use coupons::coupons::{CouponId, DiscountRule};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use coupons_app::domain::{
    carts::MockCartsService, coupons::MockCouponsService, coupons::records::CouponRecord,
};

use crate::state::State;

fn strict_coupons_mock() -> MockCouponsService {
    let mut coupons = MockCouponsService::new();

    coupons.expect_list_coupons().never();
    coupons.expect_get_coupon().never();
    coupons.expect_create_coupon().never();
    coupons.expect_update_coupon().never();
    coupons.expect_delete_coupon().never();
    coupons.expect_snapshot().never();

    coupons
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_applicable_coupons().never();
    carts.expect_apply_coupon().never();

    carts
}

fn service_with_state(state: State, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(Arc::new(state))).push(route))
}

pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    service_with_state(
        State::new(Arc::new(coupons), Arc::new(strict_carts_mock())),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with_state(
        State::new(Arc::new(strict_coupons_mock()), Arc::new(carts)),
        route,
    )
}

pub(crate) fn make_record(id: CouponId, rule: DiscountRule) -> CouponRecord {
    CouponRecord {
        id,
        rule,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
