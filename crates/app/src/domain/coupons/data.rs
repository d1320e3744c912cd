//! Coupons Data

use coupons::coupons::DiscountRule;

/// New Coupon Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub rule: DiscountRule,
}

/// Coupon Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct CouponUpdate {
    pub rule: DiscountRule,
}
