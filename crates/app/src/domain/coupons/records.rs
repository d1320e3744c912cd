//! Coupon Records

use coupons::coupons::{Coupon, CouponId, DiscountRule};
use jiff::Timestamp;

/// Coupon Record
#[derive(Debug, Clone, PartialEq)]
pub struct CouponRecord {
    pub id: CouponId,
    pub rule: DiscountRule,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CouponRecord> for Coupon {
    fn from(record: CouponRecord) -> Self {
        Coupon::new(record.id, record.rule)
    }
}
