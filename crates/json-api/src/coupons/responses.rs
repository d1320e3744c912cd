//! Coupon Responses

use coupons_app::domain::coupons::records::CouponRecord;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crate::coupons::requests::CouponRuleBody;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    /// Coupon id
    pub id: u64,

    /// Discount rule
    #[serde(flatten)]
    pub rule: CouponRuleBody,

    /// The date and time the coupon was created
    pub created_at: String,

    /// The date and time the coupon was last updated
    pub updated_at: String,
}

impl From<CouponRecord> for CouponResponse {
    fn from(record: CouponRecord) -> Self {
        CouponResponse {
            id: record.id.get(),
            rule: record.rule.into(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponsResponse {
    /// Every stored coupon, ordered by id
    pub coupons: Vec<CouponResponse>,
}
