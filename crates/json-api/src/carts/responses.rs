//! Cart Responses

use coupons::{
    eligibility::DiscountCandidate,
    receipt::{DiscountedCart, DiscountedItem},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// A coupon that currently discounts the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplicableCouponResponse {
    /// Coupon id
    pub coupon_id: u64,

    /// Rule type
    #[serde(rename = "type")]
    pub kind: String,

    /// Discount in minor units
    pub discount: u64,
}

impl From<DiscountCandidate> for ApplicableCouponResponse {
    fn from(candidate: DiscountCandidate) -> Self {
        ApplicableCouponResponse {
            coupon_id: candidate.coupon_id.get(),
            kind: candidate.kind.as_str().to_owned(),
            discount: candidate.discount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplicableCouponsResponse {
    /// Applicable coupons, ordered by coupon id
    pub applicable_coupons: Vec<ApplicableCouponResponse>,
}

/// Cart line after a coupon has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountedItemResponse {
    pub product_id: u64,
    pub quantity: u32,

    /// Unit price in minor units
    pub unit_price: u64,

    /// Discount attributed to this line
    pub discount: u64,
}

impl From<DiscountedItem> for DiscountedItemResponse {
    fn from(item: DiscountedItem) -> Self {
        DiscountedItemResponse {
            product_id: item.product_id.get(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            discount: item.discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountedCartResponse {
    pub items: Vec<DiscountedItemResponse>,
    pub total_price: u64,
    pub total_discount: u64,
    pub final_price: u64,
}

impl From<DiscountedCart> for DiscountedCartResponse {
    fn from(cart: DiscountedCart) -> Self {
        DiscountedCartResponse {
            items: cart.items.into_iter().map(Into::into).collect(),
            total_price: cart.total_price,
            total_discount: cart.total_discount,
            final_price: cart.final_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyCouponResponse {
    /// Itemized cart with the coupon applied
    pub updated_cart: DiscountedCartResponse,
}
