//! Coupon Requests

use coupons::{
    coupons::{
        DiscountRule,
        types::{BxGyRule, CartWiseRule, CouponProduct, ProductWiseRule},
    },
    products::ProductId,
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Product reference inside a buy-X-get-Y rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponProductBody {
    /// Product id
    pub product_id: u64,

    /// Units per repetition
    pub quantity: u32,
}

/// Cart-wise rule details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartWiseDetails {
    /// Minimum cart total in minor units, inclusive
    pub threshold: u64,

    /// Percentage off the cart total
    pub discount: u8,
}

/// Product-wise rule details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductWiseDetails {
    /// Discounted product id
    pub product_id: u64,

    /// Percentage off the product line
    pub discount: u8,
}

/// Buy-X-get-Y rule details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct BxGyDetails {
    /// Products that must be bought
    pub buy_products: Vec<CouponProductBody>,

    /// Products granted for free
    pub get_products: Vec<CouponProductBody>,

    /// Maximum repetitions per cart
    #[serde(alias = "repition_limit")]
    pub repetition_limit: u32,
}

/// Coupon rule, tagged by type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "details")]
pub(crate) enum CouponRuleBody {
    #[serde(rename = "cart-wise")]
    CartWise(CartWiseDetails),

    #[serde(rename = "product-wise")]
    ProductWise(ProductWiseDetails),

    #[serde(rename = "bxgy")]
    BxGy(BxGyDetails),
}

impl From<CouponProductBody> for CouponProduct {
    fn from(body: CouponProductBody) -> Self {
        CouponProduct::new(ProductId::new(body.product_id), body.quantity)
    }
}

impl From<CouponProduct> for CouponProductBody {
    fn from(product: CouponProduct) -> Self {
        CouponProductBody {
            product_id: product.product_id.get(),
            quantity: product.quantity,
        }
    }
}

impl From<CouponRuleBody> for DiscountRule {
    fn from(body: CouponRuleBody) -> Self {
        match body {
            CouponRuleBody::CartWise(details) => {
                CartWiseRule::new(details.threshold, details.discount).into()
            }
            CouponRuleBody::ProductWise(details) => {
                ProductWiseRule::new(ProductId::new(details.product_id), details.discount).into()
            }
            CouponRuleBody::BxGy(details) => BxGyRule::new(
                details
                    .buy_products
                    .into_iter()
                    .map(Into::into)
                    .collect::<Vec<CouponProduct>>(),
                details
                    .get_products
                    .into_iter()
                    .map(Into::into)
                    .collect::<Vec<CouponProduct>>(),
                details.repetition_limit,
            )
            .into(),
        }
    }
}

impl From<DiscountRule> for CouponRuleBody {
    fn from(rule: DiscountRule) -> Self {
        match rule {
            DiscountRule::CartWise(rule) => CouponRuleBody::CartWise(CartWiseDetails {
                threshold: rule.threshold,
                discount: rule.discount,
            }),
            DiscountRule::ProductWise(rule) => CouponRuleBody::ProductWise(ProductWiseDetails {
                product_id: rule.product_id.get(),
                discount: rule.discount,
            }),
            DiscountRule::BxGy(rule) => CouponRuleBody::BxGy(BxGyDetails {
                buy_products: rule.buy_products.into_iter().map(Into::into).collect(),
                get_products: rule.get_products.into_iter().map(Into::into).collect(),
                repetition_limit: rule.repetition_limit,
            }),
        }
    }
}
