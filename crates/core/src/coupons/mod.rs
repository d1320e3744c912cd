//! Coupons

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    coupons::{
        evaluation::Evaluation,
        types::{BxGyRule, CartWiseRule, ProductWiseRule},
    },
    products::ProductId,
};

pub mod evaluation;
pub mod types;

/// Stable coupon identifier.
///
/// Identifiers are assigned once and never reused, so removing one coupon does not change
/// the meaning of any other identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(u64);

impl CouponId {
    /// Create a coupon identifier from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CouponId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Percentage off the cart total once a threshold is met.
    #[serde(rename = "cart-wise")]
    CartWise,

    /// Percentage off one product line.
    #[serde(rename = "product-wise")]
    ProductWise,

    /// Buy a set of products, get another set free.
    #[serde(rename = "bxgy")]
    BxGy,
}

impl RuleKind {
    /// Return the wire name of the rule kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleKind::CartWise => "cart-wise",
            RuleKind::ProductWise => "product-wise",
            RuleKind::BxGy => "bxgy",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural problems with a rule definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Percentage outside `0..=100`.
    #[error("discount must be between 0 and 100%, got {0}%")]
    InvalidDiscount(u8),

    /// A buy-X-get-Y rule without buy products.
    #[error("buy product list can not be empty")]
    EmptyBuyProducts,

    /// A buy-X-get-Y rule without get products.
    #[error("get product list can not be empty")]
    EmptyGetProducts,

    /// A buy or get entry asking for zero units.
    #[error("quantity for product {0} should be positive")]
    InvalidQuantity(ProductId),

    /// A buy-X-get-Y rule that can never trigger.
    #[error("repetition limit should be greater than 0")]
    InvalidRepetitionLimit,
}

/// A discount rule, tagged by its type and carrying type-specific details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DiscountRule {
    /// Cart-wise rule
    #[serde(rename = "cart-wise")]
    CartWise(CartWiseRule),

    /// Product-wise rule
    #[serde(rename = "product-wise")]
    ProductWise(ProductWiseRule),

    /// Buy-X-get-Y rule
    #[serde(rename = "bxgy")]
    BxGy(BxGyRule),
}

impl DiscountRule {
    /// Return the rule type discriminator.
    pub fn kind(&self) -> RuleKind {
        match self {
            DiscountRule::CartWise(_) => RuleKind::CartWise,
            DiscountRule::ProductWise(_) => RuleKind::ProductWise,
            DiscountRule::BxGy(_) => RuleKind::BxGy,
        }
    }

    /// Check the structural invariants of the rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] found in the rule details.
    pub fn validate(&self) -> Result<(), RuleError> {
        match self {
            DiscountRule::CartWise(rule) => rule.validate(),
            DiscountRule::ProductWise(rule) => rule.validate(),
            DiscountRule::BxGy(rule) => rule.validate(),
        }
    }

    /// Evaluate the rule against `cart`, whose total has already been computed.
    pub fn evaluate(&self, cart: &Cart, cart_total: u64) -> Evaluation {
        match self {
            DiscountRule::CartWise(rule) => rule.evaluate(cart_total),
            DiscountRule::ProductWise(rule) => rule.evaluate(cart),
            DiscountRule::BxGy(rule) => rule.evaluate(cart),
        }
    }
}

impl From<CartWiseRule> for DiscountRule {
    fn from(rule: CartWiseRule) -> Self {
        DiscountRule::CartWise(rule)
    }
}

impl From<ProductWiseRule> for DiscountRule {
    fn from(rule: ProductWiseRule) -> Self {
        DiscountRule::ProductWise(rule)
    }
}

impl From<BxGyRule> for DiscountRule {
    fn from(rule: BxGyRule) -> Self {
        DiscountRule::BxGy(rule)
    }
}

/// A stored rule together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Coupon identifier
    pub id: CouponId,

    /// Discount rule
    pub rule: DiscountRule,
}

impl Coupon {
    /// Create a new coupon.
    pub fn new(id: CouponId, rule: impl Into<DiscountRule>) -> Self {
        Self {
            id,
            rule: rule.into(),
        }
    }
}
