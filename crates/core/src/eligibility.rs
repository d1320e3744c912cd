//! Eligibility
//!
//! Find every coupon that currently yields a discount for a cart.

use serde::Serialize;

use crate::{
    cart::Cart,
    coupons::{Coupon, CouponId, RuleKind},
    observer::{EvaluationObserver, NoopObserver},
};

/// A coupon that applies to the cart, with the discount it would grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountCandidate {
    /// Coupon identifier
    pub coupon_id: CouponId,

    /// Rule type
    #[serde(rename = "type")]
    pub kind: RuleKind,

    /// Discount in minor units, always nonzero
    pub discount: u64,
}

/// Evaluate `coupons` against `cart` and return the applicable ones in input order.
pub fn find_applicable<'c>(
    cart: &Cart,
    coupons: impl IntoIterator<Item = &'c Coupon>,
) -> Vec<DiscountCandidate> {
    find_applicable_with_observer(cart, coupons, &mut NoopObserver)
}

/// Like [`find_applicable`], reporting each step to `observer`.
pub fn find_applicable_with_observer<'c, O: EvaluationObserver + ?Sized>(
    cart: &Cart,
    coupons: impl IntoIterator<Item = &'c Coupon>,
    observer: &mut O,
) -> Vec<DiscountCandidate> {
    if cart.is_empty() {
        return Vec::new();
    }

    let total_price = cart.total_price();

    observer.on_cart_priced(cart, total_price);

    let mut candidates = Vec::new();

    for coupon in coupons {
        let kind = coupon.rule.kind();
        let evaluation = coupon.rule.evaluate(cart, total_price);

        observer.on_rule_evaluated(Some(coupon.id), kind, &evaluation);

        if evaluation.is_eligible() {
            candidates.push(DiscountCandidate {
                coupon_id: coupon.id,
                kind,
                discount: evaluation.amount(),
            });
        }
    }

    candidates
}
