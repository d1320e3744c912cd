//! Evaluation Observer

use crate::{
    cart::Cart,
    coupons::{CouponId, RuleKind, evaluation::Evaluation},
    receipt::DiscountedCart,
};

/// Observer trait for following the engine as it evaluates and applies rules.
///
/// The engine itself never logs. Callers that want structured events pass an observer
/// to the `*_with_observer` entry points; everything else goes through [`NoopObserver`],
/// whose empty callbacks are optimized away via monomorphization.
pub trait EvaluationObserver {
    /// Called once per engine call, after the cart total is known.
    ///
    /// # Parameters
    ///
    /// - `cart`: The cart being evaluated
    /// - `total_price`: Sum of every line total in minor units
    fn on_cart_priced(&mut self, _cart: &Cart, _total_price: u64) {}

    /// Called after a single rule has been evaluated.
    ///
    /// # Parameters
    ///
    /// - `coupon_id`: Coupon holding the rule, when the rule came from a coupon
    /// - `kind`: Rule type
    /// - `evaluation`: Outcome, including the reason when the rule does not apply
    fn on_rule_evaluated(
        &mut self,
        _coupon_id: Option<CouponId>,
        _kind: RuleKind,
        _evaluation: &Evaluation,
    ) {
    }

    /// Called after a rule has been applied to produce an itemized cart.
    fn on_rule_applied(&mut self, _kind: RuleKind, _discounted: &DiscountedCart) {}
}

/// No-op observer used when no observation is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {}
