//! Tracing Observer

use coupons::{
    cart::Cart,
    coupons::{
        CouponId, RuleKind,
        evaluation::{Evaluation, Ineligibility},
    },
    observer::EvaluationObserver,
    receipt::DiscountedCart,
};
use tracing::{debug, trace};

/// Forwards engine events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EvaluationObserver for TracingObserver {
    fn on_cart_priced(&mut self, cart: &Cart, total_price: u64) {
        debug!(lines = cart.len(), total_price, "cart priced");
    }

    fn on_rule_evaluated(
        &mut self,
        coupon_id: Option<CouponId>,
        kind: RuleKind,
        evaluation: &Evaluation,
    ) {
        let coupon_id = coupon_id.map(CouponId::get);

        match evaluation {
            Evaluation::Applicable(award) => {
                trace!(
                    coupon_id,
                    kind = kind.as_str(),
                    discount = award.amount(),
                    "rule applicable"
                );
            }
            Evaluation::NotApplicable(reason) => {
                trace!(
                    coupon_id,
                    kind = kind.as_str(),
                    reason = describe(reason),
                    "rule not applicable"
                );
            }
        }
    }

    fn on_rule_applied(&mut self, kind: RuleKind, discounted: &DiscountedCart) {
        debug!(
            kind = kind.as_str(),
            total_price = discounted.total_price,
            total_discount = discounted.total_discount,
            final_price = discounted.final_price,
            "rule applied"
        );
    }
}

fn describe(reason: &Ineligibility) -> &'static str {
    match reason {
        Ineligibility::BelowThreshold { .. } => "below_threshold",
        Ineligibility::ProductNotInCart(_) => "product_not_in_cart",
        Ineligibility::BuyProductNotInCart(_) => "buy_product_not_in_cart",
        Ineligibility::InsufficientBuyUnits { .. } => "insufficient_buy_units",
        Ineligibility::NoDiscount => "no_discount",
    }
}

#[cfg(test)]
mod tests {
    use coupons::{
        applications::apply_with_observer,
        cart::PricedItem,
        coupons::{Coupon, types::CartWiseRule},
        eligibility::find_applicable_with_observer,
        products::ProductId,
    };

    use super::*;

    #[test]
    fn reasons_map_to_log_names() {
        let product = ProductId::new(4);

        let cases = [
            (
                Ineligibility::BelowThreshold {
                    total: 90,
                    threshold: 100,
                },
                "below_threshold",
            ),
            (Ineligibility::ProductNotInCart(product), "product_not_in_cart"),
            (
                Ineligibility::BuyProductNotInCart(product),
                "buy_product_not_in_cart",
            ),
            (
                Ineligibility::InsufficientBuyUnits {
                    available: 1,
                    required: 2,
                },
                "insufficient_buy_units",
            ),
            (Ineligibility::NoDiscount, "no_discount"),
        ];

        for (reason, name) in cases {
            assert_eq!(describe(&reason), name, "wrong log name for {reason:?}");
        }
    }

    #[test]
    fn observes_evaluation_and_application() {
        let cart = Cart::new([PricedItem::new(ProductId::new(1), 3, 50)]);
        let coupons = [
            Coupon::new(CouponId::new(1), CartWiseRule::new(100, 10)),
            Coupon::new(CouponId::new(2), CartWiseRule::new(500, 10)),
        ];

        let candidates = find_applicable_with_observer(&cart, &coupons, &mut TracingObserver);

        assert_eq!(candidates.len(), 1, "only the reachable threshold applies");

        let discounted = apply_with_observer(
            &cart,
            &CartWiseRule::new(100, 10).into(),
            &mut TracingObserver,
        );

        assert_eq!(discounted.final_price, 135);
    }
}
