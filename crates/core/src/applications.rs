//! Applications
//!
//! Apply one rule to a cart and itemize the result.

use crate::{
    cart::Cart,
    coupons::{
        DiscountRule,
        evaluation::{Attribution, Evaluation},
    },
    observer::{EvaluationObserver, NoopObserver},
    receipt::DiscountedCart,
};

/// Apply `rule` to `cart`.
///
/// A rule that does not apply leaves every line undiscounted; it is not an error.
pub fn apply(cart: &Cart, rule: &DiscountRule) -> DiscountedCart {
    apply_with_observer(cart, rule, &mut NoopObserver)
}

/// Like [`apply`], reporting each step to `observer`.
pub fn apply_with_observer<O: EvaluationObserver + ?Sized>(
    cart: &Cart,
    rule: &DiscountRule,
    observer: &mut O,
) -> DiscountedCart {
    let total_price = cart.total_price();

    observer.on_cart_priced(cart, total_price);

    let evaluation = rule.evaluate(cart, total_price);

    observer.on_rule_evaluated(None, rule.kind(), &evaluation);

    let mut discounted = DiscountedCart::undiscounted(cart, total_price);

    if let Evaluation::Applicable(award) = &evaluation {
        match award.attribution() {
            Attribution::Cart => {
                discounted.total_discount = award.amount().min(total_price);
            }
            Attribution::Products(discounts) => {
                let mut remaining = discounts.clone();

                // Each product's discount lands on its first line only.
                for item in &mut discounted.items {
                    if let Some(discount) = remaining.remove(&item.product_id) {
                        item.discount = discount.min(item.line_total());
                    }
                }

                discounted.total_discount = discounted.line_discounts();
            }
        }

        discounted.final_price = total_price.saturating_sub(discounted.total_discount);
    }

    observer.on_rule_applied(rule.kind(), &discounted);

    discounted
}
