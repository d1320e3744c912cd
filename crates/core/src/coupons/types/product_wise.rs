//! Product-wise Rule
//!
//! A percentage off the line holding one specific product.

use serde::{Deserialize, Serialize};

use crate::{
    cart::Cart,
    coupons::{
        RuleError,
        evaluation::{Award, Evaluation, Ineligibility},
    },
    discounts::{MAX_PERCENT, percent_of},
    products::ProductId,
};

/// Product-wise rule details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWiseRule {
    /// Discounted product
    pub product_id: ProductId,

    /// Percentage off the product line
    pub discount: u8,
}

impl ProductWiseRule {
    /// Create a new product-wise rule.
    pub fn new(product_id: ProductId, discount: u8) -> Self {
        Self {
            product_id,
            discount,
        }
    }

    /// Check the rule details.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidDiscount`] when the percentage exceeds 100.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.discount > MAX_PERCENT {
            return Err(RuleError::InvalidDiscount(self.discount));
        }

        Ok(())
    }

    /// Evaluate against the first cart line holding the product.
    pub fn evaluate(&self, cart: &Cart) -> Evaluation {
        let Some(item) = cart.find(self.product_id) else {
            return Evaluation::NotApplicable(Ineligibility::ProductNotInCart(self.product_id));
        };

        Evaluation::Applicable(Award::product(
            self.product_id,
            percent_of(self.discount, item.line_total()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::PricedItem;

    use super::*;

    #[test]
    fn discounts_matching_line() {
        let cart = Cart::new([
            PricedItem::new(ProductId::new(1), 1, 100),
            PricedItem::new(ProductId::new(2), 1, 50),
        ]);

        let rule = ProductWiseRule::new(ProductId::new(1), 20);

        assert_eq!(
            rule.evaluate(&cart),
            Evaluation::Applicable(Award::product(ProductId::new(1), 20))
        );
    }

    #[test]
    fn uses_whole_line_total() {
        let cart = Cart::new([PricedItem::new(ProductId::new(4), 3, 40)]);

        let rule = ProductWiseRule::new(ProductId::new(4), 15);

        assert_eq!(rule.evaluate(&cart).amount(), 18);
    }

    #[test]
    fn first_line_wins_for_repeated_products() {
        let cart = Cart::new([
            PricedItem::new(ProductId::new(1), 1, 100),
            PricedItem::new(ProductId::new(1), 10, 100),
        ]);

        let rule = ProductWiseRule::new(ProductId::new(1), 50);

        assert_eq!(rule.evaluate(&cart).amount(), 50);
    }

    #[test]
    fn missing_product_is_not_applicable() {
        let cart = Cart::new([PricedItem::new(ProductId::new(2), 1, 50)]);

        let rule = ProductWiseRule::new(ProductId::new(1), 20);

        assert_eq!(
            rule.evaluate(&cart),
            Evaluation::NotApplicable(Ineligibility::ProductNotInCart(ProductId::new(1)))
        );
    }
}
