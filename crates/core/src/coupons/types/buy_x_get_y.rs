//! Buy-X-get-Y Rule
//!
//! Buying enough units of the buy set grants units of the get set for free, repeatable up
//! to a limit. The number of buy units per repetition is taken from the first buy entry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    coupons::{
        RuleError,
        evaluation::{Award, Evaluation, Ineligibility},
    },
    products::ProductId,
};

/// A product and the number of units a rule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponProduct {
    /// Product
    pub product_id: ProductId,

    /// Units per repetition
    pub quantity: u32,
}

impl CouponProduct {
    /// Create a new coupon product entry.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Buy or get product list.
pub type CouponProducts = SmallVec<[CouponProduct; 4]>;

/// Buy-X-get-Y rule details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BxGyRule {
    /// Products that must be bought
    pub buy_products: CouponProducts,

    /// Products granted for free
    pub get_products: CouponProducts,

    /// Maximum number of repetitions per cart
    #[serde(alias = "repition_limit")]
    pub repetition_limit: u32,
}

impl BxGyRule {
    /// Create a new buy-X-get-Y rule.
    pub fn new(
        buy_products: impl Into<CouponProducts>,
        get_products: impl Into<CouponProducts>,
        repetition_limit: u32,
    ) -> Self {
        Self {
            buy_products: buy_products.into(),
            get_products: get_products.into(),
            repetition_limit,
        }
    }

    /// Check the rule details.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] for empty product lists, zero quantities or a zero
    /// repetition limit.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.buy_products.is_empty() {
            return Err(RuleError::EmptyBuyProducts);
        }

        if self.get_products.is_empty() {
            return Err(RuleError::EmptyGetProducts);
        }

        if let Some(product) = self
            .buy_products
            .iter()
            .chain(&self.get_products)
            .find(|product| product.quantity == 0)
        {
            return Err(RuleError::InvalidQuantity(product.product_id));
        }

        if self.repetition_limit == 0 {
            return Err(RuleError::InvalidRepetitionLimit);
        }

        Ok(())
    }

    /// Units of the buy set needed for one repetition.
    pub fn required_units_per_repetition(&self) -> u64 {
        self.buy_products
            .first()
            .map_or(0, |product| u64::from(product.quantity))
    }

    /// Evaluate against the cart.
    ///
    /// Every buy product must be present. Get products missing from the cart contribute
    /// nothing, and each get entry is capped by how many units the cart holds.
    pub fn evaluate(&self, cart: &Cart) -> Evaluation {
        let index = cart.index();

        let mut available = 0u64;

        for product in &self.buy_products {
            let Some(item) = index.get(&product.product_id) else {
                return Evaluation::NotApplicable(Ineligibility::BuyProductNotInCart(
                    product.product_id,
                ));
            };

            available = available.saturating_add(u64::from(item.quantity()));
        }

        let required = self.required_units_per_repetition();

        let repetitions = available
            .checked_div(required)
            .unwrap_or(0)
            .min(u64::from(self.repetition_limit));

        if repetitions == 0 {
            return Evaluation::NotApplicable(Ineligibility::InsufficientBuyUnits {
                available,
                required,
            });
        }

        let mut discounts: FxHashMap<ProductId, u64> = FxHashMap::default();

        for product in &self.get_products {
            let Some(item) = index.get(&product.product_id) else {
                continue;
            };

            let per_repetition = u64::from(product.quantity);

            let granted = u64::from(item.quantity())
                .checked_div(per_repetition)
                .unwrap_or(0)
                .min(repetitions);

            let contribution = per_repetition
                .saturating_mul(item.unit_price())
                .saturating_mul(granted);

            let discount = discounts.entry(product.product_id).or_insert(0);
            *discount = discount.saturating_add(contribution).min(item.line_total());
        }

        discounts.retain(|_, discount| *discount > 0);

        if discounts.is_empty() {
            return Evaluation::NotApplicable(Ineligibility::NoDiscount);
        }

        Evaluation::Applicable(Award::products(discounts))
    }
}
