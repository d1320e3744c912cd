//! Rule Evaluation
//!
//! The outcome of checking one rule against one cart. Inapplicability is data, never an error.

use rustc_hash::FxHashMap;

use crate::products::ProductId;

/// How an awarded discount is spread over the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    /// The discount applies to the cart as a whole and is not attributed to any line.
    Cart,

    /// The discount is attributed to the first line of each product in the map.
    Products(FxHashMap<ProductId, u64>),
}

/// A discount a rule would grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    amount: u64,
    attribution: Attribution,
}

impl Award {
    /// Award a cart-level discount.
    pub fn cart(amount: u64) -> Self {
        Self {
            amount,
            attribution: Attribution::Cart,
        }
    }

    /// Award a discount on a single product.
    pub fn product(product: ProductId, amount: u64) -> Self {
        let mut discounts = FxHashMap::default();
        discounts.insert(product, amount);

        Self::products(discounts)
    }

    /// Award per-product discounts; the total is the sum of the map.
    pub fn products(discounts: FxHashMap<ProductId, u64>) -> Self {
        let amount = discounts
            .values()
            .fold(0u64, |total, discount| total.saturating_add(*discount));

        Self {
            amount,
            attribution: Attribution::Products(discounts),
        }
    }

    /// Total discount in minor units.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// How the discount is spread over the cart.
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }
}

/// Why a rule does not apply to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// Cart total is below the rule threshold.
    BelowThreshold {
        /// Cart total
        total: u64,
        /// Rule threshold
        threshold: u64,
    },

    /// The discounted product is not in the cart.
    ProductNotInCart(ProductId),

    /// A required buy product is not in the cart.
    BuyProductNotInCart(ProductId),

    /// Not enough buy units for a single repetition.
    InsufficientBuyUnits {
        /// Buy units found in the cart
        available: u64,
        /// Buy units needed per repetition
        required: u64,
    },

    /// The rule conditions hold but nothing would be discounted.
    NoDiscount,
}

/// Result of evaluating a rule against a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The rule applies and grants the award.
    Applicable(Award),

    /// The rule does not apply.
    NotApplicable(Ineligibility),
}

impl Evaluation {
    /// Return the award if the rule applies.
    pub fn award(&self) -> Option<&Award> {
        match self {
            Evaluation::Applicable(award) => Some(award),
            Evaluation::NotApplicable(_) => None,
        }
    }

    /// Discount granted, zero when not applicable.
    pub fn amount(&self) -> u64 {
        self.award().map_or(0, Award::amount)
    }

    /// Whether the rule yields a nonzero discount.
    pub fn is_eligible(&self) -> bool {
        self.amount() > 0
    }
}
