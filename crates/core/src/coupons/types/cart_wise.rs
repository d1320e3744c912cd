//! Cart-wise Rule
//!
//! A percentage off the whole cart once its total reaches a threshold.

use serde::{Deserialize, Serialize};

use crate::{
    coupons::{
        RuleError,
        evaluation::{Award, Evaluation, Ineligibility},
    },
    discounts::{MAX_PERCENT, percent_of},
};

/// Cart-wise rule details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartWiseRule {
    /// Minimum cart total, inclusive, in minor units
    pub threshold: u64,

    /// Percentage off the cart total
    pub discount: u8,
}

impl CartWiseRule {
    /// Create a new cart-wise rule.
    pub fn new(threshold: u64, discount: u8) -> Self {
        Self {
            threshold,
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

    /// Evaluate against a precomputed cart total.
    pub fn evaluate(&self, cart_total: u64) -> Evaluation {
        if cart_total < self.threshold {
            return Evaluation::NotApplicable(Ineligibility::BelowThreshold {
                total: cart_total,
                threshold: self.threshold,
            });
        }

        Evaluation::Applicable(Award::cart(percent_of(self.discount, cart_total)))
    }
}
