//! Receipt
//!
//! An itemized cart after one rule has been applied.

use serde::Serialize;

use crate::{cart::Cart, products::ProductId};

/// A cart line with the discount attributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountedItem {
    /// Product on the line
    pub product_id: ProductId,

    /// Units on the line
    pub quantity: u32,

    /// Unit price in minor units
    pub unit_price: u64,

    /// Discount attributed to the line, never more than the line total
    pub discount: u64,
}

impl DiscountedItem {
    /// Line total before discount.
    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price)
    }
}

/// Itemized result of applying a rule.
///
/// For cart-wise rules every line discount is zero and only the totals carry the
/// discount; for every other rule `total_discount` equals the sum of line discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountedCart {
    /// Lines in cart order
    pub items: Vec<DiscountedItem>,

    /// Cart total before discount
    pub total_price: u64,

    /// Total discount granted
    pub total_discount: u64,

    /// `total_price - total_discount`
    pub final_price: u64,
}

impl DiscountedCart {
    /// Echo `cart` with no discount on any line.
    pub fn undiscounted(cart: &Cart, total_price: u64) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| DiscountedItem {
                product_id: item.product_id(),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                discount: 0,
            })
            .collect();

        Self {
            items,
            total_price,
            total_discount: 0,
            final_price: total_price,
        }
    }

    /// Sum of the per-line discounts.
    pub fn line_discounts(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |total, item| total.saturating_add(item.discount))
    }
}
