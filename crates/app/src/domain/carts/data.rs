//! Cart Data

use coupons::products::ProductId;

/// Cart Line Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}
