//! Cart Requests

use coupons::products::ProductId;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use coupons_app::domain::carts::data::CartLine;

/// Cart line as submitted by the client. Prices come from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Product id
    pub product_id: u64,

    /// Units, at least 1
    pub quantity: u32,
}

/// Cart Request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartRequest {
    /// Cart lines in order
    pub items: Vec<CartItemRequest>,
}

impl From<CartRequest> for Vec<CartLine> {
    fn from(request: CartRequest) -> Self {
        request
            .items
            .into_iter()
            .map(|item| CartLine {
                product_id: ProductId::new(item.product_id),
                quantity: item.quantity,
            })
            .collect()
    }
}
