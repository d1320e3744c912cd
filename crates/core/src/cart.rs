//! Cart

use rustc_hash::FxHashMap;

use crate::products::ProductId;

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedItem {
    product_id: ProductId,
    quantity: u32,
    unit_price: u64,
}

impl PricedItem {
    /// Create a new priced line. `unit_price` is in minor units.
    pub fn new(product_id: ProductId, quantity: u32, unit_price: u64) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    /// Return the product on this line.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Return the number of units on this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Return the unit price in minor units.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Return `quantity × unit_price`, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price)
    }
}

/// An ordered sequence of priced lines.
///
/// Product ids are expected to be unique per cart; where they are not, lookups by product
/// resolve to the first matching line in cart order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<PricedItem>,
}

impl Cart {
    /// Create a cart from the given lines.
    pub fn new(items: impl Into<Vec<PricedItem>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Return the cart lines in order.
    pub fn items(&self) -> &[PricedItem] {
        &self.items
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line total.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |total, item| total.saturating_add(item.line_total()))
    }

    /// Find the first line holding `product`.
    pub fn find(&self, product: ProductId) -> Option<&PricedItem> {
        self.items.iter().find(|item| item.product_id == product)
    }

    /// Index lines by product, keeping the first line for repeated products.
    pub fn index(&self) -> FxHashMap<ProductId, &PricedItem> {
        let mut index = FxHashMap::default();

        for item in &self.items {
            index.entry(item.product_id).or_insert(item);
        }

        index
    }
}

impl FromIterator<PricedItem> for Cart {
    fn from_iter<I: IntoIterator<Item = PricedItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
