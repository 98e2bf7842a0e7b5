//! Pricing breakdown for the cart page.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price * quantity.
    pub subtotal: Money,
}

/// Cart totals with their per-line breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    pub line_items: Vec<LineItemPricing>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Prices are inclusive of all taxes, so this is also the amount due.
    pub grand_total: Money,
}

impl CartPricing {
    /// Pricing line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&LineItemPricing> {
        self.line_items.iter().find(|l| &l.product_id == product_id)
    }
}
