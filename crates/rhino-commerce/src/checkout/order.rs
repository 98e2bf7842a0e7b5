//! Order types.
//!
//! An order only exists for the moment of checkout: it is built from a
//! cart snapshot, acknowledged, and dropped. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartStore, LineItem};
use crate::checkout::{LabelSet, PaymentMethod};
use crate::ids::OrderId;
use crate::money::Money;

/// A submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Snapshot of the cart at submission.
    pub items: Vec<LineItem>,
    /// Free-text delivery address.
    pub address: String,
    pub payment_method: PaymentMethod,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot `cart` into a new order.
    pub fn from_cart(
        cart: &CartStore,
        address: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            address: address.into(),
            payment_method,
            total: cart.total(),
            placed_at: Utc::now(),
        }
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The acknowledgment shown to the customer.
    pub fn acknowledge(&self) -> OrderAck {
        OrderAck {
            order_id: self.id.clone(),
            payment_method: self.payment_method,
            total: self.total,
            item_count: self.item_count(),
            line_count: self.items.len(),
        }
    }
}

/// Confirmation returned by checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAck {
    pub order_id: OrderId,
    pub payment_method: PaymentMethod,
    pub total: Money,
    /// Sum of quantities.
    pub item_count: i64,
    /// Number of distinct items.
    pub line_count: usize,
}

impl OrderAck {
    /// Confirmation text, e.g. "Order placed! Payment method: Cash on
    /// Delivery\nTotal: ₹20997".
    pub fn message(&self, labels: LabelSet) -> String {
        format!(
            "Order placed! Payment method: {}\nTotal: {}",
            self.payment_method.label(labels),
            self.total
        )
    }
}
