//! Cart store and line item types.

use serde::{Deserialize, Serialize};

use crate::cart::{CartPricing, LineItemPricing, QuantityPolicy};
use crate::catalog::{Product, RelatedProduct};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A line item in the cart.
///
/// The quantity is only written through [`CartStore`], which keeps it within
/// the store's [`QuantityPolicy`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased; unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    quantity: i64,
}

impl LineItem {
    /// Quantity, always at least 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// unit_price * quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}

/// The shopping cart of one session.
///
/// Items keep insertion order and are keyed by product ID: adding an ID
/// that is already present increases its quantity. Totals are computed on
/// every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
    currency: Currency,
    policy: QuantityPolicy,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            policy: QuantityPolicy::default(),
        }
    }

    /// Use a different quantity policy.
    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        self.policy = policy;
        for item in &mut self.items {
            item.quantity = policy.clamp(item.quantity);
        }
        self
    }

    /// Add `quantity` of an item.
    ///
    /// An existing line with the same ID has its quantity increased (its
    /// name and price are kept); otherwise a new line is appended. The
    /// quantity is clamped into the policy range and the line saturates at
    /// the cap. Returns the line's resulting quantity.
    ///
    /// Returns an error, leaving the cart unchanged, if the price is
    /// negative or in a different currency from the cart.
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<i64, CommerceError> {
        if unit_price.is_negative() {
            return Err(CommerceError::InvalidPrice(unit_price.to_string()));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = self.policy.combine(existing.quantity, quantity);
            return Ok(existing.quantity);
        }

        let quantity = self.policy.clamp(quantity);
        self.items.push(LineItem {
            id,
            name: name.into(),
            unit_price,
            quantity,
        });
        Ok(quantity)
    }

    /// Add a single unit of an item.
    pub fn add_one(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<i64, CommerceError> {
        self.add_item(id, name, unit_price, 1)
    }

    /// Add a catalog product.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        self.add_item(product.id.clone(), product.name.clone(), product.price, quantity)
    }

    /// Add a related product teaser.
    pub fn add_related(
        &mut self,
        product: &RelatedProduct,
        quantity: i64,
    ) -> Result<i64, CommerceError> {
        self.add_item(product.id.clone(), product.name.clone(), product.price, quantity)
    }

    /// Remove an item. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Set an item's quantity, clamped into the policy range.
    ///
    /// Returns the stored quantity, or `None` if the item is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Option<i64> {
        let policy = self.policy;
        self.items.iter_mut().find(|i| &i.id == id).map(|item| {
            item.quantity = policy.clamp(quantity);
            item.quantity
        })
    }

    /// Set an item's quantity from raw quantity-field text.
    ///
    /// Non-numeric input is rejected and the stored quantity is unchanged.
    pub fn update_quantity_input(
        &mut self,
        id: &ProductId,
        input: &str,
    ) -> Result<Option<i64>, CommerceError> {
        let quantity = self.policy.parse(input)?;
        Ok(self.update_quantity(id, quantity))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price * quantity over all items.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| {
                acc.saturating_add(&item.subtotal())
            })
    }

    /// Per-line breakdown plus totals.
    pub fn pricing(&self) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.id.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        CartPricing {
            line_items,
            item_count: self.item_count(),
            grand_total: self.total(),
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::INR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MAX_QUANTITY_PER_ITEM;

    fn inr(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::INR));
    }

    #[test]
    fn test_add_item() {
        let mut cart = CartStore::default();
        let quantity = cart
            .add_item(ProductId::new("1"), "RhinoFuse Ultimate", inr(6999), 2)
            .unwrap();

        assert_eq!(quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "RhinoFuse Ultimate", inr(6999), 1)
            .unwrap();
        cart.add_item(ProductId::new("1"), "RhinoFuse Ultimate", inr(6999), 2)
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity(), 3);
        assert_eq!(cart.total(), inr(20997));
    }

    #[test]
    fn test_add_existing_keeps_first_price() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "First", inr(100), 1).unwrap();
        cart.add_item(ProductId::new("1"), "Second", inr(999), 1).unwrap();

        let item = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(item.name, "First");
        assert_eq!(item.unit_price, inr(100));
        assert_eq!(cart.total(), inr(200));
    }

    #[test]
    fn test_add_clamps_quantity() {
        let mut cart = CartStore::default();
        assert_eq!(cart.add_one(ProductId::new("1"), "A", inr(10)).unwrap(), 1);
        assert_eq!(cart.add_item(ProductId::new("2"), "B", inr(10), 0).unwrap(), 1);
        assert_eq!(cart.add_item(ProductId::new("2"), "B", inr(10), -5).unwrap(), 2);
        assert_eq!(
            cart.add_item(ProductId::new("3"), "C", inr(10), i64::MAX).unwrap(),
            MAX_QUANTITY_PER_ITEM
        );
        assert_eq!(
            cart.add_item(ProductId::new("3"), "C", inr(10), 5).unwrap(),
            MAX_QUANTITY_PER_ITEM
        );
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let mut cart = CartStore::default();
        let result = cart.add_item(
            ProductId::new("1"),
            "Imported",
            Money::new(4999, Currency::USD),
            1,
        );

        assert_eq!(
            result,
            Err(CommerceError::CurrencyMismatch {
                expected: "INR".to_string(),
                got: "USD".to_string(),
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();

        let result = cart.add_item(ProductId::new("2"), "Refund", inr(-500), 1);
        assert_eq!(
            result,
            Err(CommerceError::InvalidPrice("-\u{20b9}500".to_string()))
        );

        // Also rejected when the id already has a line.
        assert!(cart
            .add_item(ProductId::new("1"), "A", inr(-500), 1)
            .is_err());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity(), 1);
        assert_eq!(cart.total(), inr(100));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();
        cart.add_item(ProductId::new("2"), "B", inr(50), 3).unwrap();
        assert_eq!(cart.total(), inr(250));

        assert!(cart.remove_item(&ProductId::new("1")));
        assert_eq!(cart.total(), inr(150));
        assert!(!cart.remove_item(&ProductId::new("1")));
        assert_eq!(cart.total(), inr(150));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();

        assert_eq!(cart.update_quantity(&ProductId::new("1"), 5), Some(5));
        assert_eq!(cart.total(), inr(500));
        assert_eq!(cart.update_quantity(&ProductId::new("1"), 0), Some(1));
        assert_eq!(cart.update_quantity(&ProductId::new("1"), -3), Some(1));
        assert_eq!(cart.update_quantity(&ProductId::new("9"), 4), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_input() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(100), 2).unwrap();
        let id = ProductId::new("1");

        assert_eq!(cart.update_quantity_input(&id, "4"), Ok(Some(4)));
        assert_eq!(
            cart.update_quantity_input(&id, "four"),
            Err(CommerceError::InvalidQuantityInput("four".to_string()))
        );
        assert_eq!(cart.get(&id).unwrap().quantity(), 4);
        assert_eq!(
            cart.update_quantity_input(&id, ""),
            Err(CommerceError::InvalidQuantityInput(String::new()))
        );
        assert_eq!(cart.update_quantity_input(&id, "-1"), Ok(Some(1)));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::INR));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(1000), 2).unwrap();
        cart.add_item(ProductId::new("2"), "B", inr(2000), 1).unwrap();

        let pricing = cart.pricing();
        assert_eq!(pricing.grand_total, inr(4000));
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line(&ProductId::new("1")).unwrap().subtotal, inr(2000));
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut cart = CartStore::default();
        for id in ["3", "1", "2"] {
            cart.add_item(ProductId::new(id), id, inr(1), 1).unwrap();
        }
        cart.add_item(ProductId::new("3"), "3", inr(1), 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_smaller_policy_clamps_existing_items() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", inr(1), 50).unwrap();
        let cart = cart.with_policy(QuantityPolicy::new(10));

        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity(), 10);
    }

    #[test]
    fn test_total_saturates() {
        let mut cart = CartStore::default();
        cart.add_item(ProductId::new("1"), "A", Money::new(i64::MAX, Currency::INR), 2)
            .unwrap();
        cart.add_item(ProductId::new("2"), "B", inr(1), 1).unwrap();

        assert_eq!(cart.total().amount_minor, i64::MAX);
    }
}
