//! Checkout form state.

use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::checkout::{Order, OrderAck, PaymentMethod};

/// Where the checkout form is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum CheckoutStatus {
    /// Collecting address and payment method.
    #[default]
    Editing,
    /// An order was just placed and the cart cleared.
    Placed(OrderAck),
}

/// Delivery address and payment method for the next order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutFlow {
    address: String,
    payment_method: PaymentMethod,
    status: CheckoutStatus,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delivery address. Free text, not validated.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
        self.status = CheckoutStatus::Editing;
    }

    /// Select a payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
        self.status = CheckoutStatus::Editing;
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn status(&self) -> &CheckoutStatus {
        &self.status
    }

    /// The order that would be placed right now.
    pub fn preview(&self, cart: &CartStore) -> Order {
        Order::from_cart(cart, self.address.clone(), self.payment_method)
    }

    /// Place the order.
    ///
    /// Snapshots the cart, clears it and the address field, and returns the
    /// acknowledgment. Never fails: an empty cart yields an acknowledgment
    /// for zero items. The payment method selection is kept.
    pub fn place_order(&mut self, cart: &mut CartStore) -> OrderAck {
        let order = self.preview(cart);
        let ack = order.acknowledge();

        cart.clear();
        self.address.clear();
        self.status = CheckoutStatus::Placed(ack.clone());

        ack
    }

    /// Acknowledgment of the last order, while the form is untouched.
    pub fn last_ack(&self) -> Option<&OrderAck> {
        match &self.status {
            CheckoutStatus::Placed(ack) => Some(ack),
            CheckoutStatus::Editing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn cart_with_items() -> CartStore {
        let mut cart = CartStore::default();
        cart.add_item(
            ProductId::new("1"),
            "RhinoFuse Ultimate",
            Money::from_major(6999, Currency::INR),
            2,
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_checkout_defaults() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.address(), "");
        assert_eq!(flow.payment_method(), PaymentMethod::CashOnDelivery);
        assert_eq!(flow.status(), &CheckoutStatus::Editing);
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut cart = cart_with_items();
        let mut flow = CheckoutFlow::new();
        flow.set_address("12 MG Road, Bengaluru");
        flow.set_payment_method(PaymentMethod::Card);

        let ack = flow.place_order(&mut cart);

        assert!(cart.is_empty());
        assert_eq!(ack.item_count, 2);
        assert_eq!(ack.total, Money::from_major(13998, Currency::INR));
        assert_eq!(ack.payment_method, PaymentMethod::Card);
        assert_eq!(flow.address(), "");
        assert_eq!(flow.payment_method(), PaymentMethod::Card);
        assert_eq!(flow.last_ack(), Some(&ack));
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let mut cart = CartStore::default();
        let mut flow = CheckoutFlow::new();

        let ack = flow.place_order(&mut cart);
        assert_eq!(ack.item_count, 0);
        assert_eq!(ack.line_count, 0);
        assert_eq!(ack.total, Money::zero(Currency::INR));
    }

    #[test]
    fn test_editing_resets_status() {
        let mut cart = cart_with_items();
        let mut flow = CheckoutFlow::new();
        flow.place_order(&mut cart);
        assert!(flow.last_ack().is_some());

        flow.set_address("New address");
        assert_eq!(flow.status(), &CheckoutStatus::Editing);
        assert!(flow.last_ack().is_none());
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let cart = cart_with_items();
        let mut flow = CheckoutFlow::new();
        flow.set_address("Somewhere");

        let order = flow.preview(&cart);
        assert_eq!(order.address, "Somewhere");
        assert_eq!(cart.item_count(), 2);
        assert_eq!(flow.address(), "Somewhere");
    }
}
