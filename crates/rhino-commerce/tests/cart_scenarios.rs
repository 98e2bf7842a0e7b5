//! End-to-end cart and checkout scenarios.

use rhino_commerce::prelude::*;

fn inr(amount: i64) -> Money {
    Money::from_major(amount, Currency::INR)
}

#[test]
fn test_repeated_adds_sum_quantities() {
    let mut cart = CartStore::default();
    let id = ProductId::new("1");
    let adds = [1, 4, 2, 7, 1];

    for quantity in adds {
        cart.add_item(id.clone(), "RhinoFuse Ultimate", inr(6999), quantity)
            .unwrap();
    }

    let expected: i64 = adds.iter().sum();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(&id).unwrap().quantity(), expected);
}

#[test]
fn test_same_product_added_twice() {
    let mut cart = CartStore::default();
    cart.add_item(ProductId::new("1"), "RhinoFuse Ultimate", inr(6999), 1)
        .unwrap();
    cart.add_item(ProductId::new("1"), "RhinoFuse Ultimate", inr(6999), 2)
        .unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity(), 3);
    assert_eq!(cart.total(), inr(20997));
}

#[test]
fn test_total_tracks_every_mutation() {
    let mut cart = CartStore::default();
    cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();
    cart.add_item(ProductId::new("2"), "B", inr(50), 3).unwrap();
    assert_eq!(cart.total(), inr(250));

    cart.remove_item(&ProductId::new("1"));
    assert_eq!(cart.total(), inr(150));

    cart.update_quantity(&ProductId::new("2"), 1);
    assert_eq!(cart.total(), inr(50));

    let expected = cart
        .items()
        .iter()
        .map(|i| i.unit_price.amount_minor * i.quantity())
        .sum::<i64>();
    assert_eq!(cart.total().amount_minor, expected);
}

#[test]
fn test_remove_is_idempotent() {
    let mut cart = CartStore::default();
    cart.add_item(ProductId::new("1"), "A", inr(100), 1).unwrap();
    cart.add_item(ProductId::new("2"), "B", inr(50), 1).unwrap();

    assert!(cart.remove_item(&ProductId::new("1")));
    let after_first = cart.clone();
    assert!(!cart.remove_item(&ProductId::new("1")));
    assert_eq!(cart, after_first);
}

#[test]
fn test_clear_then_total_is_zero() {
    let catalog = Catalog::default();
    let mut cart = CartStore::default();
    cart.add_product(&catalog.featured, 2).unwrap();
    for related in &catalog.related {
        cart.add_related(related, 1).unwrap();
    }
    assert_eq!(cart.len(), 5);

    cart.clear();
    assert!(cart.is_empty());
    assert!(cart.items().is_empty());
    assert_eq!(cart.total(), inr(0));
}

#[test]
fn test_place_order_twice() {
    let catalog = Catalog::default();
    let mut cart = CartStore::default();
    let mut checkout = CheckoutFlow::new();
    cart.add_product(&catalog.featured, 1).unwrap();
    checkout.set_address("Koramangala, Bengaluru");

    let first = checkout.place_order(&mut cart);
    assert_eq!(first.item_count, 1);
    assert_eq!(first.total, inr(6999));
    assert!(cart.is_empty());

    let second = checkout.place_order(&mut cart);
    assert_eq!(second.item_count, 0);
    assert_eq!(second.total, inr(0));
    assert_ne!(first.order_id, second.order_id);
    assert_eq!(
        second.message(LabelSet::Checkout),
        "Order placed! Payment method: Cash on Delivery\nTotal: \u{20b9}0"
    );
}

#[test]
fn test_quantity_field_policy_matches_stepper_policy() {
    let mut cart = CartStore::default();
    let id = ProductId::new("1");
    cart.add_item(id.clone(), "A", inr(10), 0).unwrap();
    assert_eq!(cart.get(&id).unwrap().quantity(), 1);

    assert_eq!(cart.update_quantity_input(&id, "0"), Ok(Some(1)));
    assert!(cart.update_quantity_input(&id, "NaN").is_err());
    assert_eq!(cart.total(), inr(10));
}
