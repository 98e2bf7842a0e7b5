//! Shopping flows across the session and page state.

use std::io::Write;

use rhino_commerce::prelude::*;
use rhino_core::{LoggingSettings, Page, StoreConfig};
use rhino_storefront::state::{AddToCartFeedback, ProductPageState};
use rhino_storefront::StoreSession;

fn session() -> StoreSession {
    rhino_observability::init_tracing(&LoggingSettings::default());
    StoreSession::default()
}

#[test]
fn test_product_page_to_checkout() {
    let mut session = session();
    assert_eq!(session.navigate("/products"), Page::Products);

    let mut page = ProductPageState::new(&session.catalog().featured, &session);
    page.stepper.increment();
    page.stepper.increment();
    page.add_to_cart(&mut session).unwrap();
    assert_eq!(page.feedback(), AddToCartFeedback::Added);
    page.settle_feedback();
    assert!(page.is_panel_open());

    assert_eq!(session.navigate("/cart/"), Page::Cart);
    assert_eq!(
        session.cart().total(),
        Money::from_major(3 * 6999, Currency::INR)
    );

    assert_eq!(session.navigate("/checkout?step=1"), Page::Checkout);
    session.set_address("221B Residency Road, Bengaluru");
    session.set_payment_method(PaymentMethod::Card);
    let ack = session.place_order();

    assert_eq!(ack.item_count, 3);
    assert_eq!(
        ack.message(LabelSet::Checkout),
        "Order placed! Payment method: Credit/Debit Card\nTotal: \u{20b9}20997"
    );
    assert!(session.cart().is_empty());
    assert_eq!(session.checkout().address(), "");
}

#[test]
fn test_cart_page_edits() {
    let mut session = session();
    let featured = ProductId::new("1");
    let helmet = ProductId::new("3");

    session.add_to_cart(&featured, 1).unwrap();
    session.add_to_cart(&helmet, 1).unwrap();
    assert_eq!(session.update_quantity_input(&helmet, "2"), Ok(Some(2)));
    assert!(session.update_quantity_input(&helmet, "two").is_err());
    assert_eq!(
        session.cart().total(),
        Money::from_major(6999 + 2 * 8999, Currency::INR)
    );

    session.remove_item(&featured);
    assert_eq!(session.cart().total(), Money::from_major(17998, Currency::INR));

    session.clear_cart();
    assert_eq!(session.cart().total(), Money::zero(Currency::INR));
}

#[test]
fn test_session_from_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[store]
name = "RhinoFuse US"
currency = "USD"
max_quantity_per_item = 3

[logging]
format = "human"
"#
    )
    .unwrap();

    let config = StoreConfig::load(file.path()).unwrap();
    let mut session = StoreSession::new(&config).unwrap();

    assert_eq!(session.store_name(), "RhinoFuse US");
    assert_eq!(session.add_to_cart(&ProductId::new("1"), 10), Ok(3));
    assert_eq!(session.cart().total().currency, Currency::USD);
    assert_eq!(session.cart().total().to_string(), "$20997");
}
